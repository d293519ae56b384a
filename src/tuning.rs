//! Data-driven game balance
//!
//! The balance knobs are gathered here instead of scattered as magic
//! numbers, so a JSON file can override them. Defaults are the classic
//! balance.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::WORLD_SCALE;

/// Balance knobs for one game
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Viewport size in pixels; the world is WORLD_SCALE times larger
    pub viewport_w: f32,
    pub viewport_h: f32,
    /// Zombies roaming the world at life start
    pub initial_zombies: u32,
    /// Zombie radius is drawn uniformly from [min, max)
    pub zombie_radius_min: f32,
    pub zombie_radius_max: f32,
    pub anti_vaccine_radius: f32,
    /// Radius lost on an anti-vaccine hit
    pub anti_vaccine_penalty: f32,
    /// Fraction of an eaten zombie's radius the player gains
    pub growth_factor: f32,
    /// Eaten-counter loss on an anti-vaccine hit
    pub eaten_penalty: u32,
    /// An anti-vaccine spawns each time the eaten counter hits a multiple
    /// of this
    pub anti_vaccine_every: u32,
    /// Player speed per steer press at difficulty 1, pixels per tick
    pub base_speed: f32,
    /// Spawned entities drift with velocity components in
    /// [-roam_speed, roam_speed), pixels per tick
    pub roam_speed: f32,
    /// The run ends when the eaten counter reaches this
    pub eaten_limit: u32,
    /// Seconds of survival per +1.0 of difficulty
    pub difficulty_ramp_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_w: 1280.0,
            viewport_h: 720.0,
            initial_zombies: 100,
            zombie_radius_min: 20.0,
            zombie_radius_max: 30.0,
            anti_vaccine_radius: 40.0,
            anti_vaccine_penalty: 10.0,
            growth_factor: 0.2,
            eaten_penalty: 2,
            anti_vaccine_every: 2,
            base_speed: 2.0,
            roam_speed: 2.0,
            eaten_limit: 10,
            difficulty_ramp_secs: 60.0,
        }
    }
}

impl Tuning {
    /// Reject knob combinations the simulation cannot run on.
    ///
    /// The spawner samples uniform ranges built from these values; an
    /// empty range (inverted radii, an entity wider than the world, a
    /// non-positive roam speed) would panic deep inside the sim, so bad
    /// files are caught here instead.
    fn check(&self) -> Result<(), String> {
        if self.viewport_w <= 0.0 || self.viewport_h <= 0.0 {
            return Err(format!(
                "viewport {}x{} is not positive",
                self.viewport_w, self.viewport_h
            ));
        }
        if self.zombie_radius_min <= 0.0 || self.zombie_radius_min >= self.zombie_radius_max {
            return Err(format!(
                "zombie radius range [{}, {}) is empty",
                self.zombie_radius_min, self.zombie_radius_max
            ));
        }
        let world_min = self.viewport_w.min(self.viewport_h) * WORLD_SCALE;
        let largest = self.zombie_radius_max.max(self.anti_vaccine_radius);
        if self.anti_vaccine_radius <= 0.0 || largest * 2.0 >= world_min {
            return Err(format!(
                "entity radius {largest} does not fit a {world_min} pixel world"
            ));
        }
        if self.roam_speed <= 0.0 {
            return Err(format!("roam speed {} is not positive", self.roam_speed));
        }
        Ok(())
    }

    /// Load tuning from a JSON file, falling back to defaults on any error
    /// or on values the sim cannot run on
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Tuning>(&json) {
                Ok(tuning) => match tuning.check() {
                    Ok(()) => {
                        log::info!("loaded tuning from {}", path.display());
                        tuning
                    }
                    Err(reason) => {
                        log::warn!(
                            "unplayable tuning in {}: {reason}, using defaults",
                            path.display()
                        );
                        Self::default()
                    }
                },
                Err(err) => {
                    log::warn!("bad tuning file {}: {err}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::info!(
                    "no tuning file at {} ({err}), using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_balance() {
        let tuning = Tuning::default();
        assert_eq!(tuning.initial_zombies, 100);
        assert_eq!(tuning.growth_factor, 0.2);
        assert_eq!(tuning.eaten_limit, 10);
        assert_eq!(tuning.anti_vaccine_every, 2);
    }

    #[test]
    fn test_partial_json_keeps_defaults_elsewhere() {
        let tuning: Tuning = serde_json::from_str(r#"{"initial_zombies": 5}"#).unwrap();
        assert_eq!(tuning.initial_zombies, 5);
        assert_eq!(tuning.eaten_limit, 10);
        assert_eq!(tuning.base_speed, 2.0);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load_or_default(Path::new("/nonexistent/tuning.json"));
        assert_eq!(tuning.initial_zombies, 100);
    }

    #[test]
    fn test_inverted_radius_range_falls_back() {
        let path = std::env::temp_dir().join("outbreak_tuning_inverted.json");
        fs::write(
            &path,
            r#"{"zombie_radius_min": 30.0, "zombie_radius_max": 20.0}"#,
        )
        .unwrap();

        let tuning = Tuning::load_or_default(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(tuning.zombie_radius_min, 20.0);
        assert_eq!(tuning.zombie_radius_max, 30.0);
        // Whatever load returns must be able to build a world
        let state = crate::sim::WorldState::new(1, tuning);
        assert_eq!(state.zombies.len(), tuning.initial_zombies as usize);
    }

    #[test]
    fn test_check_rejects_unplayable_knobs() {
        assert!(Tuning::default().check().is_ok());

        let inverted = Tuning {
            zombie_radius_min: 30.0,
            zombie_radius_max: 20.0,
            ..Tuning::default()
        };
        assert!(inverted.check().is_err());

        let oversized = Tuning {
            anti_vaccine_radius: 1e6,
            ..Tuning::default()
        };
        assert!(oversized.check().is_err());

        let flat = Tuning {
            viewport_h: 0.0,
            ..Tuning::default()
        };
        assert!(flat.check().is_err());

        let frozen = Tuning {
            roam_speed: 0.0,
            ..Tuning::default()
        };
        assert!(frozen.check().is_err());
    }
}
