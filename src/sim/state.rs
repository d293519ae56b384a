//! Game state and core simulation types
//!
//! Everything a life consists of lives here: the player, the roaming
//! zombie and anti-vaccine herds, score counters, and the seeded RNG that
//! makes spawning reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::ticks_to_secs;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Active,
    /// Run ended; only a retry leaves this phase
    GameOver,
}

/// What a ball is, which decides its collision effect and glow styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallKind {
    Player,
    Zombie,
    AntiVaccine,
}

/// A circular entity: the player or anything it can run into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// World pixels per tick
    pub vel: Vec2,
    pub radius: f32,
    pub kind: BallKind,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2, kind: BallKind) -> Self {
        Self {
            pos,
            vel,
            radius,
            kind,
        }
    }

    /// Advance one tick and reflect off the world edges.
    ///
    /// A velocity component that carries the ball past a boundary is
    /// negated and the position clamped back inside, so a fast ball cannot
    /// tunnel out of the world.
    pub fn step_bounce(&mut self, world_w: f32, world_h: f32) {
        self.pos += self.vel;

        if self.pos.x + self.radius > world_w {
            self.vel.x = -self.vel.x;
            self.pos.x = world_w - self.radius;
        } else if self.pos.x - self.radius < 0.0 {
            self.vel.x = -self.vel.x;
            self.pos.x = self.radius;
        }

        if self.pos.y + self.radius > world_h {
            self.vel.y = -self.vel.y;
            self.pos.y = world_h - self.radius;
        } else if self.pos.y - self.radius < 0.0 {
            self.vel.y = -self.vel.y;
            self.pos.y = self.radius;
        }
    }

    /// Change radius by `amount` (negative shrinks), floored at `MIN_RADIUS`
    pub fn grow(&mut self, amount: f32) {
        self.radius = (self.radius + amount).max(MIN_RADIUS);
    }
}

/// Complete state of one life, plus the high score that outlives it
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Seed of the current life, for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    pub player: Ball,
    pub zombies: Vec<Ball>,
    pub anti_vaccines: Vec<Ball>,
    /// Net zombies eaten this life (anti-vaccines subtract, floored at 0)
    pub balls_eaten: u32,
    /// Speed multiplier, >= 1 and non-decreasing within a life
    pub difficulty: f32,
    /// Ticks since the current life started
    pub time_ticks: u64,
    /// Best survival time in whole seconds, kept across retries
    pub high_score: u64,
    pub world_w: f32,
    pub world_h: f32,
    pub tuning: Tuning,
}

impl WorldState {
    /// Start a fresh life: player centered, the world seeded with zombies
    /// and a single anti-vaccine.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let world_w = tuning.viewport_w * WORLD_SCALE;
        let world_h = tuning.viewport_h * WORLD_SCALE;

        let player = Ball::new(
            Vec2::new(world_w / 2.0, world_h / 2.0),
            PLAYER_START_RADIUS,
            Vec2::ZERO,
            BallKind::Player,
        );

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Active,
            player,
            zombies: Vec::with_capacity(tuning.initial_zombies as usize),
            anti_vaccines: Vec::new(),
            balls_eaten: 0,
            difficulty: 1.0,
            time_ticks: 0,
            high_score: 0,
            world_w,
            world_h,
            tuning,
        };

        for _ in 0..state.tuning.initial_zombies {
            state.spawn_zombie();
        }
        state.spawn_anti_vaccine();

        log::info!(
            "new life: seed={} world={}x{} zombies={}",
            seed,
            world_w,
            world_h,
            state.zombies.len()
        );
        state
    }

    /// Rebuild the world for a retry. Everything resets except the high
    /// score, which is the only value carried across lives.
    pub fn reset(&mut self, seed: u64) {
        let high_score = self.high_score;
        *self = Self::new(seed, self.tuning);
        self.high_score = high_score;
    }

    /// Seconds since this life started, derived from the tick counter
    pub fn elapsed_secs(&self) -> f32 {
        ticks_to_secs(self.time_ticks)
    }

    /// Add one zombie at a random spot fully inside the world
    pub fn spawn_zombie(&mut self) {
        let radius = self
            .rng
            .random_range(self.tuning.zombie_radius_min..self.tuning.zombie_radius_max);
        let pos = self.random_spawn_pos(radius);
        let vel = self.random_roam_vel();
        self.zombies.push(Ball::new(pos, radius, vel, BallKind::Zombie));
    }

    /// Add one anti-vaccine at a random spot fully inside the world
    pub fn spawn_anti_vaccine(&mut self) {
        let radius = self.tuning.anti_vaccine_radius;
        let pos = self.random_spawn_pos(radius);
        let vel = self.random_roam_vel();
        self.anti_vaccines
            .push(Ball::new(pos, radius, vel, BallKind::AntiVaccine));
    }

    /// Uniform position such that a ball of `radius` fits inside the world
    fn random_spawn_pos(&mut self, radius: f32) -> Vec2 {
        Vec2::new(
            self.rng.random_range(radius..self.world_w - radius),
            self.rng.random_range(radius..self.world_h - radius),
        )
    }

    /// Uniform drift velocity with components in [-roam_speed, roam_speed)
    fn random_roam_vel(&mut self) -> Vec2 {
        let roam = self.tuning.roam_speed;
        Vec2::new(
            self.rng.random_range(-roam..roam),
            self.rng.random_range(-roam..roam),
        )
    }

    /// Derive a fresh seed for the next life from the current RNG
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> WorldState {
        WorldState::new(7, Tuning::default())
    }

    #[test]
    fn test_grow_floors_at_min_radius() {
        let mut ball = Ball::new(Vec2::ZERO, 40.0, Vec2::ZERO, BallKind::Player);
        ball.grow(-25.0);
        assert_eq!(ball.radius, 15.0);
        ball.grow(-1000.0);
        assert_eq!(ball.radius, MIN_RADIUS);
        ball.grow(5.0);
        assert_eq!(ball.radius, MIN_RADIUS + 5.0);
    }

    #[test]
    fn test_step_bounce_reflects_and_clamps() {
        let mut ball = Ball::new(
            Vec2::new(15.0, 50.0),
            10.0,
            Vec2::new(-20.0, 0.0),
            BallKind::Zombie,
        );
        ball.step_bounce(400.0, 400.0);
        // Would have landed at x=-5; reflected and clamped to the edge
        assert_eq!(ball.pos.x, 10.0);
        assert_eq!(ball.vel.x, 20.0);
        assert_eq!(ball.radius, 10.0);
    }

    #[test]
    fn test_new_world_population() {
        let state = fresh();
        assert_eq!(state.zombies.len(), state.tuning.initial_zombies as usize);
        assert_eq!(state.anti_vaccines.len(), 1);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.player.radius, PLAYER_START_RADIUS);
        assert_eq!(state.player.pos, Vec2::new(state.world_w, state.world_h) / 2.0);
    }

    #[test]
    fn test_spawned_zombies_fit_in_world() {
        let state = fresh();
        for z in &state.zombies {
            assert!(z.radius >= state.tuning.zombie_radius_min);
            assert!(z.radius < state.tuning.zombie_radius_max);
            assert!(z.pos.x >= z.radius && z.pos.x <= state.world_w - z.radius);
            assert!(z.pos.y >= z.radius && z.pos.y <= state.world_h - z.radius);
            let roam = state.tuning.roam_speed;
            assert!(z.vel.x.abs() <= roam && z.vel.y.abs() <= roam);
        }
    }

    #[test]
    fn test_reset_keeps_only_high_score() {
        let mut state = fresh();
        state.balls_eaten = 8;
        state.time_ticks = 999;
        state.high_score = 42;
        state.reset(11);
        assert_eq!(state.high_score, 42);
        assert_eq!(state.balls_eaten, 0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.seed, 11);
        assert_eq!(state.phase, GamePhase::Active);
    }
}
