//! Outbreak - an open-world circle-eater arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `render`: Draw-command composition (camera, HUD, game-over screen)
//! - `highscores`: In-memory survival-time leaderboard
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod render;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate; velocities are world pixels per tick
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;

    /// World is this many viewports wide and tall
    pub const WORLD_SCALE: f32 = 4.0;

    /// No entity may shrink below this radius
    pub const MIN_RADIUS: f32 = 10.0;
    /// Player starting radius
    pub const PLAYER_START_RADIUS: f32 = 40.0;
}

/// Elapsed seconds represented by a tick count
#[inline]
pub fn ticks_to_secs(ticks: u64) -> f32 {
    ticks as f32 * consts::SIM_DT
}
