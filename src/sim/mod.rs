//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Elapsed time derived from the tick counter, never the wall clock
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{balls_overlap, circles_overlap};
pub use state::{Ball, BallKind, GamePhase, WorldState};
pub use tick::{Direction, TickInput, tick};
