//! Circle-circle overlap testing
//!
//! The whole game runs on one primitive: two circles collide when the
//! distance between their centers is strictly less than the sum of their
//! radii.

use glam::Vec2;

use super::state::Ball;

/// True iff two circles overlap (strict inequality; touching is a miss)
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

/// Overlap test on whole balls
#[inline]
pub fn balls_overlap(a: &Ball, b: &Ball) -> bool {
    circles_overlap(a.pos, a.radius, b.pos, b.radius)
}
