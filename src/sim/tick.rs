//! Fixed timestep simulation tick
//!
//! One call to [`tick`] advances the world by exactly one step: steer the
//! player, move everything, resolve collisions, ramp difficulty, and check
//! for the end of the run. The caller owns scheduling (one tick per display
//! refresh, or as many as a test wants).

use glam::Vec2;

use super::collision::balls_overlap;
use super::state::{GamePhase, WorldState};

/// Directional intent from the input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Directional key pressed this tick, if any
    pub steer: Option<Direction>,
    /// Restart after game over
    pub retry: bool,
    /// Demo mode - steer toward the nearest zombie automatically
    pub idle: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut WorldState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        // Terminal until an explicit retry
        if input.retry {
            let seed = state.next_seed();
            state.reset(seed);
        }
        return;
    }

    let steer = match input.steer {
        None if input.idle => idle_steer(state),
        other => other,
    };
    if let Some(dir) = steer {
        apply_steer(state, dir);
    }

    state.time_ticks += 1;

    let (world_w, world_h) = (state.world_w, state.world_h);
    state.player.step_bounce(world_w, world_h);
    for zombie in &mut state.zombies {
        zombie.step_bounce(world_w, world_h);
    }
    for anti in &mut state.anti_vaccines {
        anti.step_bounce(world_w, world_h);
    }

    eat_zombies(state);
    absorb_anti_vaccines(state);

    // Difficulty rises linearly with survival time (2x after one minute)
    state.difficulty = 1.0 + state.elapsed_secs() / state.tuning.difficulty_ramp_secs;

    if state.balls_eaten >= state.tuning.eaten_limit {
        let survived = state.elapsed_secs().floor() as u64;
        state.high_score = state.high_score.max(survived);
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over after {}s ({} eaten), high score {}s",
            survived,
            state.balls_eaten,
            state.high_score
        );
    }
}

/// Set player velocity along one axis, zeroing the other.
///
/// Speed is sampled from the difficulty at press time; a player already in
/// motion keeps its old speed until the next press.
fn apply_steer(state: &mut WorldState, dir: Direction) {
    let speed = state.tuning.base_speed * state.difficulty;
    state.player.vel = match dir {
        Direction::Up => Vec2::new(0.0, -speed),
        Direction::Down => Vec2::new(0.0, speed),
        Direction::Left => Vec2::new(-speed, 0.0),
        Direction::Right => Vec2::new(speed, 0.0),
    };
}

/// Demo steering: chase the nearest zombie along the dominant axis
fn idle_steer(state: &WorldState) -> Option<Direction> {
    let player_pos = state.player.pos;
    let nearest = state.zombies.iter().min_by(|a, b| {
        a.pos
            .distance_squared(player_pos)
            .partial_cmp(&b.pos.distance_squared(player_pos))
            .unwrap_or(std::cmp::Ordering::Equal)
    })?;

    let delta = nearest.pos - player_pos;
    Some(if delta.x.abs() >= delta.y.abs() {
        if delta.x >= 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y >= 0.0 {
        Direction::Down
    } else {
        Direction::Up
    })
}

/// Resolve player-zombie collisions.
///
/// Collect-then-apply: the scan never mutates the collection it walks, so a
/// removal cannot skip the zombie after it. Replacements spawn after the
/// scan and are not eligible for collision until the next tick.
fn eat_zombies(state: &mut WorldState) {
    let mut eaten: Vec<(usize, f32)> = Vec::new();
    for (idx, zombie) in state.zombies.iter().enumerate() {
        if balls_overlap(&state.player, zombie) {
            eaten.push((idx, zombie.radius));
        }
    }
    if eaten.is_empty() {
        return;
    }

    let mut replacements = 0u32;
    let mut new_antis = 0u32;
    for &(_, radius) in &eaten {
        state.player.grow(state.tuning.growth_factor * radius);
        state.balls_eaten += 1;
        replacements += 1;
        // Every second zombie eaten summons an anti-vaccine
        let every = state.tuning.anti_vaccine_every;
        if every != 0 && state.balls_eaten.is_multiple_of(every) {
            new_antis += 1;
        }
    }
    for &(idx, _) in eaten.iter().rev() {
        state.zombies.remove(idx);
    }
    for _ in 0..replacements {
        state.spawn_zombie();
    }
    for _ in 0..new_antis {
        state.spawn_anti_vaccine();
    }

    log::debug!(
        "ate {} zombie(s), total {}, player radius {:.1}",
        replacements,
        state.balls_eaten,
        state.player.radius
    );
}

/// Resolve player-anti-vaccine collisions (collect-then-apply, no respawn)
fn absorb_anti_vaccines(state: &mut WorldState) {
    let mut hits: Vec<usize> = Vec::new();
    for (idx, anti) in state.anti_vaccines.iter().enumerate() {
        if balls_overlap(&state.player, anti) {
            hits.push(idx);
        }
    }
    if hits.is_empty() {
        return;
    }

    for _ in &hits {
        state.player.grow(-state.tuning.anti_vaccine_penalty);
        state.balls_eaten = state.balls_eaten.saturating_sub(state.tuning.eaten_penalty);
    }
    for &idx in hits.iter().rev() {
        state.anti_vaccines.remove(idx);
    }

    log::debug!(
        "hit {} anti-vaccine(s), total back to {}, player radius {:.1}",
        hits.len(),
        state.balls_eaten,
        state.player.radius
    );
}
