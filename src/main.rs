//! Outbreak entry point
//!
//! Runs the game headlessly: the built-in demo steering plays a life while
//! the loop logs progress, then the final stats and leaderboard are
//! printed. Hosting the sim in a real renderer means doing exactly what
//! this loop does, plus feeding `compose_frame` output to a canvas.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use outbreak::consts::TICK_HZ;
use outbreak::render::compose_frame;
use outbreak::sim::{GamePhase, TickInput, WorldState, tick};
use outbreak::{HighScores, Tuning};

fn main() {
    env_logger::init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load_or_default(Path::new(&path)),
        None => Tuning::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("outbreak starting, seed {seed}");

    let mut state = WorldState::new(seed, tuning);
    let mut scores = HighScores::new();

    let input = TickInput {
        idle: true,
        ..Default::default()
    };
    // Cap the demo at ten simulated minutes
    let max_ticks = 10 * 60 * TICK_HZ as u64;

    for _ in 0..max_ticks {
        tick(&mut state, &input);
        if state.phase == GamePhase::GameOver {
            break;
        }
        if state.time_ticks.is_multiple_of(10 * TICK_HZ as u64) {
            log::info!(
                "t={:.0}s eaten={} radius={:.1} difficulty={:.2}",
                state.elapsed_secs(),
                state.balls_eaten,
                state.player.radius,
                state.difficulty
            );
        }
    }

    let survived = state.elapsed_secs().floor() as u64;
    if state.phase == GamePhase::GameOver {
        if let Some(rank) = scores.add_score(survived, state.balls_eaten) {
            log::info!("run placed #{rank} on the session leaderboard");
        }
    } else {
        log::warn!("demo hit the tick cap before finishing the run");
    }

    let viewport = Vec2::new(state.tuning.viewport_w, state.tuning.viewport_h);
    let frame = compose_frame(&state, viewport);
    log::debug!("final frame: {} draw commands", frame.len());

    println!(
        "survived {survived}s, balls eaten {}, high score {}s",
        state.balls_eaten, state.high_score
    );
    if let Some(best) = scores.top_score() {
        println!("best run this session: {best}s");
    }
}
