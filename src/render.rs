//! Frame composition
//!
//! The simulation never touches a canvas. Each frame it emits a flat list
//! of [`DrawCmd`] values in screen coordinates; whatever renderer hosts the
//! game (canvas, terminal, test harness) consumes them in order.

use glam::Vec2;

use crate::sim::state::{Ball, BallKind, GamePhase, WorldState};

/// Glow styling applied around a sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: &'static str,
}

/// Glow per entity kind: zombies burn red, anti-vaccines pulse yellow
pub fn glow_for(kind: BallKind) -> Option<Glow> {
    match kind {
        BallKind::Player => None,
        BallKind::Zombie => Some(Glow {
            blur: 10.0,
            color: "red",
        }),
        BallKind::AntiVaccine => Some(Glow {
            blur: 20.0,
            color: "yellow",
        }),
    }
}

/// One drawing operation, in screen coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear,
    /// Sprite for an entity; `x`/`y` is the top-left corner
    Image {
        kind: BallKind,
        x: f32,
        y: f32,
        size: f32,
        glow: Option<Glow>,
    },
    /// Stroked rectangle (the world boundary)
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Text {
        text: String,
        x: f32,
        y: f32,
        px: f32,
    },
}

/// Camera translation keeping the player at the viewport center
pub fn camera_offset(state: &WorldState, viewport: Vec2) -> Vec2 {
    state.player.pos - viewport / 2.0
}

fn sprite(ball: &Ball, camera: Vec2) -> DrawCmd {
    DrawCmd::Image {
        kind: ball.kind,
        x: ball.pos.x - camera.x - ball.radius,
        y: ball.pos.y - camera.y - ball.radius,
        size: ball.radius * 2.0,
        glow: glow_for(ball.kind),
    }
}

/// Compose the full frame for the current state.
///
/// While active: clear, boundary, player, zombies, anti-vaccines, HUD.
/// After game over: the terminal screen with final stats. The retry
/// affordance itself is the host's concern; it feeds back in through
/// `TickInput::retry`.
pub fn compose_frame(state: &WorldState, viewport: Vec2) -> Vec<DrawCmd> {
    let mut frame = vec![DrawCmd::Clear];

    if state.phase == GamePhase::GameOver {
        frame.push(DrawCmd::Text {
            text: "Game Over".to_string(),
            x: viewport.x / 2.0 - 100.0,
            y: viewport.y / 2.0 - 50.0,
            px: 48.0,
        });
        frame.push(DrawCmd::Text {
            text: format!("High Score: {}", state.high_score),
            x: viewport.x / 2.0 - 80.0,
            y: viewport.y / 2.0,
            px: 24.0,
        });
        frame.push(DrawCmd::Text {
            text: format!("Balls Eaten: {}", state.balls_eaten),
            x: viewport.x / 2.0 - 80.0,
            y: viewport.y / 2.0 + 30.0,
            px: 24.0,
        });
        return frame;
    }

    let camera = camera_offset(state, viewport);

    frame.push(DrawCmd::Rect {
        x: -camera.x,
        y: -camera.y,
        w: state.world_w,
        h: state.world_h,
    });

    frame.push(sprite(&state.player, camera));
    for zombie in &state.zombies {
        frame.push(sprite(zombie, camera));
    }
    for anti in &state.anti_vaccines {
        frame.push(sprite(anti, camera));
    }

    frame.push(DrawCmd::Text {
        text: format!("Balls Eaten: {}", state.balls_eaten),
        x: 10.0,
        y: 30.0,
        px: 24.0,
    });
    frame.push(DrawCmd::Text {
        text: format!("High Score: {}", state.high_score),
        x: 10.0,
        y: 60.0,
        px: 24.0,
    });

    frame
}
