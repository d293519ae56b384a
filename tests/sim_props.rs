//! Property tests for the core simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use outbreak::Tuning;
use outbreak::consts::MIN_RADIUS;
use outbreak::sim::{Ball, BallKind, TickInput, WorldState, circles_overlap, tick};

const WORLD: f32 = 400.0;

proptest! {
    #[test]
    fn grow_never_drops_below_floor(
        radius in MIN_RADIUS..500.0f32,
        amount in -1e6f32..1e6,
    ) {
        let mut ball = Ball::new(Vec2::ZERO, radius, Vec2::ZERO, BallKind::Player);
        ball.grow(amount);
        prop_assert!(ball.radius >= MIN_RADIUS);
    }

    #[test]
    fn overlap_is_symmetric(
        ax in -1e3f32..1e3, ay in -1e3f32..1e3, ar in 1.0f32..100.0,
        bx in -1e3f32..1e3, by in -1e3f32..1e3, br in 1.0f32..100.0,
    ) {
        let a = Vec2::new(ax, ay);
        let b = Vec2::new(bx, by);
        prop_assert_eq!(
            circles_overlap(a, ar, b, br),
            circles_overlap(b, br, a, ar)
        );
    }

    #[test]
    fn bounce_keeps_ball_inside_and_radius_fixed(
        x in 0.0f32..WORLD, y in 0.0f32..WORLD,
        vx in -50.0f32..50.0, vy in -50.0f32..50.0,
        radius in 1.0f32..20.0,
    ) {
        // Start from any valid in-bounds position
        let pos = Vec2::new(
            x.clamp(radius, WORLD - radius),
            y.clamp(radius, WORLD - radius),
        );
        let mut ball = Ball::new(pos, radius, Vec2::new(vx, vy), BallKind::Zombie);

        ball.step_bounce(WORLD, WORLD);

        prop_assert_eq!(ball.radius, radius);
        prop_assert!(ball.pos.x >= radius && ball.pos.x <= WORLD - radius);
        prop_assert!(ball.pos.y >= radius && ball.pos.y <= WORLD - radius);
    }

    #[test]
    fn difficulty_is_monotone_within_a_life(seed in any::<u64>(), steps in 1usize..120) {
        let mut state = WorldState::new(seed, Tuning::default());
        let input = TickInput::default();
        let mut last = state.difficulty;

        for _ in 0..steps {
            tick(&mut state, &input);
            prop_assert!(state.difficulty >= last);
            last = state.difficulty;
        }
    }

    #[test]
    fn eaten_counter_is_never_negative_after_any_hit_sequence(
        seed in any::<u64>(),
        hits in 1u32..8,
        eaten_before in 0u32..9,
    ) {
        let mut state = WorldState::new(seed, Tuning::default());
        state.zombies.clear();
        state.anti_vaccines.clear();
        state.balls_eaten = eaten_before;
        for _ in 0..hits {
            let anti = Ball::new(
                state.player.pos,
                state.tuning.anti_vaccine_radius,
                Vec2::ZERO,
                BallKind::AntiVaccine,
            );
            state.anti_vaccines.push(anti);
        }

        tick(&mut state, &TickInput::default());

        prop_assert_eq!(
            state.balls_eaten,
            eaten_before.saturating_sub(2 * hits)
        );
        prop_assert!(state.player.radius >= MIN_RADIUS);
        prop_assert!(state.anti_vaccines.is_empty());
    }
}
