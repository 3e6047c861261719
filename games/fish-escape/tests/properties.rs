use fish_escape::controls::InputState;
use fish_escape::movement::steer;
use fish_escape::proximity::StarSpawner;
use fish_escape::state::GameState;
use glam::Vec2;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum ScoreOp {
    Star,
    Caught,
}

fn score_op() -> impl Strategy<Value = ScoreOp> {
    prop_oneof![Just(ScoreOp::Star), Just(ScoreOp::Caught)]
}

fn input_state() -> impl Strategy<Value = InputState> {
    (any::<bool>(), any::<bool>(), any::<bool>())
        .prop_map(|(left, right, jump)| InputState { left, right, jump })
}

proptest! {
    #[test]
    fn score_matches_floored_model(ops in prop::collection::vec(score_op(), 0..200)) {
        let mut state = GameState::new();
        let mut model: i64 = 0;
        for op in ops {
            match op {
                ScoreOp::Star => {
                    state.collect(100);
                    model += 100;
                }
                ScoreOp::Caught => {
                    state.penalize(50);
                    model = (model - 50).max(0);
                }
            }
            prop_assert_eq!(state.score() as i64, model);
        }
    }

    #[test]
    fn run_speed_never_exceeds_cap(
        inputs in prop::collection::vec(input_state(), 1..50),
        vx in -1000.0f32..1000.0,
        vy in -50.0f32..50.0,
    ) {
        let mut velocity = Vec2::new(vx, vy);
        for input in inputs {
            let steering = steer(input, velocity);
            prop_assert!(steering.velocity.x.abs() <= 5.0, "vx = {}", steering.velocity.x);
            // About one tick of the forces acting on the fish's mass.
            velocity = steering.velocity + steering.force * 100.0;
        }
    }

    #[test]
    fn idle_drift_never_reverses(vx in -5.0f32..5.0, vy in -10.0f32..10.0) {
        let next = steer(InputState::default(), Vec2::new(vx, vy)).velocity;
        prop_assert!(next.x * vx >= 0.0);
        prop_assert!(next.x.abs() <= vx.abs());
        prop_assert_eq!(next.y, vy);
    }

    #[test]
    fn replacement_stars_stay_in_band(seed in any::<u64>()) {
        let mut spawner = StarSpawner::new(seed);
        for _ in 0..20 {
            let p = spawner.next_position();
            prop_assert!((50.0..=750.0).contains(&p.x));
            prop_assert!((50.0..=200.0).contains(&p.y));
        }
    }
}
