//! Hamster AI: run at the fish every step, hop when it is just overhead.

use glam::Vec2;
use serde::Serialize;
use tidepool_engine::{EngineContext, EntityId};

use crate::kinematics;
use crate::movement::on_ground;
use crate::tuning::{HAMSTER_JUMP_FORCE, HAMSTER_JUMP_REACH, HAMSTER_JUMP_RISE, HAMSTER_SPEED};

/// Horizontal direction of pursuit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    Left,
    #[default]
    Right,
}

impl Heading {
    /// Right only when the fish is strictly to the right; ties go left.
    pub fn toward(target_x: f32, from_x: f32) -> Self {
        if target_x > from_x {
            Heading::Right
        } else {
            Heading::Left
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Heading::Left => -1.0,
            Heading::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pursuit {
    pub heading: Heading,
    /// Velocity to hard-set, in pixels per tick.
    pub velocity: Vec2,
    pub jumped: bool,
}

/// Plan one step of pursuit from the two positions and the hamster's velocity.
pub fn plan(fish: Vec2, hamster: Vec2, velocity: Vec2) -> Pursuit {
    let heading = Heading::toward(fish.x, hamster.x);
    let rise = fish.y - hamster.y;
    let reach = (fish.x - hamster.x).abs();
    Pursuit {
        heading,
        velocity: Vec2::new(heading.sign() * HAMSTER_SPEED, velocity.y),
        jumped: rise < HAMSTER_JUMP_RISE && reach < HAMSTER_JUMP_REACH && on_ground(velocity),
    }
}

/// Steer the hamster toward the fish. Skipped if either is gone.
pub fn pursue(ctx: &mut EngineContext, hamster: EntityId, fish: EntityId) -> Option<Pursuit> {
    let fish_pos = ctx.position(fish)?;
    let hamster_pos = ctx.position(hamster)?;
    let pursuit = plan(fish_pos, hamster_pos, kinematics::velocity(ctx, hamster));

    kinematics::set_velocity(ctx, hamster, pursuit.velocity);
    if pursuit.jumped {
        kinematics::push(ctx, hamster, Vec2::new(0.0, -HAMSTER_JUMP_FORCE));
    }
    Some(pursuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_toward_the_fish_keeping_vy() {
        let p = plan(Vec2::new(500.0, 300.0), Vec2::new(300.0, 300.0), Vec2::new(-0.7, 2.5));
        assert_eq!(p.heading, Heading::Right);
        assert_eq!(p.velocity, Vec2::new(1.5, 2.5));
        assert!(!p.jumped);

        let p = plan(Vec2::new(100.0, 300.0), Vec2::new(300.0, 300.0), Vec2::ZERO);
        assert_eq!(p.velocity.x, -1.5);
    }

    #[test]
    fn tie_goes_left() {
        let p = plan(Vec2::new(400.0, 0.0), Vec2::new(400.0, 0.0), Vec2::ZERO);
        assert_eq!(p.heading, Heading::Left);
    }

    #[test]
    fn hops_only_when_fish_is_close_overhead_and_grounded() {
        let hamster = Vec2::new(400.0, 400.0);
        assert!(plan(Vec2::new(450.0, 360.0), hamster, Vec2::ZERO).jumped);
        // Not high enough.
        assert!(!plan(Vec2::new(450.0, 380.0), hamster, Vec2::ZERO).jumped);
        // Too far sideways.
        assert!(!plan(Vec2::new(500.0, 300.0), hamster, Vec2::ZERO).jumped);
        // Already airborne.
        assert!(!plan(Vec2::new(450.0, 300.0), hamster, Vec2::new(0.0, -2.0)).jumped);
    }

    #[test]
    fn heading_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Heading::Left).unwrap(), "\"left\"");
    }
}
