//! Fish movement: run force, speed clamp, ground-gated jump, air drag.

use glam::Vec2;
use tidepool_engine::{EngineContext, EntityId};

use crate::controls::InputState;
use crate::kinematics;
use crate::tuning::{AIR_DRAG, GROUND_SPEED_EPSILON, JUMP_FORCE, MAX_RUN_SPEED, MOVE_FORCE};

/// What one step of steering decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    /// Logical force for the next integration step.
    pub force: Vec2,
    /// Velocity to hard-set, in pixels per tick.
    pub velocity: Vec2,
    pub jumped: bool,
}

pub fn on_ground(velocity: Vec2) -> bool {
    velocity.y.abs() < GROUND_SPEED_EPSILON
}

/// Decide forces and the new velocity from input and the current velocity.
pub fn steer(input: InputState, velocity: Vec2) -> Steering {
    let mut force = Vec2::ZERO;
    match (input.left, input.right) {
        (true, false) => force.x -= MOVE_FORCE,
        (false, true) => force.x += MOVE_FORCE,
        _ => {}
    }

    let mut velocity = velocity;
    if velocity.x.abs() > MAX_RUN_SPEED {
        velocity.x = MAX_RUN_SPEED.copysign(velocity.x);
    }

    let jumped = input.jump && on_ground(velocity);
    if jumped {
        force.y -= JUMP_FORCE;
    }

    velocity.x *= AIR_DRAG;

    Steering { force, velocity, jumped }
}

/// Apply one step of steering to the fish body. Skipped if the fish is gone.
pub fn drive(ctx: &mut EngineContext, fish: EntityId, input: InputState) -> Option<Steering> {
    if !ctx.is_alive(fish) {
        return None;
    }
    let steering = steer(input, kinematics::velocity(ctx, fish));
    if steering.force != Vec2::ZERO {
        kinematics::push(ctx, fish, steering.force);
    }
    kinematics::set_velocity(ctx, fish, steering.velocity);
    Some(steering)
}
