//! Unit bridge between gameplay logic and the physics world.

use glam::Vec2;
use tidepool_engine::{EngineContext, EntityId};

use crate::tuning::{FORCE_TO_WORLD, TICK_HZ};

/// Body velocity in pixels per tick. Zero for missing entities.
pub fn velocity(ctx: &EngineContext, id: EntityId) -> Vec2 {
    ctx.velocity(id) / TICK_HZ
}

/// Hard-set body velocity, given in pixels per tick.
pub fn set_velocity(ctx: &mut EngineContext, id: EntityId, per_tick: Vec2) {
    ctx.set_velocity(id, per_tick * TICK_HZ);
}

/// Queue a logical force for the next integration step only.
pub fn push(ctx: &mut EngineContext, id: EntityId, force: Vec2) {
    ctx.apply_force(id, force * FORCE_TO_WORLD);
}
