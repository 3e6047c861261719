//! Entity factory: the fish, the hamster and the stars.

use glam::Vec2;
use tidepool_engine::{
    BodyDesc, ColliderDesc, EngineContext, Entity, EntityId, SpriteComponent, SpriteId,
};

use crate::kinematics;
use crate::tuning::*;

pub mod tags {
    pub const FISH: &str = "fish";
    pub const HAMSTER: &str = "hamster";
    pub const STAR: &str = "star";
    pub const PLATFORM: &str = "platform";
    pub const WALL: &str = "wall";
}

pub mod sprites {
    use tidepool_engine::SpriteId;

    pub const FISH: SpriteId = SpriteId(0);
    pub const HAMSTER: SpriteId = SpriteId(1);
    pub const STAR: SpriteId = SpriteId(2);
    pub const PLATFORM: SpriteId = SpriteId(3);
    pub const WALL: SpriteId = SpriteId(4);
}

fn actor(ctx: &mut EngineContext, tag: &str, sprite: SpriteId, size: Vec2) -> Entity {
    let id = ctx.next_id();
    Entity::new(id)
        .with_tag(tag)
        .with_size(size)
        .with_sprite(SpriteComponent::new(sprite))
}

fn actor_body(pos: Vec2, size: Vec2) -> BodyDesc {
    BodyDesc::dynamic(ColliderDesc::rect(size.x, size.y))
        .with_position(pos)
        .with_fixed_rotation(true)
        .with_linear_damping(AIR_FRICTION * TICK_HZ)
}

/// The player body, 60×45.
pub fn spawn_fish(ctx: &mut EngineContext, pos: Vec2) -> EntityId {
    let entity = actor(ctx, tags::FISH, sprites::FISH, FISH_SIZE);
    ctx.spawn_with_body(entity, actor_body(pos, FISH_SIZE), FISH_MATERIAL)
}

/// The pursuer body, 50×35.
pub fn spawn_hamster(ctx: &mut EngineContext, pos: Vec2) -> EntityId {
    let entity = actor(ctx, tags::HAMSTER, sprites::HAMSTER, HAMSTER_SIZE);
    ctx.spawn_with_body(entity, actor_body(pos, HAMSTER_SIZE), HAMSTER_MATERIAL)
}

/// A collectible marker. Stars have no body; collection is by distance.
pub fn spawn_star(ctx: &mut EngineContext, pos: Vec2) -> EntityId {
    let entity = actor(ctx, tags::STAR, sprites::STAR, Vec2::splat(STAR_RADIUS * 2.0)).with_pos(pos);
    ctx.spawn(entity)
}

pub fn spawn_initial_stars(ctx: &mut EngineContext) -> Vec<EntityId> {
    INITIAL_STARS.iter().map(|&pos| spawn_star(ctx, pos)).collect()
}

/// Mirror the sprite once horizontal speed passes `threshold`; keep it otherwise.
pub fn update_facing(ctx: &mut EngineContext, id: EntityId, threshold: f32) {
    let vx = kinematics::velocity(ctx, id).x;
    let Some(entity) = ctx.scene.get_mut(id) else {
        return;
    };
    if vx > threshold {
        entity.set_flip_x(false);
    } else if vx < -threshold {
        entity.set_flip_x(true);
    }
}

/// Cosmetic motion: the fish wobbles as it swims and stars spin.
/// Runs after integration so the solver's locked rotation does not undo it.
pub fn animate(ctx: &mut EngineContext, fish: EntityId) {
    let elapsed = ctx.clock.elapsed();
    let wobble = (elapsed * 1000.0 * SWIM_RATE).sin() * SWIM_WOBBLE;
    let spin = (elapsed / STAR_SPIN_PERIOD).fract() * std::f32::consts::TAU;

    for entity in ctx.scene.iter_mut() {
        if entity.id == fish {
            entity.rotation = wobble;
        } else if entity.is(tags::STAR) {
            entity.rotation = spin;
        }
    }
}
