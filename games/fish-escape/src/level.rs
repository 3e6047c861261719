//! Static level geometry: boundary walls and the platform layout.

use glam::Vec2;
use tidepool_engine::{
    BodyDesc, ColliderDesc, EngineContext, Entity, EntityId, SpriteComponent, SpriteId,
};

use crate::entities::{sprites, tags};
use crate::tuning::{PLATFORM_MATERIAL, WALL_THICKNESS, WORLD_H, WORLD_W};

/// A static block, by center and full size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub center: Vec2,
    pub size: Vec2,
}

const fn block(x: f32, y: f32, w: f32, h: f32) -> Block {
    Block {
        center: Vec2::new(x, y),
        size: Vec2::new(w, h),
    }
}

pub const PLATFORMS: [Block; 15] = [
    // lower
    block(150.0, 400.0, 120.0, 20.0),
    block(350.0, 370.0, 100.0, 20.0),
    block(550.0, 400.0, 120.0, 20.0),
    block(700.0, 370.0, 80.0, 20.0),
    // middle
    block(200.0, 300.0, 80.0, 20.0),
    block(400.0, 280.0, 100.0, 20.0),
    block(600.0, 300.0, 80.0, 20.0),
    // upper
    block(100.0, 200.0, 100.0, 20.0),
    block(300.0, 180.0, 80.0, 20.0),
    block(500.0, 200.0, 100.0, 20.0),
    block(650.0, 180.0, 80.0, 20.0),
    // top
    block(250.0, 120.0, 90.0, 20.0),
    block(550.0, 100.0, 90.0, 20.0),
    // side ledges
    block(50.0, 320.0, 60.0, 20.0),
    block(750.0, 280.0, 60.0, 20.0),
];

/// Ground, left wall, right wall, ceiling.
pub fn boundaries() -> [Block; 4] {
    let t = WALL_THICKNESS;
    [
        block(WORLD_W / 2.0, WORLD_H - t / 2.0, WORLD_W, t),
        block(t / 2.0, WORLD_H / 2.0, t, WORLD_H),
        block(WORLD_W - t / 2.0, WORLD_H / 2.0, t, WORLD_H),
        block(WORLD_W / 2.0, t / 2.0, WORLD_W, t),
    ]
}

fn spawn_block(ctx: &mut EngineContext, block: &Block, tag: &str, sprite: SpriteId) -> EntityId {
    let id = ctx.next_id();
    let entity = Entity::new(id)
        .with_tag(tag)
        .with_size(block.size)
        .with_sprite(SpriteComponent::new(sprite));
    ctx.spawn_with_body(
        entity,
        BodyDesc::fixed(ColliderDesc::rect(block.size.x, block.size.y)).with_position(block.center),
        PLATFORM_MATERIAL,
    )
}

/// Build every static body. Returns how many were created.
pub fn build(ctx: &mut EngineContext) -> usize {
    let walls = boundaries();
    for wall in &walls {
        spawn_block(ctx, wall, tags::WALL, sprites::WALL);
    }
    for platform in &PLATFORMS {
        spawn_block(ctx, platform, tags::PLATFORM, sprites::PLATFORM);
    }
    log::debug!("level built: {} walls, {} platforms", walls.len(), PLATFORMS.len());
    walls.len() + PLATFORMS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_is_static_and_complete() {
        let mut ctx = EngineContext::new();
        assert_eq!(build(&mut ctx), 19);
        assert_eq!(ctx.scene.count_by_tag(tags::PLATFORM), 15);
        assert_eq!(ctx.scene.count_by_tag(tags::WALL), 4);
        for entity in ctx.scene.iter() {
            let body = entity.body.unwrap();
            assert!(!ctx.physics.is_dynamic(&body));
        }
    }

    #[test]
    fn walls_enclose_the_world() {
        let [ground, left, right, ceiling] = boundaries();
        assert_eq!(ground.center.y + ground.size.y / 2.0, WORLD_H);
        assert_eq!(left.center.x - left.size.x / 2.0, 0.0);
        assert_eq!(right.center.x + right.size.x / 2.0, WORLD_W);
        assert_eq!(ceiling.center.y - ceiling.size.y / 2.0, 0.0);
    }

    #[test]
    fn platforms_sit_inside_the_walls() {
        for p in &PLATFORMS {
            assert!(p.center.x - p.size.x / 2.0 >= WALL_THICKNESS, "{:?}", p);
            assert!(p.center.x + p.size.x / 2.0 <= WORLD_W - WALL_THICKNESS, "{:?}", p);
        }
    }
}
