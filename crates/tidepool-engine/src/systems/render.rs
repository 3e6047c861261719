use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Inactive and sprite-less entities are skipped; overflow is logged once per frame.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }
        let Some(sprite) = &entity.sprite else {
            continue;
        };

        let instance = RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            rotation: entity.rotation,
            width: entity.size.x,
            height: entity.size.y,
            sprite: sprite.sprite.0 as f32,
            flip_x: if sprite.flip_x { 1.0 } else { 0.0 },
            alpha: sprite.alpha,
        };

        if !buffer.push(instance) {
            log::warn!("render buffer full at {} instances", buffer.instance_count());
            break;
        }
    }
}
