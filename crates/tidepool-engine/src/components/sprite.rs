/// Game-defined visual identifier. The host renderer maps it to an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpriteId(pub u32);

/// Sprite component: defines how an entity appears visually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteComponent {
    /// Which image the host draws for this entity.
    pub sprite: SpriteId,
    /// Mirror the image horizontally (entity faces left).
    pub flip_x: bool,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl SpriteComponent {
    pub fn new(sprite: SpriteId) -> Self {
        Self {
            sprite,
            ..Self::default()
        }
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            sprite: SpriteId(0),
            flip_x: false,
            alpha: 1.0,
        }
    }
}
