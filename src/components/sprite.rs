use bevy_ecs::prelude::Component;

/// Sprite identified by a key into the [`SpriteStore`](crate::resources::spritestore::SpriteStore).
/// Size is in world units.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
        }
    }
}
