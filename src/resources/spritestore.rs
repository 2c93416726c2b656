//! Sprite colour store.
//!
//! The scene draws flat-coloured shapes; a sprite key resolves to a colour
//! here. Unknown keys fall back to [`SpriteStore::fallback`].

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;
use rustc_hash::FxHashMap;

#[derive(Resource, Debug, Clone)]
pub struct SpriteStore {
    map: FxHashMap<String, Color>,
    pub fallback: Color,
}

impl Default for SpriteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            fallback: Color::MAGENTA,
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, color: Color) {
        self.map.insert(key.into(), color);
    }

    pub fn get(&self, key: &str) -> Color {
        self.map.get(key).copied().unwrap_or(self.fallback)
    }
}
