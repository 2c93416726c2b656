//! Scene-wide backdrop cue.
//!
//! While an attach sequence waits, every [`Backdrop`](crate::components::markers::Backdrop)
//! sprite shows `active`; when a sequence finishes it goes back to `original`.
//! With several sequences in flight they share the backdrop and the last
//! one to write wins.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Default)]
pub struct BackdropCue {
    /// Sprite key restored after a sequence. Captured at scene setup.
    pub original: Option<String>,
    /// Sprite key shown while a sequence waits; `None` disables the cue.
    pub active: Option<String>,
}

impl BackdropCue {
    pub fn new(original: impl Into<String>, active: Option<String>) -> Self {
        Self {
            original: Some(original.into()),
            active,
        }
    }
}
