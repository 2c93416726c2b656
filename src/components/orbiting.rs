//! Component for attaching an entity's position to an anchor entity.
//!
//! An entity with [`Orbiting`] is positioned relative to its anchor: the
//! [`follow_anchor_system`](crate::systems::orbit::follow_anchor_system) sets
//! its world position to the anchor position plus `offset`, and the
//! [`orbit_system`](crate::systems::orbit::orbit_system) eases `offset`
//! toward the object's ring slot each frame.
//!
//! Removing the component detaches the object; it keeps its last world
//! position.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::Vector2;

/// Component that makes an entity follow another entity's position.
#[derive(Debug, Clone, Component)]
pub struct Orbiting {
    /// The entity to follow.
    pub anchor: Entity,
    /// Offset from the anchor's position, in world units.
    pub offset: Vector2,
}

impl Orbiting {
    pub fn new(anchor: Entity) -> Self {
        Self {
            anchor,
            offset: Vector2::zero(),
        }
    }

    /// Set the offset from the anchor's position.
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }
}
