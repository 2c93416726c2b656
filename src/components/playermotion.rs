//! Player movement parameters and intent.
//!
//! [`PlayerMotion`] is written by
//! [`player_input_system`](crate::systems::playermotion::player_input_system)
//! from raw input and read by the physics step, which turns it into body
//! velocity and a smoothed heading on the entity's
//! [`Rotation`](super::rotation::Rotation).
//!
//! `move_speed` is also written by the release state machine: 0 while the
//! release phase runs, the saved value once it ends.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct PlayerMotion {
    /// Linear speed in world units per second.
    pub move_speed: f32,
    /// Heading interpolation rate per second of physics time.
    pub rotation_speed: f32,
    /// Raw directional input from the last frame, each axis in [-1, 1].
    pub direction: Vector2,
    /// Heading in degrees the body turns toward; 0 faces `+y`.
    pub target_heading: f32,
}

impl PlayerMotion {
    pub fn new(move_speed: f32, rotation_speed: f32) -> Self {
        Self {
            move_speed,
            rotation_speed,
            direction: Vector2::zero(),
            target_heading: 0.0,
        }
    }
}
