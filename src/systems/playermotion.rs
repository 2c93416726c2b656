//! Player motion controller.
//!
//! Split across the two rates of the main loop:
//! - [`player_input_system`] runs every frame and records raw input intent.
//! - [`player_physics_system`] runs on every fixed step and turns that intent
//!   into body velocity and a smoothed heading.
//!
//! Heading 0 faces `+y`; angles grow counter-clockwise.

use bevy_ecs::prelude::*;

use crate::components::markers::Player;
use crate::components::playermotion::PlayerMotion;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::math::{heading_from_direction, lerp_angle, normalize_or_zero};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Copy the raw input axes into [`PlayerMotion::direction`] and aim the
/// target heading along them. Without input the target heading is kept.
pub fn player_input_system(
    input: Res<InputState>,
    mut query: Query<&mut PlayerMotion, With<Player>>,
) {
    let direction = input.axes();
    for mut motion in query.iter_mut() {
        motion.direction = direction;
        if direction.x != 0.0 || direction.y != 0.0 {
            motion.target_heading = heading_from_direction(direction);
        }
    }
}

/// Set velocity from the normalized direction and ease the heading toward
/// its target along the shortest arc.
pub fn player_physics_system(
    time: Res<WorldTime>,
    mut query: Query<(&PlayerMotion, &mut RigidBody, &mut Rotation), With<Player>>,
) {
    let dt = time.fixed_delta;
    for (motion, mut body, mut rotation) in query.iter_mut() {
        let velocity = normalize_or_zero(motion.direction).scale_by(motion.move_speed);
        body.set_velocity(velocity);
        rotation.degrees = lerp_angle(
            rotation.degrees,
            motion.target_heading,
            motion.rotation_speed * dt,
        );
    }
}
