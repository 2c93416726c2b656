//! Body integration for the fixed-rate schedule.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::orbiting::Orbiting;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::PhysicsConfig;
use crate::resources::worldtime::WorldTime;

/// Integrate dynamic bodies by one physics step.
///
/// velocity += gravity * gravity_scale * dt, then friction damping, then
/// position += velocity * dt. Kinematic and orbiting bodies are skipped.
pub fn movement_system(
    mut query: Query<(&mut MapPosition, &mut RigidBody), Without<Orbiting>>,
    time: Res<WorldTime>,
    physics: Option<Res<PhysicsConfig>>,
) {
    let dt = time.fixed_delta;
    let gravity = physics.map(|p| p.gravity).unwrap_or(Vector2::zero());
    for (mut position, mut rigidbody) in query.iter_mut() {
        if rigidbody.is_kinematic() {
            continue;
        }
        let scale = rigidbody.gravity_scale;
        rigidbody.velocity = rigidbody.velocity + gravity.scale_by(scale * dt);
        if rigidbody.friction > 0.0 {
            let damping = (1.0 - rigidbody.friction * dt).max(0.0);
            rigidbody.velocity = rigidbody.velocity.scale_by(damping);
        }
        let delta = rigidbody.velocity.scale_by(dt);
        position.pos = position.pos + delta;
    }
}
