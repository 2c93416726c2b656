//! Physics body component.
//!
//! The [`RigidBody`] component stores velocity and the simulation mode of an
//! entity. Dynamic bodies are integrated by the
//! [`movement_system`](crate::systems::movement::movement_system); kinematic
//! bodies are positioned by other systems and ignore velocity, gravity and
//! impulses.
//!
//! Interactables switch modes over their lifetime: dynamic while free,
//! kinematic while orbiting the player, dynamic again once ejected.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// How the movement system treats a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BodyMode {
    /// Integrated from velocity and forces every physics step.
    #[default]
    Dynamic,
    /// Moved only by explicit position writes.
    Kinematic,
}

/// Simple 2D body storing velocity and integration parameters.
///
/// # Fields
/// - `velocity` - Current velocity in world units per second
/// - `mode` - Dynamic or kinematic
/// - `gravity_scale` - Multiplier on world gravity (0 disables gravity)
/// - `friction` - Velocity damping factor (0.0 = no friction, higher = more drag)
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::dynamic();
/// rb.apply_impulse(Vector2 { x: 0.0, y: 4.0 });
///
/// // Hand control over to another system
/// rb.set_mode(BodyMode::Kinematic);
/// ```
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
    /// Integration mode.
    pub mode: BodyMode,
    /// Gravity multiplier.
    pub gravity_scale: f32,
    /// Velocity damping factor. Applied as: velocity *= (1 - friction * delta).
    pub friction: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::dynamic()
    }
}

impl RigidBody {
    /// Dynamic body at rest.
    pub fn dynamic() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            mode: BodyMode::Dynamic,
            gravity_scale: 1.0,
            friction: 0.0,
        }
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction.max(0.0);
        self
    }

    pub fn with_gravity_scale(mut self, gravity_scale: f32) -> Self {
        self.gravity_scale = gravity_scale;
        self
    }

    pub fn is_kinematic(&self) -> bool {
        self.mode == BodyMode::Kinematic
    }

    pub fn set_mode(&mut self, mode: BodyMode) {
        self.mode = mode;
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Apply an instantaneous impulse. Kinematic bodies ignore impulses.
    pub fn apply_impulse(&mut self, impulse: Vector2) {
        if self.is_kinematic() {
            return;
        }
        self.velocity.x += impulse.x;
        self.velocity.y += impulse.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rigidbody_default_is_dynamic_at_rest() {
        let rb = RigidBody::default();
        assert_eq!(rb.mode, BodyMode::Dynamic);
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
        assert!(approx_eq(rb.gravity_scale, 1.0));
    }

    #[test]
    fn test_impulse_accumulates() {
        let mut rb = RigidBody::dynamic();
        rb.apply_impulse(Vector2 { x: 1.0, y: 0.0 });
        rb.apply_impulse(Vector2 { x: 1.0, y: 1.0 });
        assert!(approx_eq(rb.velocity.x, 2.0));
        assert!(approx_eq(rb.velocity.y, 1.0));
    }

    #[test]
    fn test_kinematic_ignores_impulse() {
        let mut rb = RigidBody::dynamic();
        rb.set_mode(BodyMode::Kinematic);
        rb.apply_impulse(Vector2 { x: 5.0, y: 5.0 });
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
    }

    #[test]
    fn test_set_mode_round_trip() {
        let mut rb = RigidBody::dynamic();
        rb.set_mode(BodyMode::Kinematic);
        assert!(rb.is_kinematic());
        rb.set_mode(BodyMode::Dynamic);
        assert!(!rb.is_kinematic());
    }
}
