//! Physics capability seam used by the interaction and release systems.
//!
//! Attaching and ejecting objects only needs a handful of physics operations.
//! They are expressed as the [`PhysicsCapability`] trait so the orbit logic
//! does not care which parts an entity actually has: [`BodyParts`] implements
//! it over optional ECS components and silently skips whatever is missing.
//!
//! [`attach_body`] and [`release_body`] are the two state changes an
//! interactable goes through.

use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::rigidbody::{BodyMode, RigidBody};

/// Physics operations the orbit systems perform on an object.
pub trait PhysicsCapability {
    fn set_collider_enabled(&mut self, enabled: bool);
    fn set_body_mode(&mut self, mode: BodyMode);
    fn set_gravity_enabled(&mut self, enabled: bool);
    fn set_velocity(&mut self, velocity: Vector2);
    /// Apply an instantaneous impulse. Returns false when there is no body to
    /// receive it.
    fn apply_impulse(&mut self, impulse: Vector2) -> bool;
}

/// Borrowed view of an entity's optional physics components.
pub struct BodyParts<'a> {
    pub collider: Option<&'a mut BoxCollider>,
    pub body: Option<&'a mut RigidBody>,
}

impl<'a> BodyParts<'a> {
    pub fn new(collider: Option<&'a mut BoxCollider>, body: Option<&'a mut RigidBody>) -> Self {
        Self { collider, body }
    }
}

impl PhysicsCapability for BodyParts<'_> {
    fn set_collider_enabled(&mut self, enabled: bool) {
        if let Some(collider) = self.collider.as_deref_mut() {
            collider.enabled = enabled;
        }
    }

    fn set_body_mode(&mut self, mode: BodyMode) {
        if let Some(body) = self.body.as_deref_mut() {
            body.set_mode(mode);
        }
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        if let Some(body) = self.body.as_deref_mut() {
            body.gravity_scale = if enabled { 1.0 } else { 0.0 };
        }
    }

    fn set_velocity(&mut self, velocity: Vector2) {
        if let Some(body) = self.body.as_deref_mut() {
            body.set_velocity(velocity);
        }
    }

    fn apply_impulse(&mut self, impulse: Vector2) -> bool {
        match self.body.as_deref_mut() {
            Some(body) => {
                body.apply_impulse(impulse);
                true
            }
            None => false,
        }
    }
}

/// Take an object out of the physics simulation so it can orbit.
pub fn attach_body(parts: &mut impl PhysicsCapability) {
    parts.set_collider_enabled(false);
    parts.set_body_mode(BodyMode::Kinematic);
    parts.set_velocity(Vector2::zero());
}

/// Hand an object back to the physics simulation and push it along
/// `direction` (expected to be unit length).
///
/// Returns false if the object has no body, in which case the caller moves it
/// by hand.
pub fn release_body(parts: &mut impl PhysicsCapability, direction: Vector2, push_speed: f32) -> bool {
    parts.set_collider_enabled(true);
    parts.set_body_mode(BodyMode::Dynamic);
    parts.set_gravity_enabled(false);
    parts.apply_impulse(Vector2 {
        x: direction.x * push_speed,
        y: direction.y * push_speed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        has_body: bool,
    }

    impl PhysicsCapability for Recorder {
        fn set_collider_enabled(&mut self, enabled: bool) {
            self.calls.push(format!("collider:{enabled}"));
        }
        fn set_body_mode(&mut self, mode: BodyMode) {
            self.calls.push(format!("mode:{mode:?}"));
        }
        fn set_gravity_enabled(&mut self, enabled: bool) {
            self.calls.push(format!("gravity:{enabled}"));
        }
        fn set_velocity(&mut self, velocity: Vector2) {
            self.calls.push(format!("velocity:{},{}", velocity.x, velocity.y));
        }
        fn apply_impulse(&mut self, impulse: Vector2) -> bool {
            self.calls.push(format!("impulse:{},{}", impulse.x, impulse.y));
            self.has_body
        }
    }

    #[test]
    fn attach_disables_collider_and_stops_body() {
        let mut r = Recorder::default();
        attach_body(&mut r);
        assert_eq!(r.calls, vec!["collider:false", "mode:Kinematic", "velocity:0,0"]);
    }

    #[test]
    fn release_reenables_and_pushes() {
        let mut r = Recorder {
            has_body: true,
            ..Default::default()
        };
        assert!(release_body(&mut r, Vector2 { x: 0.0, y: 1.0 }, 3.0));
        assert_eq!(
            r.calls,
            vec!["collider:true", "mode:Dynamic", "gravity:false", "impulse:0,3"]
        );
    }

    #[test]
    fn body_parts_skip_missing_components() {
        let mut parts = BodyParts::new(None, None);
        attach_body(&mut parts);
        assert!(!release_body(&mut parts, Vector2 { x: 1.0, y: 0.0 }, 1.0));
    }

    #[test]
    fn body_parts_drive_real_components() {
        let mut collider = BoxCollider::centered(1.0, 1.0);
        let mut body = RigidBody::dynamic();
        body.velocity = Vector2 { x: 2.0, y: 2.0 };
        {
            let mut parts = BodyParts::new(Some(&mut collider), Some(&mut body));
            attach_body(&mut parts);
        }
        assert!(!collider.enabled);
        assert!(body.is_kinematic());
        assert_eq!(body.velocity.x, 0.0);

        {
            let mut parts = BodyParts::new(Some(&mut collider), Some(&mut body));
            assert!(release_body(&mut parts, Vector2 { x: 1.0, y: 0.0 }, 4.0));
        }
        assert!(collider.enabled);
        assert!(!body.is_kinematic());
        assert_eq!(body.gravity_scale, 0.0);
        assert_eq!(body.velocity.x, 4.0);
    }
}
