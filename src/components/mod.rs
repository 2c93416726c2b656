//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the scene. Components define data such as position, physics, collision,
//! orbit attachment and displayed text.
//!
//! Submodules overview:
//! - [`attachtask`] – per-object timed attach sequence state
//! - [`body`] – physics capability trait used to attach and eject objects
//! - [`boxcollider`] – axis-aligned rectangular collider with an enabled flag
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`markers`] – role tags: player, interactable, backdrop, release prompt
//! - [`messagesequence`] – timed, run-once message display
//! - [`orbiting`] – offset-based attachment to an anchor entity
//! - [`playermotion`] – player movement parameters and input intent
//! - [`rigidbody`] – dynamic/kinematic body storing velocity
//! - [`rotation`] – rotation angle in degrees
//! - [`screenposition`] – screen-space position for UI elements
//! - [`sprite`] – 2D sprite rendering component

pub mod attachtask;
pub mod body;
pub mod boxcollider;
pub mod dynamictext;
pub mod mapposition;
pub mod markers;
pub mod messagesequence;
pub mod orbiting;
pub mod playermotion;
pub mod rigidbody;
pub mod rotation;
pub mod screenposition;
pub mod sprite;
