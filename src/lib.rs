//! Orbit scene library.
//!
//! This module exposes the scene's ECS components, resources, systems, and
//! events for use in integration tests and by the binary.

pub mod components;
pub mod events;
pub mod game;
pub mod layout;
pub mod math;
pub mod resources;
pub mod systems;
