//! Scene systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`audio`] – audio thread and the bridge systems feeding it
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`interaction`] – activation scan and timed attach sequences
//! - [`messages`] – timed message display
//! - [`movement`] – integrate dynamic bodies on the fixed step
//! - [`orbit`] – ring smoothing, self rotation and anchor following
//! - [`playermotion`] – input intent, velocity and heading of the player
//! - [`release`] – release phase trigger and LIFO ejection
//! - [`render`] – draw the scene using Raylib
//! - [`time`] – update simulation time and delta

pub mod audio;
pub mod input;
pub mod interaction;
pub mod messages;
pub mod movement;
pub mod orbit;
pub mod playermotion;
pub mod release;
pub mod render;
pub mod time;
