//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, configuration,
//! orbit bookkeeping and the audio bridge.
//!
//! Overview
//! - `attachments` – ordered sequence of attached objects
//! - `audio` – bridge and channels for the background audio thread
//! - `backdrop` – sprite keys for the attach sequence backdrop cue
//! - `gameconfig` – INI-backed configuration sections
//! - `input` – per-frame keyboard state of keys relevant to the scene
//! - `release` – release phase state machine data
//! - `spritestore` – sprite colours keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod attachments;
pub mod audio;
pub mod backdrop;
pub mod gameconfig;
pub mod input;
pub mod release;
pub mod spritestore;
pub mod worldtime;
