//! Event types exchanged across systems.
//!
//! Events provide a decoupled way for systems to communicate without direct
//! dependencies.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`orbit`] – attach and release notifications from the orbit core
pub mod audio;
pub mod orbit;
