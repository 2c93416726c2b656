//! Orbit lifecycle events.
//!
//! Triggered by the interaction and release systems through
//! `commands.trigger(..)`. The core never listens to these itself; they exist
//! so collaborators (music, logging, tests) can react without the core
//! depending on them.
use bevy_ecs::prelude::*;

/// An object finished its attach sequence and joined the rings.
///
/// `index` is its position in the attached sequence.
#[derive(Event, Debug, Clone, Copy)]
pub struct ObjectAttachedEvent {
    pub entity: Entity,
    pub index: usize,
}

/// The release phase began with `count` objects to eject.
#[derive(Event, Debug, Clone, Copy)]
pub struct ReleaseStartedEvent {
    pub count: usize,
}

/// One object was ejected; `remaining` are still to go.
#[derive(Event, Debug, Clone, Copy)]
pub struct ObjectReleasedEvent {
    pub entity: Entity,
    pub remaining: usize,
}

/// The release phase is over. Fired once.
#[derive(Event, Debug, Clone, Copy)]
pub struct ReleaseFinishedEvent;
