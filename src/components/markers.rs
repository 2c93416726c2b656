//! Tag components that identify the roles of scene entities.

use bevy_ecs::prelude::Component;

/// The player-controlled avatar. Exactly one is spawned per scene.
#[derive(Component, Clone, Copy, Debug)]
pub struct Player;

/// An object the player can attract into orbit.
#[derive(Component, Clone, Copy, Debug)]
pub struct Interactable;

/// Background entity whose sprite is swapped while attach sequences run.
#[derive(Component, Clone, Copy, Debug)]
pub struct Backdrop;

/// Text shown for the duration of the release phase.
#[derive(Component, Clone, Copy, Debug)]
pub struct ReleasePrompt;
