//! Release phase state.
//!
//! The release machine has two phases:
//!
//! - `Idle` – objects are being collected.
//! - `Active { remaining }` – the player is frozen and each activation ejects
//!   the most recently attached object.
//!
//! It enters `Active` the frame the attachment count first equals `target`
//! and goes back to `Idle` once `remaining` reaches zero. `target` is then
//! reset to 0, which keeps the trigger from ever firing again.

use bevy_ecs::prelude::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleasePhase {
    #[default]
    Idle,
    Active {
        remaining: usize,
    },
}

#[derive(Resource, Debug, Clone)]
pub struct ReleaseState {
    pub phase: ReleasePhase,
    /// Attachment count that starts the release phase; 0 means never.
    pub target: usize,
    /// Player move speed saved when the phase started.
    pub saved_move_speed: Option<f32>,
}

impl ReleaseState {
    pub fn new(target: usize) -> Self {
        Self {
            phase: ReleasePhase::Idle,
            target,
            saved_move_speed: None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, ReleasePhase::Active { .. })
    }

    /// Whether an attachment count of `attached` starts the release phase now.
    ///
    /// Matches the target exactly. `advance_attach_tasks` stops finalizing at
    /// the target, so the count cannot jump past it.
    pub fn should_trigger(&self, attached: usize) -> bool {
        !self.is_active() && self.target > 0 && attached == self.target
    }
}
