//! Timed attach sequence state.
//!
//! Starting an interaction inserts an [`AttachTask`] on the object. The task
//! is a tiny state machine advanced once per frame by
//! [`advance_attach_tasks`](crate::systems::interaction::advance_attach_tasks):
//!
//! 1. `Waiting` - counts `remaining` down by the scaled frame delta.
//! 2. `Resuming` - the delay is over; the backdrop cue is reverted and the
//!    object is attached.
//! 3. `Done` - the system removes the component.
//!
//! Tasks cannot be cancelled and the delay cannot change once started.

use bevy_ecs::prelude::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachPhase {
    Waiting,
    Resuming,
    Done,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct AttachTask {
    pub phase: AttachPhase,
    /// Seconds left in the `Waiting` phase.
    pub remaining: f32,
    /// Start order; tasks finishing on the same frame attach in ticket order.
    pub ticket: u64,
}

impl AttachTask {
    pub fn new(delay: f32, ticket: u64) -> Self {
        Self {
            phase: AttachPhase::Waiting,
            remaining: delay.max(0.0),
            ticket,
        }
    }

    /// Advance by `dt` seconds. Returns true on the frame the task becomes
    /// ready to resume.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.phase != AttachPhase::Waiting {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.phase = AttachPhase::Resuming;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_full_delay() {
        let mut task = AttachTask::new(1.0, 0);
        assert!(!task.tick(0.4));
        assert!(!task.tick(0.4));
        assert_eq!(task.phase, AttachPhase::Waiting);
        assert!(task.tick(0.4));
        assert_eq!(task.phase, AttachPhase::Resuming);
    }

    #[test]
    fn ready_fires_once() {
        let mut task = AttachTask::new(0.1, 0);
        assert!(task.tick(1.0));
        assert!(!task.tick(1.0));
    }

    #[test]
    fn zero_delay_resumes_on_first_tick() {
        let mut task = AttachTask::new(0.0, 3);
        assert!(task.tick(0.0));
        assert_eq!(task.ticket, 3);
    }
}
