//! Timed message display.
//!
//! A [`MessageSequence`] sits on an entity with a
//! [`DynamicText`](super::dynamictext::DynamicText) and swaps its content on a
//! fixed interval. It runs once: the first message appears when the sequence
//! starts, each following one `interval` seconds later, and after
//! [`MESSAGE_COUNT`] messages it stops with the last one still shown.
//!
//! A sequence with fewer than [`MESSAGE_COUNT`] messages refuses to start and
//! stays disabled.

use bevy_ecs::prelude::Component;
use log::error;

/// Number of messages a sequence shows.
pub const MESSAGE_COUNT: usize = 6;
/// Default seconds between messages.
pub const DEFAULT_INTERVAL: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    /// Not started yet.
    Idle,
    Running,
    Finished,
    /// Misconfigured; never runs.
    Disabled,
}

#[derive(Component, Debug, Clone)]
pub struct MessageSequence {
    pub messages: Vec<String>,
    pub interval: f32,
    /// Index of the next message to show.
    pub index: usize,
    /// Seconds since the last message was shown.
    pub elapsed: f32,
    pub state: SequenceState,
}

impl MessageSequence {
    pub fn new(messages: Vec<String>, interval: f32) -> Self {
        Self {
            messages,
            interval: interval.max(0.0),
            index: 0,
            elapsed: 0.0,
            state: SequenceState::Idle,
        }
    }

    /// A sequence that never runs, for when the messages could not be loaded.
    pub fn disabled() -> Self {
        Self {
            state: SequenceState::Disabled,
            ..Self::new(Vec::new(), DEFAULT_INTERVAL)
        }
    }

    /// Start the sequence. Returns the first message to show, or `None` if
    /// the sequence is misconfigured or already started.
    pub fn start(&mut self) -> Option<&str> {
        if self.state != SequenceState::Idle {
            return None;
        }
        if self.messages.len() < MESSAGE_COUNT {
            error!(
                "Message sequence needs at least {} messages, got {}; display disabled",
                MESSAGE_COUNT,
                self.messages.len()
            );
            self.state = SequenceState::Disabled;
            return None;
        }
        self.state = SequenceState::Running;
        self.index = 1;
        self.elapsed = 0.0;
        Some(self.messages[0].as_str())
    }

    /// Advance by `dt` seconds. Returns the message to show this frame, if
    /// the text changes.
    pub fn tick(&mut self, dt: f32) -> Option<&str> {
        if self.state != SequenceState::Running {
            return None;
        }
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return None;
        }
        self.elapsed -= self.interval;
        if self.index >= MESSAGE_COUNT {
            self.state = SequenceState::Finished;
            return None;
        }
        let i = self.index;
        self.index += 1;
        Some(self.messages[i].as_str())
    }

    pub fn is_running(&self) -> bool {
        self.state == SequenceState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six() -> Vec<String> {
        (0..6).map(|i| format!("m{i}")).collect()
    }

    #[test]
    fn refuses_short_message_list() {
        let mut seq = MessageSequence::new(vec!["a".into(); 5], 5.0);
        assert!(seq.start().is_none());
        assert_eq!(seq.state, SequenceState::Disabled);
        assert!(seq.tick(100.0).is_none());
    }

    #[test]
    fn shows_six_messages_then_stops() {
        let mut seq = MessageSequence::new(six(), 5.0);
        assert_eq!(seq.start(), Some("m0"));
        let mut shown = Vec::new();
        for _ in 0..40 {
            if let Some(m) = seq.tick(1.0) {
                shown.push(m.to_string());
            }
        }
        assert_eq!(shown, vec!["m1", "m2", "m3", "m4", "m5"]);
        assert_eq!(seq.state, SequenceState::Finished);
    }

    #[test]
    fn extra_messages_are_ignored() {
        let mut msgs = six();
        msgs.push("m6".into());
        let mut seq = MessageSequence::new(msgs, 1.0);
        seq.start();
        let mut last = None;
        for _ in 0..20 {
            if let Some(m) = seq.tick(1.0) {
                last = Some(m.to_string());
            }
        }
        assert_eq!(last.as_deref(), Some("m5"));
    }

    #[test]
    fn waits_full_interval() {
        let mut seq = MessageSequence::new(six(), 5.0);
        seq.start();
        assert!(seq.tick(4.9).is_none());
        assert_eq!(seq.tick(0.2), Some("m1"));
    }

    #[test]
    fn start_is_once_only() {
        let mut seq = MessageSequence::new(six(), 5.0);
        assert!(seq.start().is_some());
        assert!(seq.start().is_none());
    }

    #[test]
    fn disabled_never_starts() {
        let mut seq = MessageSequence::disabled();
        assert!(seq.start().is_none());
        assert!(!seq.is_running());
    }
}
