//! Messages exchanged with the background audio thread.

use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    /// Start a track from the beginning; loops when `looped` is configured.
    Play { id: String },
    /// Fade the current track out, then fade `id` in over `duration` seconds each way.
    FadeTo { id: String, duration: f32 },
    /// Cut to `id` immediately, no fade.
    SwitchMood { id: String },
    /// Set the target music volume in [0, 1].
    SetVolume { vol: f32 },
    Shutdown,
}

/// Events sent *back* from the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    FadeFinished { id: String },
    MoodSwitched { id: String },
}
