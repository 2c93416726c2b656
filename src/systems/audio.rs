//! Background music backed by a dedicated thread and Raylib.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio device,
//!   and processes [`AudioCmd`] messages, emitting [`AudioMessage`] responses.
//! - [`forward_audio_cmds`] pushes ECS-written commands into the channel.
//! - [`poll_audio_messages`] non-blockingly drains the audio thread's replies
//!   into the ECS message queue each frame.
//!
//! Only one track plays at a time. Track changes are either a hard cut
//! ([`AudioCmd::SwitchMood`]) or a [`Crossfade`]: the current track fades out,
//! the next one starts, and it fades back in to the configured volume.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{Music, RaylibAudio};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Drain any pending events from the audio thread and enqueue them into the
/// ECS [`Messages<AudioMessage>`] mailbox.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
///
/// Run this after [`poll_audio_messages`] in your schedule.
pub fn update_bevy_audio_messages(mut events: ResMut<Messages<AudioMessage>>) {
    events.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send error on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Log replies from the audio thread.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicLoadFailed { id, error } => {
                warn!("music '{}' failed to load: {}", id, error)
            }
            other => debug!("audio: {:?}", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStage {
    Out,
    In,
}

/// What a [`Crossfade`] step asks the player to do.
#[derive(Debug, Clone, PartialEq)]
pub enum FadeStep {
    Continue,
    /// Volume hit zero: stop the old track and start this one.
    Switch(String),
    /// Target volume reached.
    Finished,
}

/// Pure volume ramp between two tracks.
///
/// Fades out at `start_volume / duration` per second, then fades in at the
/// same rate. If the fade starts from silence the target volume sets the
/// rate instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Crossfade {
    pub next: String,
    pub rate: f32,
    pub stage: FadeStage,
}

impl Crossfade {
    /// Returns `None` when `duration` is not positive; the caller should cut
    /// straight to the next track.
    pub fn new(next: impl Into<String>, start_volume: f32, target: f32, duration: f32) -> Option<Self> {
        if duration <= 0.0 {
            return None;
        }
        let base = if start_volume > 0.0 { start_volume } else { target };
        Some(Self {
            next: next.into(),
            rate: (base / duration).max(f32::EPSILON),
            stage: FadeStage::Out,
        })
    }

    /// Advance the ramp by `dt` seconds, updating `volume` in [0, target].
    pub fn step(&mut self, volume: &mut f32, target: f32, dt: f32) -> FadeStep {
        match self.stage {
            FadeStage::Out => {
                *volume = (*volume - self.rate * dt).clamp(0.0, target.max(*volume));
                if *volume <= 0.0 {
                    *volume = 0.0;
                    self.stage = FadeStage::In;
                    return FadeStep::Switch(self.next.clone());
                }
                FadeStep::Continue
            }
            FadeStage::In => {
                *volume = (*volume + self.rate * dt).clamp(0.0, target);
                if *volume >= target {
                    return FadeStep::Finished;
                }
                FadeStep::Continue
            }
        }
    }
}

/// The slice of a music stream the player drives.
trait Stream {
    fn play(&self);
    fn stop(&self);
    fn rewind(&self);
    fn set_volume(&self, volume: f32);
    /// Feed the stream buffers; call regularly while playing.
    fn update(&self);
    fn is_playing(&self) -> bool;
    /// Whether playback stopped at the end of the track.
    fn at_end(&self) -> bool;
}

impl Stream for Music<'_> {
    fn play(&self) {
        self.play_stream();
    }

    fn stop(&self) {
        self.stop_stream();
    }

    fn rewind(&self) {
        self.seek_stream(0.0);
    }

    fn set_volume(&self, volume: f32) {
        Music::set_volume(self, volume);
    }

    fn update(&self) {
        self.update_stream();
    }

    fn is_playing(&self) -> bool {
        self.is_stream_playing()
    }

    fn at_end(&self) -> bool {
        self.get_time_played() >= self.get_time_length() - 0.01
    }
}

/// Music state owned by the audio thread.
struct Player<S: Stream> {
    tracks: FxHashMap<String, S>,
    current: Option<String>,
    volume: f32,
    target_volume: f32,
    looped: bool,
    fade: Option<Crossfade>,
}

impl<S: Stream> Player<S> {
    fn new(volume: f32, looped: bool) -> Self {
        let volume = volume.clamp(0.0, 1.0);
        Self {
            tracks: FxHashMap::default(),
            current: None,
            volume,
            target_volume: volume,
            looped,
            fade: None,
        }
    }

    fn start(&mut self, id: &str, volume: f32) -> bool {
        let Some(music) = self.tracks.get(id) else {
            warn!("[audio] play failed id='{}' reason='not loaded'", id);
            return false;
        };
        if let Some(prev) = self.current.as_deref()
            && prev != id
            && let Some(old) = self.tracks.get(prev)
        {
            old.stop();
        }
        music.rewind();
        music.set_volume(volume);
        music.play();
        self.volume = volume;
        self.current = Some(id.to_string());
        true
    }

    fn apply_volume(&self) {
        if let Some(music) = self.current.as_deref().and_then(|id| self.tracks.get(id)) {
            music.set_volume(self.volume);
        }
    }

    fn pump(&mut self, dt: f32, tx_evt: &Sender<AudioMessage>) {
        if let Some(fade) = self.fade.as_mut() {
            let mut volume = self.volume;
            let step = fade.step(&mut volume, self.target_volume, dt);
            self.volume = volume;
            match step {
                FadeStep::Continue => self.apply_volume(),
                FadeStep::Switch(next) => {
                    if self.start(&next, 0.0) {
                        let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id: next });
                    } else {
                        // stay on the old track at full volume
                        self.fade = None;
                        self.volume = self.target_volume;
                        self.apply_volume();
                        let _ = tx_evt.send(AudioMessage::MusicLoadFailed {
                            id: next,
                            error: "not loaded".to_string(),
                        });
                    }
                }
                FadeStep::Finished => {
                    self.apply_volume();
                    if let Some(done) = self.fade.take() {
                        info!("[audio] fade finished id='{}'", done.next);
                        let _ = tx_evt.send(AudioMessage::FadeFinished { id: done.next });
                    }
                }
            }
        }

        let Some(id) = self.current.clone() else {
            return;
        };
        let Some(music) = self.tracks.get(&id) else {
            return;
        };
        if music.is_playing() {
            music.update();
        } else if music.at_end() {
            if self.looped {
                debug!("[audio] restarting looped id='{}'", id);
                music.rewind();
                music.play();
            } else {
                self.current = None;
            }
        }
    }
}

/// Entry point of the dedicated audio thread.
///
/// Owns the Raylib audio device and every `Music` handle for the life of the
/// thread. Blocks until it receives [`AudioCmd::Shutdown`] or the command
/// channel closes.
pub fn audio_thread(
    rx_cmd: Receiver<AudioCmd>,
    tx_evt: Sender<AudioMessage>,
    volume: f32,
    looped: bool,
) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("Failed to initialize audio device: {}", e);
            // keep draining so senders never block on a dead thread
            for cmd in rx_cmd.iter() {
                if let AudioCmd::Shutdown = cmd {
                    break;
                }
            }
            return;
        }
    };

    info!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut player: Player<Music> = Player::new(volume, looped);
    let mut last = Instant::now();

    'run: loop {
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        info!("[audio] loaded id='{}' path='{}'", id, path);
                        player.tracks.insert(id.clone(), music);
                        let _ = tx_evt.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        warn!("[audio] load failed id='{}' path='{}' error='{}'", id, path, e);
                        let _ = tx_evt.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::Play { id } => {
                    player.fade = None;
                    if player.start(&id, player.target_volume) {
                        info!("[audio] play start id='{}' looped={}", id, player.looped);
                        let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id });
                    }
                }
                AudioCmd::SwitchMood { id } => {
                    player.fade = None;
                    if player.start(&id, player.target_volume) {
                        info!("[audio] mood switch id='{}'", id);
                        let _ = tx_evt.send(AudioMessage::MoodSwitched { id });
                    }
                }
                AudioCmd::FadeTo { id, duration } => {
                    match Crossfade::new(id.clone(), player.volume, player.target_volume, duration) {
                        Some(fade) if player.current.is_some() => {
                            debug!("[audio] fade to id='{}' over {}s", id, duration);
                            player.fade = Some(fade);
                        }
                        _ => {
                            player.fade = None;
                            if player.start(&id, player.target_volume) {
                                let _ = tx_evt.send(AudioMessage::FadeFinished { id });
                            }
                        }
                    }
                }
                AudioCmd::SetVolume { vol } => {
                    player.target_volume = vol.clamp(0.0, 1.0);
                    if player.fade.is_none() {
                        player.volume = player.target_volume;
                        player.apply_volume();
                    }
                }
                AudioCmd::Shutdown => {
                    info!("[audio] shutdown requested");
                    break 'run;
                }
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;
        player.pump(dt, &tx_evt);

        std::thread::sleep(Duration::from_millis(10));
    } // 'run

    // tracks drop before `audio`
    player.tracks.clear();
    info!(
        "[audio] thread exiting (id={:?})",
        std::thread::current().id()
    );
}
