//! ECS resources that bridge the main thread with the background audio thread.
//!
//! Use [`setup_audio`] once during initialization to spawn the audio thread
//! and insert the [`AudioBridge`] and `Messages<AudioMessage>` resources. Call
//! [`shutdown_audio`] during teardown to gracefully stop the thread and free
//! audio resources.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::warn;

/// Shared bridge between the ECS world and the audio thread.
///
/// Created by [`setup_audio`]. Systems send commands via
/// [`AudioBridge::tx_cmd`] and poll for events via [`AudioBridge::rx_msg`].
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Receiver for [`AudioMessage`] messages (audio thread -> ECS).
    pub rx_msg: Receiver<AudioMessage>,
    /// Join handle for the background audio thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the audio thread and register bridge resources.
///
/// `volume` and `looped` are the music settings the thread starts with.
/// Only one bridge may exist per world: a second call logs a warning, leaves
/// the running thread alone and returns `false`.
pub fn setup_audio(world: &mut World, volume: f32, looped: bool) -> bool {
    setup_audio_with(world, move |rx_cmd, tx_msg| {
        audio_thread(rx_cmd, tx_msg, volume, looped)
    })
}

/// [`setup_audio`] with a custom thread body.
pub fn setup_audio_with<F>(world: &mut World, worker: F) -> bool
where
    F: FnOnce(Receiver<AudioCmd>, Sender<AudioMessage>) + Send + 'static,
{
    if world.contains_resource::<AudioBridge>() {
        warn!("Audio is already set up; ignoring duplicate setup");
        return false;
    }

    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let handle = std::thread::spawn(move || worker(rx_cmd, tx_msg));

    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
    world.insert_resource(Messages::<AudioMessage>::default());
    world.insert_resource(Messages::<AudioCmd>::default());
    true
}

/// Gracefully request shutdown of the audio thread and join it.
///
/// If the bridge resource exists, sends [`AudioCmd::Shutdown`], waits for the
/// thread to exit, and removes the resource from the world.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        let _ = bridge.handle.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_worker(rx: Receiver<AudioCmd>, tx: Sender<AudioMessage>) {
        for cmd in rx.iter() {
            match cmd {
                AudioCmd::Shutdown => break,
                AudioCmd::LoadMusic { id, .. } => {
                    let _ = tx.send(AudioMessage::MusicLoaded { id });
                }
                _ => {}
            }
        }
    }

    #[test]
    fn setup_is_init_once() {
        let mut world = World::new();
        assert!(setup_audio_with(&mut world, echo_worker));
        assert!(!setup_audio_with(&mut world, echo_worker));
        assert!(world.contains_resource::<Messages<AudioCmd>>());
        shutdown_audio(&mut world);
        assert!(!world.contains_resource::<AudioBridge>());
    }

    #[test]
    fn bridge_round_trips_through_worker() {
        let mut world = World::new();
        setup_audio_with(&mut world, echo_worker);
        let bridge = world.resource::<AudioBridge>();
        bridge
            .tx_cmd
            .send(AudioCmd::LoadMusic {
                id: "calm".into(),
                path: "x.ogg".into(),
            })
            .unwrap();
        let reply = bridge
            .rx_msg
            .recv_timeout(std::time::Duration::from_secs(2))
            .unwrap();
        assert_eq!(reply, AudioMessage::MusicLoaded { id: "calm".into() });
        shutdown_audio(&mut world);
    }

    #[test]
    fn setup_again_after_shutdown() {
        let mut world = World::new();
        assert!(setup_audio_with(&mut world, echo_worker));
        shutdown_audio(&mut world);
        assert!(setup_audio_with(&mut world, echo_worker));
        shutdown_audio(&mut world);
    }
}
