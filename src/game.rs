//! Scene setup and the glue between the orbit core and its collaborators.
//!
//! [`setup_scene`] inserts the per-scene resources and spawns the player,
//! the scattered interactables, the backdrop, the release prompt and the
//! message display. [`load_music`] queues the soundtrack, and the two
//! observers switch tracks when the release phase starts and ends.

use std::f32::consts::TAU;
use std::path::Path;

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{error, info};
use raylib::prelude::*;
use serde::Deserialize;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::markers::{Backdrop, Interactable, Player, ReleasePrompt};
use crate::components::messagesequence::MessageSequence;
use crate::components::playermotion::PlayerMotion;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::events::audio::AudioCmd;
use crate::events::orbit::{ReleaseFinishedEvent, ReleaseStartedEvent};
use crate::resources::attachments::Attachments;
use crate::resources::backdrop::BackdropCue;
use crate::resources::gameconfig::{AudioConfig, GameConfig};
use crate::resources::release::ReleaseState;
use crate::resources::spritestore::SpriteStore;

pub const CALM_TRACK: &str = "calm";
pub const ANGER_TRACK: &str = "anger";
pub const LEVEL2_TRACK: &str = "level2";

const OBJECT_SIZE: f32 = 0.8;
const PLAYER_SIZE: f32 = 1.0;

#[derive(Debug, Deserialize)]
struct MessageFile {
    messages: Vec<String>,
}

/// Parse a `{"messages": [...]}` document.
pub fn parse_messages(text: &str) -> Result<Vec<String>, String> {
    serde_json::from_str::<MessageFile>(text)
        .map(|file| file.messages)
        .map_err(|e| format!("Failed to parse messages: {}", e))
}

/// Read and parse the messages file at `path`.
pub fn load_messages(path: &Path) -> Result<Vec<String>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read messages file {:?}: {}", path, e))?;
    parse_messages(&text)
}

/// `count` points in the annulus between `min_radius` and `max_radius`.
///
/// The same seed always gives the same points.
pub fn scatter_positions(seed: u64, count: usize, min_radius: f32, max_radius: f32) -> Vec<Vector2> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let max_radius = max_radius.max(min_radius);
    (0..count)
        .map(|_| {
            let angle = rng.f32() * TAU;
            let r = min_radius + rng.f32() * (max_radius - min_radius);
            Vector2 {
                x: r * angle.cos(),
                y: r * angle.sin(),
            }
        })
        .collect()
}

fn sprite_store(config: &GameConfig) -> SpriteStore {
    let mut store = SpriteStore::new();
    store.insert("player", Color::new(240, 240, 255, 255));
    store.insert("object", Color::new(255, 196, 64, 255));
    store.insert(config.scene.backdrop_sprite.clone(), Color::new(16, 18, 40, 255));
    if let Some(active) = &config.scene.active_backdrop_sprite {
        store.insert(active.clone(), Color::new(48, 16, 56, 255));
    }
    store
}

/// Build the scene from the [`GameConfig`] resource.
pub fn setup_scene(mut commands: Commands, config: Res<GameConfig>) {
    let orbit = config.orbit;
    let scene = &config.scene;

    commands.insert_resource(orbit);
    commands.insert_resource(config.physics);
    commands.insert_resource(config.audio.clone());
    commands.insert_resource(Attachments::default());
    commands.insert_resource(ReleaseState::new(orbit.target_count));
    commands.insert_resource(BackdropCue::new(
        scene.backdrop_sprite.clone(),
        scene.active_backdrop_sprite.clone(),
    ));
    commands.insert_resource(sprite_store(&config));

    commands.spawn((
        Backdrop,
        Sprite::new(scene.backdrop_sprite.clone(), 0.0, 0.0),
    ));

    commands.spawn((
        Player,
        MapPosition::new(0.0, 0.0),
        Rotation::default(),
        RigidBody::dynamic().with_gravity_scale(0.0),
        PlayerMotion::new(config.player.move_speed, config.player.rotation_speed),
        Sprite::new("player", PLAYER_SIZE, PLAYER_SIZE),
    ));

    // keep every object clear of the interaction circle at spawn
    let min_radius = orbit.interact_radius + OBJECT_SIZE;
    let positions = scatter_positions(
        scene.seed,
        scene.object_count,
        min_radius,
        scene.spawn_radius.max(min_radius + 1.0),
    );
    for (i, p) in positions.iter().enumerate() {
        commands.spawn((
            Interactable,
            MapPosition::new(p.x, p.y),
            Rotation::default(),
            BoxCollider::centered(OBJECT_SIZE, OBJECT_SIZE),
            RigidBody::dynamic().with_friction(0.5),
            Sprite::new("object", OBJECT_SIZE, OBJECT_SIZE),
            DynamicText::new(format!("#{}", i + 1), 14.0, Color::WHITE).hidden(),
        ));
    }

    commands.spawn((
        ReleasePrompt,
        ScreenPosition::new(config.window.width as f32 * 0.5 - 120.0, 40.0),
        DynamicText::new(scene.prompt_text.clone(), 32.0, Color::RAYWHITE).hidden(),
    ));

    let sequence = match load_messages(&scene.messages_path) {
        Ok(messages) => MessageSequence::new(messages, scene.message_interval),
        Err(e) => {
            error!("{}; message display disabled", e);
            MessageSequence::disabled()
        }
    };
    commands.spawn((
        sequence,
        ScreenPosition::new(20.0, config.window.height as f32 - 48.0),
        DynamicText::new("", 20.0, Color::LIGHTGRAY).hidden(),
    ));

    info!(
        "scene ready: {} objects, release after {}",
        scene.object_count, orbit.target_count
    );
}

/// Queue the soundtrack and start the calm track.
pub fn load_music(config: Res<AudioConfig>, audio: Option<ResMut<Messages<AudioCmd>>>) {
    let Some(mut audio) = audio else {
        return;
    };
    for (id, path) in [
        (CALM_TRACK, &config.calm_track),
        (ANGER_TRACK, &config.anger_track),
        (LEVEL2_TRACK, &config.level2_track),
    ] {
        audio.write(AudioCmd::LoadMusic {
            id: id.into(),
            path: path.clone(),
        });
    }
    audio.write(AudioCmd::SetVolume { vol: config.volume });
    audio.write(AudioCmd::Play {
        id: CALM_TRACK.into(),
    });
}

/// Hard-switch to the anger track when the release phase begins.
pub fn on_release_started(
    _trigger: On<ReleaseStartedEvent>,
    audio: Option<ResMut<Messages<AudioCmd>>>,
) {
    if let Some(mut audio) = audio {
        audio.write(AudioCmd::SwitchMood {
            id: ANGER_TRACK.into(),
        });
    }
}

/// Crossfade to the level-2 track once the release phase is over.
pub fn on_release_finished(
    _trigger: On<ReleaseFinishedEvent>,
    config: Option<Res<AudioConfig>>,
    audio: Option<ResMut<Messages<AudioCmd>>>,
) {
    if let Some(mut audio) = audio {
        let duration = config.map(|c| c.fade_duration).unwrap_or(0.0);
        audio.write(AudioCmd::FadeTo {
            id: LEVEL2_TRACK.into(),
            duration,
        });
    }
}
