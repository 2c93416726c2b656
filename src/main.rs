//! Orbit scene main entry point.
//!
//! A small 2D scene written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! The player drifts around a field of objects. Pressing Space near one
//! pulls it into a ring around the player after a short delay; once enough
//! are collected every further press flings the newest one away.
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window, build the ECS world
//! 2. Spawn the scene and queue the soundtrack
//! 3. Each frame:
//!    - `update` schedule: input, interaction, release, messages, audio bridge
//!    - `fixed` schedule, zero or more times: player physics, body integration
//!    - `late` schedule: orbit smoothing, anchor following, rendering
//! 4. Stop the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use orbitscene::game;
use orbitscene::resources::audio::{setup_audio, shutdown_audio};
use orbitscene::resources::gameconfig::GameConfig;
use orbitscene::resources::input::InputState;
use orbitscene::resources::worldtime::{FixedStep, WorldTime};
use orbitscene::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use orbitscene::systems::input::update_input_state;
use orbitscene::systems::interaction::{advance_attach_tasks, try_interact};
use orbitscene::systems::messages::message_sequence_system;
use orbitscene::systems::movement::movement_system;
use orbitscene::systems::orbit::{follow_anchor_system, orbit_system};
use orbitscene::systems::playermotion::{player_input_system, player_physics_system};
use orbitscene::systems::release::{release_step_system, release_trigger_system};
use orbitscene::systems::render::render_system;
use orbitscene::systems::time::update_world_time;

/// Orbit scene
#[derive(Parser)]
#[command(version, about = "Collect objects into orbit, then let them go.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Override the scatter seed from the configuration.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(seed) = cli.seed {
        config.scene.seed = seed;
    }

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window.width as i32, config.window.height as i32)
        .resizable()
        .title("Orbit Scene")
        .build();
    rl.set_target_fps(config.window.target_fps);
    // ESC is handled through InputState
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(
        WorldTime::default()
            .with_time_scale(1.0)
            .with_fixed_delta(config.physics.fixed_timestep),
    );
    world.insert_resource(InputState::default());

    let audio_enabled = config.audio.enabled
        && setup_audio(&mut world, config.audio.volume, config.audio.looped);

    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let setup_id = world.register_system(game::setup_scene);
    world
        .run_system(setup_id)
        .expect("Failed to set up the scene");
    if audio_enabled {
        let music_id = world.register_system(game::load_music);
        world
            .run_system(music_id)
            .expect("Failed to queue the soundtrack");
    }

    world.spawn(Observer::new(game::on_release_started));
    world.spawn(Observer::new(game::on_release_finished));
    // Ensure observers are registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            player_input_system,
            try_interact,
            release_step_system,
            advance_attach_tasks,
            release_trigger_system,
            message_sequence_system,
        )
            .chain(),
    );
    if audio_enabled {
        update.add_systems(
            // audio systems must be together
            (
                update_bevy_audio_cmds,
                forward_audio_cmds,
                poll_audio_messages,
                update_bevy_audio_messages,
                log_audio_messages,
            )
                .chain()
                .after(release_trigger_system),
        );
    }

    let mut fixed = Schedule::default();
    fixed.add_systems((player_physics_system, movement_system).chain());

    let mut late = Schedule::default();
    late.add_systems((orbit_system, follow_anchor_system, render_system).chain());

    update
        .initialize(&mut world)
        .expect("Failed to initialize update schedule");
    fixed
        .initialize(&mut world)
        .expect("Failed to initialize fixed schedule");
    late.initialize(&mut world)
        .expect("Failed to initialize late schedule");

    // --------------- Main loop ---------------
    let mut step = FixedStep::default();
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<InputState>().action_back.just_pressed
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        let (scaled, fixed_delta) = {
            let wt = world.resource::<WorldTime>();
            (wt.delta, wt.fixed_delta)
        };
        for _ in 0..step.advance(scaled, fixed_delta) {
            fixed.run(&mut world);
        }

        late.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
    shutdown_audio(&mut world);
}
