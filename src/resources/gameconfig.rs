//! Game configuration resource.
//!
//! Manages scene settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration. The
//! orbit, physics and audio sections are also inserted into the world as
//! their own resources so systems only borrow what they use.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//! pixels_per_unit = 40
//!
//! [physics]
//! fixed_timestep = 0.02
//! gravity_x = 0
//! gravity_y = 0
//!
//! [player]
//! move_speed = 5
//! rotation_speed = 10
//!
//! [orbit]
//! interact_radius = 2
//! hover_distance = 1.5
//! hover_speed = 2
//! base_objects_per_ring = 7
//! revolution_speed = 30
//! self_rotation_speed = 100
//! interaction_delay = 5
//! target_count = 15
//! push_object_speed = 8
//!
//! [scene]
//! object_count = 24
//! spawn_radius = 9
//! seed = 42
//! backdrop_sprite = backdrop
//! active_backdrop_sprite = backdrop_active
//! prompt_text = I WANT SPACE
//! messages_path = ./assets/messages.json
//! message_interval = 5
//!
//! [audio]
//! enabled = true
//! volume = 0.5
//! loop = true
//! calm_track = ./assets/audio/background.ogg
//! anger_track = ./assets/audio/background_anger.ogg
//! level2_track = ./assets/audio/level2.ogg
//! fade_duration = 2
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use raylib::prelude::Vector2;
use std::path::PathBuf;

use crate::layout::RingLayout;
use crate::resources::worldtime::DEFAULT_FIXED_DELTA;

const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window and view settings.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    /// Screen pixels per world unit.
    pub pixels_per_unit: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            target_fps: 120,
            pixels_per_unit: 40.0,
        }
    }
}

/// Fixed-step physics settings.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    pub fixed_timestep: f32,
    pub gravity: Vector2,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            fixed_timestep: DEFAULT_FIXED_DELTA,
            gravity: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

/// Player movement defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    pub move_speed: f32,
    pub rotation_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            rotation_speed: 10.0,
        }
    }
}

/// Interaction, orbit and release parameters.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitConfig {
    /// Radius around the player scanned on activation.
    pub interact_radius: f32,
    /// Radius of the innermost ring.
    pub hover_distance: f32,
    /// Fraction of the remaining distance covered per second.
    pub hover_speed: f32,
    /// Capacity of the innermost ring; each ring doubles it.
    pub base_objects_per_ring: usize,
    /// Ring revolution in degrees per second.
    pub revolution_speed: f32,
    /// Object self-rotation in degrees per second.
    pub self_rotation_speed: f32,
    /// Seconds between activation and attachment.
    pub interaction_delay: f32,
    /// Attachment count that starts the release phase.
    pub target_count: usize,
    /// Impulse magnitude applied to ejected objects.
    pub push_object_speed: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            interact_radius: 2.0,
            hover_distance: 1.5,
            hover_speed: 2.0,
            base_objects_per_ring: 7,
            revolution_speed: 30.0,
            self_rotation_speed: 100.0,
            interaction_delay: 5.0,
            target_count: 15,
            push_object_speed: 8.0,
        }
    }
}

impl OrbitConfig {
    pub fn layout(&self) -> RingLayout {
        RingLayout::new(
            self.base_objects_per_ring,
            self.hover_distance,
            self.revolution_speed,
        )
    }

    /// Clamp values that would break the layout or the timers.
    fn sanitize(&mut self) {
        if self.base_objects_per_ring == 0 {
            warn!("orbit.base_objects_per_ring must be at least 1; using 1");
            self.base_objects_per_ring = 1;
        }
        if self.interaction_delay < 0.0 {
            warn!("orbit.interaction_delay is negative; using 0");
            self.interaction_delay = 0.0;
        }
        if self.interact_radius < 0.0 {
            warn!("orbit.interact_radius is negative; using 0");
            self.interact_radius = 0.0;
        }
        if self.hover_speed < 0.0 {
            warn!("orbit.hover_speed is negative; using 0");
            self.hover_speed = 0.0;
        }
    }
}

/// Scene population and text settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub object_count: usize,
    pub spawn_radius: f32,
    pub seed: u64,
    pub backdrop_sprite: String,
    /// `None` disables the backdrop cue.
    pub active_backdrop_sprite: Option<String>,
    pub prompt_text: String,
    pub messages_path: PathBuf,
    pub message_interval: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            object_count: 24,
            spawn_radius: 9.0,
            seed: 42,
            backdrop_sprite: "backdrop".to_string(),
            active_backdrop_sprite: Some("backdrop_active".to_string()),
            prompt_text: "I WANT SPACE".to_string(),
            messages_path: PathBuf::from("./assets/messages.json"),
            message_interval: 5.0,
        }
    }
}

/// Background music settings.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AudioConfig {
    pub enabled: bool,
    pub volume: f32,
    pub looped: bool,
    pub calm_track: String,
    pub anger_track: String,
    pub level2_track: String,
    pub fade_duration: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.5,
            looped: true,
            calm_track: "./assets/audio/background.ogg".to_string(),
            anger_track: "./assets/audio/background_anger.ogg".to_string(),
            level2_track: "./assets/audio/level2.ogg".to_string(),
            fade_duration: 2.0,
        }
    }
}

/// Game configuration resource.
///
/// Loaded once at startup in `main`; missing keys keep their defaults.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub orbit: OrbitConfig,
    pub scene: SceneConfig,
    pub audio: AudioConfig,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

fn get_f32(config: &Ini, section: &str, key: &str) -> Option<f32> {
    config.getfloat(section, key).ok().flatten().map(|v| v as f32)
}

fn get_usize(config: &Ini, section: &str, key: &str) -> Option<usize> {
    config.getuint(section, key).ok().flatten().map(|v| v as usize)
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            ..Self::default()
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        info!(
            "Loaded config {:?}: target_count={}, base_per_ring={}, delay={}s",
            self.config_path,
            self.orbit.target_count,
            self.orbit.base_objects_per_ring,
            self.orbit.interaction_delay
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(v) = config.getuint("window", "width").ok().flatten() {
            self.window.width = v as u32;
        }
        if let Some(v) = config.getuint("window", "height").ok().flatten() {
            self.window.height = v as u32;
        }
        if let Some(v) = config.getuint("window", "target_fps").ok().flatten() {
            self.window.target_fps = v as u32;
        }
        if let Some(v) = get_f32(config, "window", "pixels_per_unit") {
            self.window.pixels_per_unit = v;
        }

        // [physics] section
        if let Some(v) = get_f32(config, "physics", "fixed_timestep") {
            if v > 0.0 {
                self.physics.fixed_timestep = v;
            } else {
                warn!("physics.fixed_timestep must be positive; keeping {}", self.physics.fixed_timestep);
            }
        }
        if let Some(v) = get_f32(config, "physics", "gravity_x") {
            self.physics.gravity.x = v;
        }
        if let Some(v) = get_f32(config, "physics", "gravity_y") {
            self.physics.gravity.y = v;
        }

        // [player] section
        if let Some(v) = get_f32(config, "player", "move_speed") {
            self.player.move_speed = v;
        }
        if let Some(v) = get_f32(config, "player", "rotation_speed") {
            self.player.rotation_speed = v;
        }

        // [orbit] section
        let orbit = &mut self.orbit;
        if let Some(v) = get_f32(config, "orbit", "interact_radius") {
            orbit.interact_radius = v;
        }
        if let Some(v) = get_f32(config, "orbit", "hover_distance") {
            orbit.hover_distance = v;
        }
        if let Some(v) = get_f32(config, "orbit", "hover_speed") {
            orbit.hover_speed = v;
        }
        if let Some(v) = get_usize(config, "orbit", "base_objects_per_ring") {
            orbit.base_objects_per_ring = v;
        }
        if let Some(v) = get_f32(config, "orbit", "revolution_speed") {
            orbit.revolution_speed = v;
        }
        if let Some(v) = get_f32(config, "orbit", "self_rotation_speed") {
            orbit.self_rotation_speed = v;
        }
        if let Some(v) = get_f32(config, "orbit", "interaction_delay") {
            orbit.interaction_delay = v;
        }
        if let Some(v) = get_usize(config, "orbit", "target_count") {
            orbit.target_count = v;
        }
        if let Some(v) = get_f32(config, "orbit", "push_object_speed") {
            orbit.push_object_speed = v;
        }
        orbit.sanitize();

        // [scene] section
        if let Some(v) = get_usize(config, "scene", "object_count") {
            self.scene.object_count = v;
        }
        if let Some(v) = get_f32(config, "scene", "spawn_radius") {
            self.scene.spawn_radius = v;
        }
        if let Some(v) = config.getuint("scene", "seed").ok().flatten() {
            self.scene.seed = v;
        }
        if let Some(v) = config.get("scene", "backdrop_sprite") {
            self.scene.backdrop_sprite = v;
        }
        if let Some(v) = config.get("scene", "active_backdrop_sprite") {
            self.scene.active_backdrop_sprite = if v.trim().is_empty() { None } else { Some(v) };
        }
        if let Some(v) = config.get("scene", "prompt_text") {
            self.scene.prompt_text = v;
        }
        if let Some(v) = config.get("scene", "messages_path") {
            self.scene.messages_path = PathBuf::from(v);
        }
        if let Some(v) = get_f32(config, "scene", "message_interval") {
            self.scene.message_interval = v.max(0.0);
        }

        // [audio] section
        if let Some(v) = config.getbool("audio", "enabled").ok().flatten() {
            self.audio.enabled = v;
        }
        if let Some(v) = get_f32(config, "audio", "volume") {
            self.audio.volume = v.clamp(0.0, 1.0);
        }
        if let Some(v) = config.getbool("audio", "loop").ok().flatten() {
            self.audio.looped = v;
        }
        if let Some(v) = config.get("audio", "calm_track") {
            self.audio.calm_track = v;
        }
        if let Some(v) = config.get("audio", "anger_track") {
            self.audio.anger_track = v;
        }
        if let Some(v) = config.get("audio", "level2_track") {
            self.audio.level2_track = v;
        }
        if let Some(v) = get_f32(config, "audio", "fade_duration") {
            self.audio.fade_duration = v.max(0.0);
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        let mut set = |section: &str, key: &str, value: String| {
            config.set(section, key, Some(value));
        };

        set("window", "width", self.window.width.to_string());
        set("window", "height", self.window.height.to_string());
        set("window", "target_fps", self.window.target_fps.to_string());
        set("window", "pixels_per_unit", self.window.pixels_per_unit.to_string());

        set("physics", "fixed_timestep", self.physics.fixed_timestep.to_string());
        set("physics", "gravity_x", self.physics.gravity.x.to_string());
        set("physics", "gravity_y", self.physics.gravity.y.to_string());

        set("player", "move_speed", self.player.move_speed.to_string());
        set("player", "rotation_speed", self.player.rotation_speed.to_string());

        let o = &self.orbit;
        set("orbit", "interact_radius", o.interact_radius.to_string());
        set("orbit", "hover_distance", o.hover_distance.to_string());
        set("orbit", "hover_speed", o.hover_speed.to_string());
        set("orbit", "base_objects_per_ring", o.base_objects_per_ring.to_string());
        set("orbit", "revolution_speed", o.revolution_speed.to_string());
        set("orbit", "self_rotation_speed", o.self_rotation_speed.to_string());
        set("orbit", "interaction_delay", o.interaction_delay.to_string());
        set("orbit", "target_count", o.target_count.to_string());
        set("orbit", "push_object_speed", o.push_object_speed.to_string());

        let s = &self.scene;
        set("scene", "object_count", s.object_count.to_string());
        set("scene", "spawn_radius", s.spawn_radius.to_string());
        set("scene", "seed", s.seed.to_string());
        set("scene", "backdrop_sprite", s.backdrop_sprite.clone());
        set(
            "scene",
            "active_backdrop_sprite",
            s.active_backdrop_sprite.clone().unwrap_or_default(),
        );
        set("scene", "prompt_text", s.prompt_text.clone());
        set("scene", "messages_path", s.messages_path.display().to_string());
        set("scene", "message_interval", s.message_interval.to_string());

        let a = &self.audio;
        set("audio", "enabled", a.enabled.to_string());
        set("audio", "volume", a.volume.to_string());
        set("audio", "loop", a.looped.to_string());
        set("audio", "calm_track", a.calm_track.clone());
        set("audio", "anger_track", a.anger_track.clone());
        set("audio", "level2_track", a.level2_track.clone());
        set("audio", "fade_duration", a.fade_duration.to_string());

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_scene_tuning() {
        let c = GameConfig::new();
        assert_eq!(c.orbit.base_objects_per_ring, 7);
        assert_eq!(c.orbit.target_count, 15);
        assert_eq!(c.orbit.interaction_delay, 5.0);
        assert_eq!(c.orbit.hover_distance, 1.5);
        assert_eq!(c.player.move_speed, 5.0);
        assert_eq!(c.player.rotation_speed, 10.0);
        assert_eq!(c.audio.volume, 0.5);
        assert!(c.audio.looped);
        assert_eq!(c.config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn load_overrides_only_present_keys() {
        let mut c = GameConfig::new();
        c.load_from_str(
            "[orbit]\ntarget_count = 3\ninteraction_delay = 0.5\n\n[player]\nmove_speed = 7\n",
        )
        .unwrap();
        assert_eq!(c.orbit.target_count, 3);
        assert_eq!(c.orbit.interaction_delay, 0.5);
        assert_eq!(c.player.move_speed, 7.0);
        assert_eq!(c.orbit.base_objects_per_ring, 7);
        assert_eq!(c.player.rotation_speed, 10.0);
    }

    #[test]
    fn zero_ring_capacity_is_clamped() {
        let mut c = GameConfig::new();
        c.load_from_str("[orbit]\nbase_objects_per_ring = 0\n").unwrap();
        assert_eq!(c.orbit.base_objects_per_ring, 1);
    }

    #[test]
    fn empty_active_sprite_disables_cue() {
        let mut c = GameConfig::new();
        c.load_from_str("[scene]\nactive_backdrop_sprite =\n").unwrap();
        assert!(c.scene.active_backdrop_sprite.is_none());
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut c = GameConfig::with_path("./definitely/not/here.ini");
        assert!(c.load_from_file().is_err());
        assert_eq!(c.orbit.target_count, 15);
    }

    #[test]
    fn layout_uses_orbit_values() {
        let l = OrbitConfig::default().layout();
        assert_eq!(l.base_per_ring, 7);
        assert_eq!(l.hover_distance, 1.5);
        assert_eq!(l.revolution_speed, 30.0);
    }
}
