use bevy_ecs::prelude::Resource;

/// Default physics step in seconds (50 Hz).
pub const DEFAULT_FIXED_DELTA: f32 = 0.02;

/// Simulation clock.
///
/// `delta` and `elapsed` are already scaled by `time_scale`. `fixed_delta` is
/// the physics step used by the fixed-rate schedule and is not scaled.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub fixed_delta: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            fixed_delta: DEFAULT_FIXED_DELTA,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn with_fixed_delta(mut self, fixed_delta: f32) -> Self {
        self.fixed_delta = fixed_delta;
        self
    }
}

/// Upper bound on physics steps per frame; the rest of a long frame is dropped.
pub const MAX_SUBSTEPS: u32 = 8;
/// Longest frame delta fed to the accumulator.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Accumulator turning variable frame deltas into whole fixed steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedStep {
    pub accumulator: f32,
}

impl FixedStep {
    /// Add `dt` and return how many `step`-sized ticks to run this frame.
    pub fn advance(&mut self, dt: f32, step: f32) -> u32 {
        if step <= 0.0 {
            return 0;
        }
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DELTA);
        let mut substeps = 0;
        while self.accumulator >= step && substeps < MAX_SUBSTEPS {
            self.accumulator -= step;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(step);
        }
        substeps
    }
}
