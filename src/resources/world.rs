use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::resources::config::camera::LevelConfig;
use crate::resources::environment::biome::BiomeKind;

/// Lifecycle of the frame-driven simulation. The simulation sets only run
/// while `Running`; leaving that phase tears the step loop down.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimPhase {
    #[default]
    Ready,
    Running,
    GameOver,
    Complete,
}

/// Run condition gating every simulation system.
pub fn simulation_running(phase: Res<SimPhase>) -> bool {
    *phase == SimPhase::Running
}

/// Lifecycle requests from the outer game shell.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimCommand {
    Start,
    Reset,
    Abort,
}

/// How the per-step time increment is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UpdateMode {
    /// Wall-clock delta between frames, capped by `max_frame_delta`
    RealTime,
    /// Constant increment, for tests and headless stepping
    Fixed { dt: f64 },
}

/// Frame clock. In real-time mode a delta above `max_frame_delta` (e.g. a
/// backgrounded tab) yields dt = 0 and the whole step is skipped instead of
/// integrating one huge jump.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    pub mode: UpdateMode,
    pub max_frame_delta: f64,
    /// Reference tick rate the per-frame constants are tuned at
    pub reference_rate: f64,
    /// The increment the current step integrates over
    pub dt: f64,
    pub elapsed: f64,
    pub frame: u64,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            mode: UpdateMode::RealTime,
            max_frame_delta: 0.25,
            reference_rate: 60.0,
            dt: 0.0,
            elapsed: 0.0,
            frame: 0,
        }
    }
}

impl SimClock {
    pub fn fixed(dt: f64) -> Self {
        Self {
            mode: UpdateMode::Fixed { dt },
            ..Default::default()
        }
    }

    /// Advance the clock given the raw wall-clock delta for this frame.
    pub fn tick(&mut self, raw_delta: f64) {
        self.dt = match self.mode {
            UpdateMode::Fixed { dt } => dt,
            UpdateMode::RealTime => {
                if raw_delta > self.max_frame_delta {
                    0.0
                } else {
                    raw_delta
                }
            }
        };
        self.elapsed += self.dt;
        self.frame += 1;
    }

    /// Number of reference frames this step spans.
    pub fn frames(&self) -> f64 {
        self.dt * self.reference_rate
    }
}

/// Authoritative world position plus its derived screen/camera projection.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WorldTracker {
    pub world_position: Vector2<f64>,
    /// Clamped, camera-relative projection used only for rendering and as a
    /// secondary input to lateral control
    pub screen_position: Vector2<f64>,
    /// Exponentially damped follow of world x
    pub camera_offset: Vector2<f64>,
    /// Monotone non-decreasing progress metric for scoring
    pub distance: f64,
    pub level_complete: bool,
}

impl Default for WorldTracker {
    fn default() -> Self {
        Self::from_level(&LevelConfig::default())
    }
}

impl WorldTracker {
    pub fn from_level(level: &LevelConfig) -> Self {
        Self {
            world_position: level.start_world,
            screen_position: level.start_screen,
            camera_offset: Vector2::zeros(),
            distance: 0.0,
            level_complete: false,
        }
    }

    pub fn reset(&mut self, level: &LevelConfig) {
        *self = Self::from_level(level);
    }
}

/// Net acceleration applied by the last integrator step, captured before the
/// accumulator reset so telemetry can rate flight smoothness.
#[derive(Resource, Debug, Clone, Default)]
pub struct LastStep {
    pub net_acceleration: Vector2<f64>,
}

/// Per-frame readback for the presentation layer: everything the HUD,
/// sprites and effects need, assembled once after projection.
#[derive(Resource, Debug, Clone, Default)]
pub struct FlightTelemetry {
    pub screen_position: Vector2<f64>,
    pub bank_angle: f64,
    pub speed: f64,
    pub stalled: bool,
    pub barrel_rolling: bool,
    pub barrel_roll_progress: f64,
    pub biome: BiomeKind,
    pub distance: f64,
    /// Energy as a fraction of capacity, in [0, 1]
    pub energy: f64,
    pub level_complete: bool,
    pub speed_lines: bool,
    pub efficiency: f64,
    pub smoothness: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn oversized_realtime_delta_is_discarded() {
        let mut clock = SimClock::default();
        clock.tick(0.5);
        assert_eq!(clock.dt, 0.0);

        clock.tick(1.0 / 60.0);
        assert_relative_eq!(clock.dt, 1.0 / 60.0);
        assert_eq!(clock.frame, 2);
    }

    #[test]
    fn fixed_mode_ignores_wall_clock() {
        let mut clock = SimClock::fixed(1.0 / 60.0);
        clock.tick(123.0);
        assert_relative_eq!(clock.dt, 1.0 / 60.0);
        assert_relative_eq!(clock.frames(), 1.0);
    }
}
