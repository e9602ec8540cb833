use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Camera-follow and screen-projection tunables.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Screen x past which the camera starts following [px]
    pub follow_trigger: f64,
    /// Single-pole exponential smoothing factor per step, in (0, 1]
    pub smoothing: f64,
    /// Left edge of the visible band [px]
    pub screen_min_x: f64,
    /// Margin kept clear at the right edge [px]
    pub screen_right_margin: f64,
    pub viewport_width: f64,
    /// Screen-x pixels moved per unit of lateral control input
    pub lateral_rate: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            follow_trigger: 350.0,
            smoothing: 0.15,
            screen_min_x: 20.0,
            screen_right_margin: 80.0,
            viewport_width: 800.0,
            lateral_rate: 6.0,
        }
    }
}

/// Externally supplied level constants: where the run starts and ends.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// World x at which the level is complete
    pub goal_x: f64,
    pub world_width: f64,
    pub start_world: Vector2<f64>,
    pub start_screen: Vector2<f64>,
    pub start_velocity: Vector2<f64>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            goal_x: 10_000.0,
            world_width: 10_000.0,
            start_world: Vector2::new(100.0, 300.0),
            start_screen: Vector2::new(100.0, 300.0),
            start_velocity: Vector2::new(2.0, 0.0),
        }
    }
}
