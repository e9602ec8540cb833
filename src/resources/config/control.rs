use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Selectable flight mode. Scales how raw input maps to physical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlightMode {
    #[default]
    Normal,
    Precision,
    Speed,
}

impl FlightMode {
    pub fn label(&self) -> &'static str {
        match self {
            FlightMode::Normal => "Normal",
            FlightMode::Precision => "Precision",
            FlightMode::Speed => "Speed",
        }
    }

    pub fn profile(&self) -> FlightModeProfile {
        match self {
            FlightMode::Normal => FlightModeProfile {
                thrust_multiplier: 1.0,
                response_multiplier: 1.0,
                stability_multiplier: 1.0,
            },
            FlightMode::Precision => FlightModeProfile {
                thrust_multiplier: 0.6,
                response_multiplier: 0.7,
                stability_multiplier: 1.5,
            },
            FlightMode::Speed => FlightModeProfile {
                thrust_multiplier: 1.5,
                response_multiplier: 1.3,
                stability_multiplier: 0.8,
            },
        }
    }
}

/// Multiplier bundle applied by control normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightModeProfile {
    pub thrust_multiplier: f64,
    pub response_multiplier: f64,
    pub stability_multiplier: f64,
}

/// Barrel-roll detection and animation tunables.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrelRollConfig {
    /// Seconds after a trigger before another roll can register
    pub cooldown: f64,
    /// Roll input must change by more than this within one tick
    pub trigger_delta: f64,
    /// ... while its absolute value exceeds this
    pub trigger_magnitude: f64,
    /// Rotation rate of the roll animation [rad/s]
    pub roll_speed: f64,
}

impl Default for BarrelRollConfig {
    fn default() -> Self {
        Self {
            cooldown: 1.0,
            trigger_delta: 1.5,
            trigger_magnitude: 0.8,
            roll_speed: 6.0,
        }
    }
}
