use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Flight physics profile: the named constant bundle the integrator runs on.
///
/// Immutable per biome; the environment system swaps a copy wholesale (with
/// gravity rescaled) when the biome changes.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightProfile {
    /// Constant downward acceleration
    pub gravity: f64,
    pub air_density: f64,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    /// Scale from normalized thrust input to acceleration
    pub thrust_power: f64,
    /// Symmetric per-axis velocity bound
    pub max_velocity: Vector2<f64>,
    /// Below this speed lift collapses to zero
    pub stall_speed: f64,
    pub optimal_speed: f64,
    pub max_thrust: f64,
    /// Energy drained per unit of thrust input per step
    pub energy_drain: f64,
    /// Energy regenerated per step
    pub energy_regen: f64,
}

impl Default for FlightProfile {
    fn default() -> Self {
        Self {
            gravity: 0.015,
            air_density: 1.0,
            lift_coefficient: 0.8,
            drag_coefficient: 0.02,
            thrust_power: 1.2,
            max_velocity: Vector2::new(20.0, 12.0),
            stall_speed: 3.0,
            optimal_speed: 8.0,
            max_thrust: 2.0,
            energy_drain: 0.02,
            energy_regen: 0.01,
        }
    }
}

/// Stall behavior tunables for the Flying/Stalled state machine.
///
/// Two presets ship with the crate; their constants come from different
/// design iterations of the same game and are deliberately not reconciled.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StallProfile {
    /// Below this speed the craft cannot sustain flight
    pub min_flying_speed: f64,
    /// Bank angle [deg] beyond which lift collapses
    pub stall_angle: f64,
    /// Bank angle [deg] the controls can command
    pub max_bank_angle: f64,
    /// Bank change per unit roll input per reference frame [deg]
    pub bank_rate: f64,
    /// Per-frame decay factor toward level flight with no roll input
    pub level_return: f64,
    /// Nose-down torque applied per reference frame while stalled [deg]
    pub nose_down_rate: f64,
    /// Gravity multiplier while stalled
    pub stall_gravity_boost: f64,
}

impl Default for StallProfile {
    fn default() -> Self {
        Self {
            min_flying_speed: 3.0,
            stall_angle: 25.0,
            max_bank_angle: 45.0,
            bank_rate: 2.0,
            level_return: 0.95,
            nose_down_rate: 0.5,
            stall_gravity_boost: 1.5,
        }
    }
}

impl StallProfile {
    /// The later design iteration: stalls only at extreme bank.
    pub fn aggressive() -> Self {
        Self {
            stall_angle: 45.0,
            max_bank_angle: 60.0,
            ..Default::default()
        }
    }
}
