use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::resources::config::control::FlightMode;
use crate::utils::errors::SimError;

/// Normalized control vector fed to the integrator.
///
/// Ephemeral: rebuilt from the raw input buffers every step, never persisted.
/// After `combine` the direction components can exceed [-1, 1]; consumers
/// re-clamp before applying thrust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    /// Normalized thrust demand, >= 0 (brake shaping happens downstream)
    pub thrust: f64,
    pub direction: Vector2<f64>,
    pub boost: bool,
    pub brake: bool,
    /// Signed roll input
    pub roll: f64,
    /// True whenever the active mode is Precision
    pub precision: bool,
}

impl Default for ControlInputs {
    fn default() -> Self {
        Self {
            thrust: 0.0,
            direction: Vector2::zeros(),
            boost: false,
            brake: false,
            roll: 0.0,
            precision: false,
        }
    }
}

impl ControlInputs {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.thrust < 0.0 {
            return Err(SimError::InvalidControl("thrust must be >= 0".into()));
        }
        if !self.thrust.is_finite()
            || !self.direction.x.is_finite()
            || !self.direction.y.is_finite()
            || !self.roll.is_finite()
        {
            return Err(SimError::InvalidControl("non-finite control input".into()));
        }
        Ok(())
    }
}

/// The merged keyboard + joystick control vector for the current step.
#[derive(Resource, Debug, Clone, Default)]
pub struct CombinedControls(pub ControlInputs);

/// Normalized keyboard state. The input layer (or a test) writes it; the
/// keyboard system overwrites it from `ButtonInput<KeyCode>` when available.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyInputs {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Latest normalized joystick sample, written by the touch input layer.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct JoystickInputs {
    pub x: f64,
    pub y: f64,
    pub boost: bool,
}

/// Process-wide control configuration plus the roll-detection scratch state.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlState {
    pub mode: FlightMode,
    pub sensitivity: f64,
    /// Joystick inputs below this magnitude are zeroed
    pub deadzone: f64,
    /// Thrust multiplier while boosting with enough energy
    pub boost_multiplier: f64,
    /// Minimum energy for boost to engage
    pub boost_min_energy: f64,
    /// Thrust input substituted while braking (air brake)
    pub brake_thrust: f64,

    // Runtime scratch, not part of the config surface
    #[serde(skip)]
    pub last_input_time: f64,
    #[serde(skip)]
    pub roll_state: f64,
    /// Elapsed-time stamp of the last barrel-roll trigger
    #[serde(skip, default = "cooldown_origin")]
    pub barrel_roll_cooldown: f64,
}

fn cooldown_origin() -> f64 {
    f64::NEG_INFINITY
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            mode: FlightMode::Normal,
            sensitivity: 1.0,
            deadzone: 0.1,
            boost_multiplier: 1.5,
            boost_min_energy: 10.0,
            brake_thrust: -0.5,
            last_input_time: 0.0,
            roll_state: 0.0,
            barrel_roll_cooldown: cooldown_origin(),
        }
    }
}

impl ControlState {
    /// Explicit mode-switch request from the outer UI.
    pub fn set_mode(&mut self, mode: FlightMode) {
        self.mode = mode;
    }

    /// Clear the roll-detection scratch, e.g. on reset.
    pub fn clear_runtime(&mut self) {
        self.last_input_time = 0.0;
        self.roll_state = 0.0;
        self.barrel_roll_cooldown = cooldown_origin();
    }
}
