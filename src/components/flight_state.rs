use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::resources::config::profile::StallProfile;

/// The three flight regimes layered on top of the integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlightStage {
    #[default]
    Flying,
    /// Insufficient speed or excessive bank has collapsed lift
    Stalled,
    /// Timed barrel-roll rotation, independent of translational physics
    Rolling,
}

/// Stall / barrel-roll state machine.
///
/// Transitions:
/// - Flying -> Stalled when the stall guard fires, and back when it clears.
/// - Flying/Stalled -> Rolling when a barrel roll is detected; Rolling holds
///   until the rotation completes a full turn, then returns to Flying.
///   The stall guard is not evaluated while a roll is in progress.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct FlightState {
    pub stage: FlightStage,

    /// Bank angle in degrees, positive rolling right
    pub bank_angle: f64,

    /// Progress through the current barrel roll [rad], in [0, 2*pi)
    pub roll_progress: f64,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            stage: FlightStage::Flying,
            bank_angle: 0.0,
            roll_progress: 0.0,
        }
    }
}

impl FlightState {
    pub fn stalled(&self) -> bool {
        self.stage == FlightStage::Stalled
    }

    pub fn rolling(&self) -> bool {
        self.stage == FlightStage::Rolling
    }

    /// Guard condition for the stall transition.
    pub fn stall_guard(speed: f64, bank_angle: f64, stall: &StallProfile) -> bool {
        speed < stall.min_flying_speed || bank_angle.abs() > stall.stall_angle
    }

    /// Re-evaluate the Flying/Stalled transition. No-op while Rolling.
    pub fn apply_stall_guard(&mut self, speed: f64, stall: &StallProfile) {
        if self.rolling() {
            return;
        }
        self.stage = if Self::stall_guard(speed, self.bank_angle, stall) {
            FlightStage::Stalled
        } else {
            FlightStage::Flying
        };
    }

    pub fn begin_roll(&mut self) {
        self.stage = FlightStage::Rolling;
        self.roll_progress = 0.0;
    }

    /// Advance an in-progress barrel roll. Returns true on completion.
    pub fn advance_roll(&mut self, dt: f64, roll_speed: f64) -> bool {
        self.roll_progress += dt * roll_speed;
        if self.roll_progress >= TAU {
            self.roll_progress = 0.0;
            self.stage = FlightStage::Flying;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stall_guard_fires_on_low_speed_or_steep_bank() {
        let stall = StallProfile::default();
        assert!(FlightState::stall_guard(
            stall.min_flying_speed - 0.1,
            0.0,
            &stall
        ));
        assert!(FlightState::stall_guard(
            stall.min_flying_speed + 5.0,
            stall.stall_angle + 1.0,
            &stall
        ));
        assert!(!FlightState::stall_guard(
            stall.min_flying_speed + 5.0,
            0.0,
            &stall
        ));
    }

    #[test]
    fn stall_guard_ignored_while_rolling() {
        let stall = StallProfile::default();
        let mut state = FlightState::default();
        state.begin_roll();
        state.apply_stall_guard(0.0, &stall);
        assert!(state.rolling());
    }

    #[test]
    fn roll_completes_after_full_turn() {
        let mut state = FlightState::default();
        state.begin_roll();

        let roll_speed = 6.0;
        let dt = 1.0 / 60.0;
        let mut completed = false;
        for _ in 0..120 {
            if state.advance_roll(dt, roll_speed) {
                completed = true;
                break;
            }
        }

        assert!(completed);
        assert_eq!(state.stage, FlightStage::Flying);
        assert_eq!(state.roll_progress, 0.0);
    }
}
