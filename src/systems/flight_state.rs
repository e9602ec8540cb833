use bevy::prelude::*;

use crate::components::{FlightState, KinematicState, PlayerController};
use crate::resources::config::control::BarrelRollConfig;
use crate::resources::config::profile::StallProfile;
use crate::resources::control::{CombinedControls, ControlState};
use crate::resources::world::SimClock;
use crate::systems::control::detect_barrel_roll;

/// Integrate the bank angle for one step and return the new value.
///
/// With roll input the bank changes at `bank_rate` degrees per reference
/// frame, hard-clamped to the commandable range. Without input it decays
/// toward level by the per-frame `level_return` factor, compounded over the
/// frames this step spans.
pub fn integrate_bank(bank: f64, roll: f64, frames: f64, stall: &StallProfile) -> f64 {
    if roll != 0.0 {
        (bank + roll * stall.bank_rate * frames).clamp(-stall.max_bank_angle, stall.max_bank_angle)
    } else {
        bank * stall.level_return.powf(frames)
    }
}

/// Stall and barrel-roll state machine, run after input normalization and
/// before the integrator so the step sees this frame's regime.
pub fn flight_state_system(
    mut query: Query<(&KinematicState, &mut FlightState), With<PlayerController>>,
    combined: Res<CombinedControls>,
    mut control: ResMut<ControlState>,
    barrel: Res<BarrelRollConfig>,
    stall: Res<StallProfile>,
    clock: Res<SimClock>,
) {
    if clock.dt <= 0.0 {
        return;
    }
    let Ok((kinematics, mut flight)) = query.get_single_mut() else {
        return;
    };

    if flight.rolling() {
        if flight.advance_roll(clock.dt, barrel.roll_speed) {
            debug!("barrel roll complete");
        }
        return;
    }

    if detect_barrel_roll(combined.0.roll, &mut control, &barrel, clock.elapsed) {
        debug!("barrel roll triggered");
        flight.begin_roll();
        return;
    }

    let frames = clock.frames();
    flight.bank_angle = integrate_bank(flight.bank_angle, combined.0.roll, frames, &stall);

    // A stalled craft drops its banked wing further, making recovery an
    // active correction rather than a wait.
    if flight.stalled() && flight.bank_angle != 0.0 {
        flight.bank_angle += flight.bank_angle.signum() * stall.nose_down_rate * frames;
    }

    flight.apply_stall_guard(kinematics.speed(), &stall);
}
