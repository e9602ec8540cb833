use bevy::prelude::*;

use crate::components::{FlightState, KinematicState, PlayerController};
use crate::resources::environment::ActiveEnvironment;
use crate::resources::world::{FlightTelemetry, LastStep, WorldTracker};

/// Speed above which the presentation layer draws speed lines.
pub const SPEED_LINES_THRESHOLD: f64 = 12.0;

/// Efficiency score in [0, 100]: full marks with no parasitic force, losing
/// ten points per unit of drag plus air resistance.
pub fn efficiency_score(drag: f64, air_resistance: f64) -> f64 {
    (100.0 - (drag + air_resistance) * 10.0).max(0.0)
}

/// Smoothness score in [0, 100] from the net acceleration of the last step.
pub fn smoothness_score(net_acceleration_sum: f64) -> f64 {
    (100.0 - net_acceleration_sum.abs() * 50.0).max(0.0)
}

/// Assemble the per-frame readback for the presentation layer. Runs last,
/// after projection, and in every phase, so the frame that completes or
/// aborts the run still reports its final state.
pub fn telemetry_system(
    query: Query<(&KinematicState, &FlightState), With<PlayerController>>,
    tracker: Res<WorldTracker>,
    env: Res<ActiveEnvironment>,
    last_step: Res<LastStep>,
    mut telemetry: ResMut<FlightTelemetry>,
) {
    let Ok((kinematics, flight)) = query.get_single() else {
        return;
    };

    let speed = kinematics.speed();
    *telemetry = FlightTelemetry {
        screen_position: tracker.screen_position,
        bank_angle: flight.bank_angle,
        speed,
        stalled: flight.stalled(),
        barrel_rolling: flight.rolling(),
        barrel_roll_progress: flight.roll_progress,
        biome: env.biome,
        distance: tracker.distance,
        energy: kinematics.energy_fraction(),
        level_complete: tracker.level_complete,
        speed_lines: speed > SPEED_LINES_THRESHOLD,
        efficiency: efficiency_score(kinematics.drag, kinematics.air_resistance),
        smoothness: smoothness_score(
            last_step.net_acceleration.x + last_step.net_acceleration.y,
        ),
    };
}
