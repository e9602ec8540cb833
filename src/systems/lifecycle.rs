use bevy::prelude::*;

use crate::components::{FlightState, KinematicState, PlayerController};
use crate::resources::config::camera::LevelConfig;
use crate::resources::control::ControlState;
use crate::resources::world::{FlightTelemetry, SimClock, SimCommand, SimPhase, WorldTracker};

/// Advance the frame clock from bevy's wall-clock delta.
pub fn clock_system(time: Res<Time>, mut clock: ResMut<SimClock>) {
    clock.tick(time.delta_secs_f64());
}

/// Apply lifecycle commands from the outer game shell.
pub fn lifecycle_system(
    mut commands: EventReader<SimCommand>,
    level: Res<LevelConfig>,
    mut phase: ResMut<SimPhase>,
    mut tracker: ResMut<WorldTracker>,
    mut control: ResMut<ControlState>,
    mut telemetry: ResMut<FlightTelemetry>,
    mut query: Query<(&mut KinematicState, &mut FlightState), With<PlayerController>>,
) {
    for command in commands.read() {
        match command {
            SimCommand::Start => {
                reset_run(&level, &mut tracker, &mut control, &mut telemetry, &mut query);
                *phase = SimPhase::Running;
                info!("simulation started");
            }
            SimCommand::Reset => {
                reset_run(&level, &mut tracker, &mut control, &mut telemetry, &mut query);
                *phase = SimPhase::Ready;
                info!("simulation reset");
            }
            SimCommand::Abort => {
                *phase = SimPhase::GameOver;
                info!("simulation aborted");
            }
        }
    }
}

fn reset_run(
    level: &LevelConfig,
    tracker: &mut WorldTracker,
    control: &mut ControlState,
    telemetry: &mut FlightTelemetry,
    query: &mut Query<(&mut KinematicState, &mut FlightState), With<PlayerController>>,
) {
    tracker.reset(level);
    control.clear_runtime();
    *telemetry = FlightTelemetry::default();
    if let Ok((mut kinematics, mut flight)) = query.get_single_mut() {
        *kinematics = KinematicState::launch(level.start_velocity);
        *flight = FlightState::default();
    }
}
