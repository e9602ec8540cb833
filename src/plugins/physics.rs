use bevy::prelude::*;

use crate::components::{FlightState, KinematicState, PlayerController};
use crate::resources::config::camera::LevelConfig;
use crate::resources::config::profile::StallProfile;
use crate::resources::environment::TurbulenceRng;
use crate::resources::world::{simulation_running, LastStep, SimClock, SimCommand, SimPhase};
use crate::systems::{
    clock_system, flight_state_system, lifecycle_system, physics_step_system,
};

/// Execution order of one simulation frame. The sets run strictly chained;
/// each stage reads the outputs of the previous one.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlightSet {
    /// Clock tick and lifecycle commands
    Clock,
    /// Raw input collection
    Input,
    /// Input normalization into the combined control vector
    Normalize,
    /// Biome lookup and active-environment refresh
    Environment,
    /// Stall and barrel-roll state machine
    FlightState,
    /// Force accumulation and velocity integration
    Integration,
    /// World advance, screen projection, camera follow
    Projection,
    /// Telemetry assembly for the presentation layer
    Readback,
}

/// Core flight simulation: clock, lifecycle, regime state machine and the
/// integrator. Spawns the player entity at startup.
pub struct FlightPhysicsPlugin {
    pub clock: Option<SimClock>,
    pub stall: Option<StallProfile>,
    pub seed: u64,
}

impl Default for FlightPhysicsPlugin {
    fn default() -> Self {
        Self {
            clock: None,
            stall: None,
            seed: 0,
        }
    }
}

impl Plugin for FlightPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.clock.clone().unwrap_or_default())
            .insert_resource(self.stall.clone().unwrap_or_default())
            .insert_resource(TurbulenceRng::from_seed(self.seed))
            .init_resource::<SimPhase>()
            .init_resource::<LastStep>()
            .init_resource::<LevelConfig>()
            .add_event::<SimCommand>()
            .configure_sets(
                Update,
                (
                    FlightSet::Clock,
                    FlightSet::Input,
                    FlightSet::Normalize,
                    FlightSet::Environment,
                    FlightSet::FlightState,
                    FlightSet::Integration,
                    FlightSet::Projection,
                    FlightSet::Readback,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (clock_system, lifecycle_system).chain().in_set(FlightSet::Clock),
            )
            .add_systems(
                Update,
                flight_state_system
                    .in_set(FlightSet::FlightState)
                    .run_if(simulation_running),
            )
            .add_systems(
                Update,
                physics_step_system
                    .in_set(FlightSet::Integration)
                    .run_if(simulation_running),
            );
    }
}

fn spawn_player(mut commands: Commands, level: Res<LevelConfig>) {
    commands.spawn((
        KinematicState::launch(level.start_velocity),
        FlightState::default(),
        PlayerController,
    ));
}
