use bevy::prelude::*;

use crate::plugins::physics::FlightSet;
use crate::resources::config::camera::{CameraConfig, LevelConfig};
use crate::resources::world::{simulation_running, FlightTelemetry, WorldTracker};
use crate::systems::{telemetry_system, world_projection_system};

/// World-to-screen projection, camera follow, progress tracking and the
/// telemetry readback.
#[derive(Default)]
pub struct CameraPlugin {
    pub camera: Option<CameraConfig>,
    pub level: Option<LevelConfig>,
}

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        let level = self.level.clone().unwrap_or_default();
        app.insert_resource(self.camera.clone().unwrap_or_default())
            .insert_resource(WorldTracker::from_level(&level))
            .insert_resource(level)
            .init_resource::<FlightTelemetry>()
            .add_systems(
                Update,
                world_projection_system
                    .in_set(FlightSet::Projection)
                    .run_if(simulation_running),
            )
            // Readback runs unconditionally so the frame that leaves the
            // Running phase still publishes its final state, including the
            // completion flag.
            .add_systems(Update, telemetry_system.in_set(FlightSet::Readback));
    }
}
