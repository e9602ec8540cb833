use bevy::prelude::*;

use crate::plugins::physics::FlightSet;
use crate::resources::config::profile::FlightProfile;
use crate::resources::environment::biome::BiomeLibrary;
use crate::resources::environment::wind::WindField;
use crate::resources::environment::ActiveEnvironment;
use crate::resources::world::simulation_running;
use crate::systems::environment_system;

/// Base atmosphere and biome layout, plus the per-frame refresh of the
/// environment the integrator reads.
#[derive(Default)]
pub struct EnvironmentPlugin {
    pub profile: Option<FlightProfile>,
    pub wind: Option<WindField>,
    pub biomes: Option<BiomeLibrary>,
}

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.profile.clone().unwrap_or_default())
            .insert_resource(self.wind.clone().unwrap_or_default())
            .insert_resource(self.biomes.clone().unwrap_or_default())
            .init_resource::<ActiveEnvironment>()
            .add_systems(
                Update,
                environment_system
                    .in_set(FlightSet::Environment)
                    .run_if(simulation_running),
            );
    }
}
