use bevy::prelude::*;
use nalgebra::Vector2;

use crate::resources::config::profile::FlightProfile;
use crate::resources::environment::biome::{biome_effects, BiomeLibrary};
use crate::resources::environment::wind::WindField;
use crate::resources::environment::ActiveEnvironment;
use crate::resources::world::WorldTracker;

/// Derive the environment the integrator sees from the base wind field and
/// the biome at the given distance and position. The base values are never
/// mutated, so biome modifiers cannot compound across frames.
pub fn active_environment(
    profile: &FlightProfile,
    base_wind: &WindField,
    library: &BiomeLibrary,
    distance: f64,
    position: &Vector2<f64>,
) -> ActiveEnvironment {
    let biome = library.biome_for_distance(distance);
    let effects = biome_effects(position, biome);

    // Fold strength into the direction so draft and thermal deltas stay in
    // absolute units rather than being rescaled by the base strength.
    let mut direction = base_wind.direction * base_wind.strength * biome.wind_modifier;
    direction += effects.wind;
    direction.y -= effects.thermal;

    let wind = WindField {
        direction,
        strength: 1.0,
        turbulence: base_wind.turbulence * biome.turbulence_modifier,
        gusts: base_wind.gusts.clone(),
    };

    let mut profile = profile.clone();
    profile.gravity *= effects.gravity_multiplier;

    ActiveEnvironment {
        profile,
        wind,
        biome: biome.kind,
    }
}

/// Refresh `ActiveEnvironment` for this frame's position and distance.
pub fn environment_system(
    profile: Res<FlightProfile>,
    base_wind: Res<WindField>,
    library: Res<BiomeLibrary>,
    tracker: Res<WorldTracker>,
    mut env: ResMut<ActiveEnvironment>,
) {
    let next = active_environment(
        &profile,
        &base_wind,
        &library,
        tracker.distance,
        &tracker.world_position,
    );
    if next.biome != env.biome {
        debug!(from = env.biome.name(), to = next.biome.name(), "biome transition");
    }
    *env = next;
}
