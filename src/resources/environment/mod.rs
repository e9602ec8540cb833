pub mod biome;
pub mod wind;

use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;

pub use biome::{biome_effects, Biome, BiomeEffects, BiomeKind, BiomeLibrary, DraftBand, Thermal};
pub use wind::{Gust, WindField};

use crate::resources::config::profile::FlightProfile;
use crate::utils::rng::RngManager;

/// The environment the integrator sees this step: base profile and wind,
/// modulated by the current biome. Recomputed from the base values every
/// step so biome modifiers never accumulate.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ActiveEnvironment {
    pub profile: FlightProfile,
    pub wind: WindField,
    pub biome: BiomeKind,
}

impl Default for ActiveEnvironment {
    fn default() -> Self {
        Self {
            profile: FlightProfile::default(),
            wind: WindField::default(),
            biome: BiomeKind::Ocean,
        }
    }
}

/// Seeded generator behind the wind turbulence term.
#[derive(Resource, Debug, Clone)]
pub struct TurbulenceRng(pub ChaCha8Rng);

impl TurbulenceRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(RngManager::new(seed).stream("turbulence"))
    }
}

impl Default for TurbulenceRng {
    fn default() -> Self {
        Self::from_seed(0)
    }
}
