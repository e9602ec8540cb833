use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Deterministic seeding for the simulation's random streams.
///
/// Each named stream (e.g. "turbulence") gets its own ChaCha8 generator
/// derived from the master seed, so two runs with the same seed replay the
/// same wind perturbations regardless of how other streams are consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive a stream generator by hashing the stream name with the master seed.
    pub fn stream(&self, name: &str) -> ChaCha8Rng {
        let mut hasher = DefaultHasher::new();
        self.master_seed.hash(&mut hasher);
        name.hash(&mut hasher);
        ChaCha8Rng::seed_from_u64(hasher.finish())
    }
}

impl Default for RngManager {
    fn default() -> Self {
        Self::new(0)
    }
}
