use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Base wind over the whole world, before biome modulation.
///
/// Inserted as a resource; the environment system derives the effective
/// per-step wind from it without ever mutating the base.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindField {
    pub direction: Vector2<f64>,
    pub strength: f64,
    /// Bound on the per-step random perturbation; zero disables it
    pub turbulence: f64,
    pub gusts: Vec<Gust>,
}

/// A localized gust band along world x, strongest at its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gust {
    pub x: f64,
    pub strength: f64,
    pub width: f64,
}

impl Default for WindField {
    fn default() -> Self {
        Self {
            direction: Vector2::new(1.0, 0.0),
            strength: 0.1,
            turbulence: 0.05,
            gusts: Vec::new(),
        }
    }
}

impl WindField {
    /// A dead-calm field, useful for deterministic tests.
    pub fn calm() -> Self {
        Self {
            direction: Vector2::zeros(),
            strength: 0.0,
            turbulence: 0.0,
            gusts: Vec::new(),
        }
    }
}
