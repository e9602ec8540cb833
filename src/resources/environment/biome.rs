use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Biome identity, exposed to the presentation layer by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BiomeKind {
    #[default]
    Ocean,
    Forest,
    Mountains,
    City,
}

impl BiomeKind {
    pub fn name(&self) -> &'static str {
        match self {
            BiomeKind::Ocean => "Ocean",
            BiomeKind::Forest => "Forest",
            BiomeKind::Mountains => "Mountains",
            BiomeKind::City => "City",
        }
    }
}

/// Circular rising-air source with linear radial falloff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thermal {
    pub x: f64,
    pub y: f64,
    pub strength: f64,
    pub radius: f64,
}

/// Vertical-draft band along world x with linear falloff from its center.
/// Positive strength pushes up (updraft list) or down (downdraft list).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftBand {
    pub x: f64,
    pub strength: f64,
    pub width: f64,
}

/// A world-distance-indexed environmental profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Biome {
    pub kind: BiomeKind,
    pub wind_modifier: f64,
    pub turbulence_modifier: f64,
    pub gravity_modifier: f64,
    #[serde(default)]
    pub thermals: Vec<Thermal>,
    #[serde(default)]
    pub updrafts: Vec<DraftBand>,
    #[serde(default)]
    pub downdrafts: Vec<DraftBand>,
}

/// Sequence of biomes laid out in fixed distance brackets.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomeLibrary {
    pub biomes: Vec<Biome>,
    /// Width of each distance bracket; the last biome extends to infinity
    pub bracket_width: f64,
}

impl Default for BiomeLibrary {
    fn default() -> Self {
        Self {
            bracket_width: 2500.0,
            biomes: vec![
                Biome {
                    kind: BiomeKind::Ocean,
                    wind_modifier: 1.2,
                    turbulence_modifier: 0.8,
                    // Slight updraft from the water surface
                    gravity_modifier: 0.95,
                    thermals: Vec::new(),
                    updrafts: vec![
                        DraftBand {
                            x: 2000.0,
                            strength: 0.3,
                            width: 200.0,
                        },
                        DraftBand {
                            x: 4500.0,
                            strength: 0.4,
                            width: 150.0,
                        },
                        DraftBand {
                            x: 7000.0,
                            strength: 0.5,
                            width: 300.0,
                        },
                    ],
                    downdrafts: Vec::new(),
                },
                Biome {
                    kind: BiomeKind::Forest,
                    wind_modifier: 0.7,
                    turbulence_modifier: 1.5,
                    gravity_modifier: 1.0,
                    thermals: vec![
                        Thermal {
                            x: 1500.0,
                            y: 400.0,
                            strength: 0.2,
                            radius: 100.0,
                        },
                        Thermal {
                            x: 3500.0,
                            y: 300.0,
                            strength: 0.3,
                            radius: 120.0,
                        },
                        Thermal {
                            x: 6000.0,
                            y: 350.0,
                            strength: 0.25,
                            radius: 80.0,
                        },
                    ],
                    updrafts: Vec::new(),
                    downdrafts: Vec::new(),
                },
                Biome {
                    kind: BiomeKind::Mountains,
                    wind_modifier: 1.8,
                    turbulence_modifier: 2.0,
                    gravity_modifier: 1.1,
                    thermals: Vec::new(),
                    updrafts: vec![
                        DraftBand {
                            x: 1000.0,
                            strength: 0.6,
                            width: 100.0,
                        },
                        DraftBand {
                            x: 3000.0,
                            strength: 0.8,
                            width: 80.0,
                        },
                    ],
                    downdrafts: vec![
                        DraftBand {
                            x: 2000.0,
                            strength: 0.4,
                            width: 150.0,
                        },
                        DraftBand {
                            x: 5000.0,
                            strength: 0.6,
                            width: 200.0,
                        },
                        DraftBand {
                            x: 8000.0,
                            strength: 0.5,
                            width: 120.0,
                        },
                    ],
                },
                Biome {
                    kind: BiomeKind::City,
                    wind_modifier: 1.1,
                    turbulence_modifier: 1.3,
                    gravity_modifier: 1.05,
                    thermals: vec![
                        Thermal {
                            x: 2500.0,
                            y: 450.0,
                            strength: 0.4,
                            radius: 150.0,
                        },
                        Thermal {
                            x: 5500.0,
                            y: 400.0,
                            strength: 0.5,
                            radius: 180.0,
                        },
                        Thermal {
                            x: 8500.0,
                            y: 420.0,
                            strength: 0.45,
                            radius: 160.0,
                        },
                    ],
                    updrafts: Vec::new(),
                    downdrafts: Vec::new(),
                },
            ],
        }
    }
}

impl BiomeLibrary {
    /// Step function over the distance brackets. Distances past the last
    /// bracket stay in the final biome.
    pub fn biome_for_distance(&self, distance: f64) -> &Biome {
        debug_assert!(!self.biomes.is_empty());
        let index = if distance <= 0.0 {
            0
        } else {
            ((distance / self.bracket_width) as usize).min(self.biomes.len() - 1)
        };
        &self.biomes[index]
    }
}

/// Localized force contributions of a biome at one position.
#[derive(Debug, Clone, PartialEq)]
pub struct BiomeEffects {
    /// Additive wind delta (negative y is upward)
    pub wind: Vector2<f64>,
    pub gravity_multiplier: f64,
    /// Summed thermal strength, applied as upward lift by the environment
    pub thermal: f64,
}

/// Evaluate a biome's localized force sources at the given world position.
pub fn biome_effects(position: &Vector2<f64>, biome: &Biome) -> BiomeEffects {
    let mut thermal = 0.0;
    let mut wind = Vector2::zeros();

    for t in &biome.thermals {
        let distance = (position - Vector2::new(t.x, t.y)).norm();
        if distance < t.radius {
            thermal += (1.0 - distance / t.radius) * t.strength;
        }
    }

    for band in &biome.updrafts {
        let distance = (position.x - band.x).abs();
        if distance < band.width {
            wind.y -= (1.0 - distance / band.width) * band.strength.abs();
        }
    }

    for band in &biome.downdrafts {
        let distance = (position.x - band.x).abs();
        if distance < band.width {
            wind.y += (1.0 - distance / band.width) * band.strength.abs();
        }
    }

    BiomeEffects {
        wind,
        gravity_multiplier: biome.gravity_modifier,
        thermal,
    }
}
