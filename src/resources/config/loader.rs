use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::resources::config::camera::{CameraConfig, LevelConfig};
use crate::resources::config::control::BarrelRollConfig;
use crate::resources::config::profile::{FlightProfile, StallProfile};
use crate::resources::control::ControlState;
use crate::resources::environment::biome::BiomeLibrary;
use crate::resources::environment::wind::WindField;
use crate::utils::errors::SimError;

/// Complete simulation configuration, loadable from YAML.
///
/// Every section falls back to its default, so a config file only needs to
/// name the values it overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub profile: FlightProfile,
    #[serde(default)]
    pub stall: StallProfile,
    #[serde(default)]
    pub wind: WindField,
    #[serde(default)]
    pub biomes: BiomeLibrary,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub level: LevelConfig,
    #[serde(default)]
    pub barrel_roll: BarrelRollConfig,
    #[serde(default)]
    pub control: ControlState,
    /// Master seed for the turbulence stream
    #[serde(default)]
    pub seed: u64,
}

impl SimConfig {
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, SimError> {
        let config: SimConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.profile.max_velocity.x <= 0.0 || self.profile.max_velocity.y <= 0.0 {
            return Err(SimError::InvalidConfig(
                "max_velocity components must be positive".into(),
            ));
        }
        if self.profile.stall_speed < 0.0 {
            return Err(SimError::InvalidConfig(
                "stall_speed must be non-negative".into(),
            ));
        }
        if self.profile.max_thrust < 0.0 {
            return Err(SimError::InvalidConfig(
                "max_thrust must be non-negative".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.control.deadzone) {
            return Err(SimError::InvalidConfig(
                "deadzone must be within [0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.camera.smoothing) || self.camera.smoothing == 0.0 {
            return Err(SimError::InvalidConfig(
                "camera smoothing must be within (0, 1]".into(),
            ));
        }
        if self.level.goal_x <= 0.0 {
            return Err(SimError::InvalidConfig("goal_x must be positive".into()));
        }
        if self.barrel_roll.cooldown < 0.0 || self.barrel_roll.roll_speed <= 0.0 {
            return Err(SimError::InvalidConfig(
                "barrel roll cooldown/roll_speed out of range".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SimConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.profile, FlightProfile::default());
        assert_eq!(config.level.goal_x, 10_000.0);
    }

    #[test]
    fn partial_override_keeps_the_rest() {
        let config = SimConfig::from_yaml_str(
            "level:\n  goal_x: 5000.0\n  world_width: 5000.0\n  start_world: [100.0, 300.0]\n  start_screen: [100.0, 300.0]\n  start_velocity: [2.0, 0.0]\n",
        )
        .unwrap();
        assert_eq!(config.level.goal_x, 5000.0);
        assert_eq!(config.profile, FlightProfile::default());
    }

    #[test]
    fn rejects_bad_deadzone() {
        let err = SimConfig::from_yaml_str("control:\n  mode: Normal\n  sensitivity: 1.0\n  deadzone: 2.0\n").unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
    }
}
