pub mod camera;
pub mod control;
pub mod environment;
pub mod physics;

pub use camera::CameraPlugin;
pub use control::ControlPlugin;
pub use environment::EnvironmentPlugin;
pub use physics::{FlightPhysicsPlugin, FlightSet};

use bevy::app::{PluginGroup, PluginGroupBuilder};

use crate::resources::config::loader::SimConfig;

/// The full simulation stack with default tunables. Use `from_config` to
/// run a loaded configuration instead.
#[derive(Default)]
pub struct SkyglidePlugins {
    pub config: SimConfig,
}

impl SkyglidePlugins {
    pub fn from_config(config: SimConfig) -> Self {
        Self { config }
    }
}

impl PluginGroup for SkyglidePlugins {
    fn build(self) -> PluginGroupBuilder {
        let config = self.config;
        PluginGroupBuilder::start::<Self>()
            .add(FlightPhysicsPlugin {
                clock: None,
                stall: Some(config.stall),
                seed: config.seed,
            })
            .add(ControlPlugin {
                state: Some(config.control),
                barrel_roll: Some(config.barrel_roll),
            })
            .add(EnvironmentPlugin {
                profile: Some(config.profile),
                wind: Some(config.wind),
                biomes: Some(config.biomes),
            })
            .add(CameraPlugin {
                camera: Some(config.camera),
                level: Some(config.level),
            })
    }
}
