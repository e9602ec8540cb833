pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{FlightStage, FlightState, KinematicState, PlayerController};
pub use plugins::{
    CameraPlugin, ControlPlugin, EnvironmentPlugin, FlightPhysicsPlugin, FlightSet,
    SkyglidePlugins,
};
pub use resources::{
    ActiveEnvironment, BarrelRollConfig, BiomeKind, BiomeLibrary, CameraConfig, CombinedControls,
    ControlInputs, ControlState, FlightMode, FlightProfile, FlightTelemetry, JoystickInputs,
    KeyInputs,
    LevelConfig, SimClock, SimCommand, SimConfig, SimPhase, StallProfile, UpdateMode, WindField,
    WorldTracker,
};
pub use utils::{RngManager, SimError};
