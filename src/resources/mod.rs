pub mod config;
pub mod control;
pub mod environment;
pub mod world;

pub use config::{
    camera::{CameraConfig, LevelConfig},
    control::{BarrelRollConfig, FlightMode, FlightModeProfile},
    loader::SimConfig,
    profile::{FlightProfile, StallProfile},
};
pub use control::{CombinedControls, ControlInputs, ControlState, JoystickInputs, KeyInputs};
pub use environment::{
    biome_effects, ActiveEnvironment, Biome, BiomeEffects, BiomeKind, BiomeLibrary, DraftBand,
    Gust, Thermal, TurbulenceRng, WindField,
};
pub use world::{
    simulation_running, FlightTelemetry, LastStep, SimClock, SimCommand, SimPhase, UpdateMode,
    WorldTracker,
};
