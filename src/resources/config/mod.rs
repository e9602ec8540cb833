pub mod camera;
pub mod control;
pub mod loader;
pub mod profile;

pub use camera::{CameraConfig, LevelConfig};
pub use control::{BarrelRollConfig, FlightMode, FlightModeProfile};
pub use loader::SimConfig;
pub use profile::{FlightProfile, StallProfile};
