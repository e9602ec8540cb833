pub mod camera;
pub mod control;
pub mod environment;
pub mod flight_state;
pub mod forces;
pub mod lifecycle;
pub mod physics;
pub mod telemetry;

pub use camera::world_projection_system;
pub use control::{control_normalization_system, keyboard_input_system};
pub use environment::environment_system;
pub use flight_state::flight_state_system;
pub use lifecycle::{clock_system, lifecycle_system};
pub use physics::{physics_step_system, step_kinematics};
pub use telemetry::telemetry_system;
