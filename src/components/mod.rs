mod controller;
mod flight_state;
mod kinematics;

pub use controller::PlayerController;
pub use flight_state::{FlightStage, FlightState};
pub use kinematics::KinematicState;
