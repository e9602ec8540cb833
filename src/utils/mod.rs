pub mod errors;
pub mod rng;

pub use errors::SimError;
pub use rng::RngManager;
