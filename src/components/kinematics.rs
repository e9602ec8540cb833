use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Kinematic state of the craft, advanced once per simulation step.
///
/// Owned exclusively by the simulation loop: forces are recomputed from
/// scratch every step, accumulated into `acceleration`, integrated into
/// `velocity`, and the accumulator is zeroed before the next tick.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct KinematicState {
    /// Linear velocity in world units per reference frame
    pub velocity: Vector2<f64>,

    /// Per-step force accumulator, reset after integration
    pub acceleration: Vector2<f64>,

    // Derived scalars from the last step, read back by presentation
    pub lift: f64,
    pub drag: f64,
    pub thrust: f64,
    pub air_resistance: f64,

    /// Boost reserve, always within [0, max_energy]
    pub energy: f64,
    pub max_energy: f64,
}

impl Default for KinematicState {
    fn default() -> Self {
        Self {
            velocity: Vector2::zeros(),
            acceleration: Vector2::zeros(),
            lift: 0.0,
            drag: 0.0,
            thrust: 0.0,
            air_resistance: 0.0,
            energy: 100.0,
            max_energy: 100.0,
        }
    }
}

impl KinematicState {
    /// Create a state already moving at the given launch velocity.
    pub fn launch(velocity: Vector2<f64>) -> Self {
        Self {
            velocity,
            ..Default::default()
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn energy_fraction(&self) -> f64 {
        if self.max_energy > 0.0 {
            self.energy / self.max_energy
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn launch_keeps_velocity_and_full_energy() {
        let state = KinematicState::launch(Vector2::new(2.0, 0.0));
        assert_relative_eq!(state.speed(), 2.0);
        assert_relative_eq!(state.energy_fraction(), 1.0);
        assert_eq!(state.acceleration, Vector2::zeros());
    }
}
