use bevy::prelude::*;

use crate::plugins::physics::FlightSet;
use crate::resources::config::control::BarrelRollConfig;
use crate::resources::control::{CombinedControls, ControlState, JoystickInputs, KeyInputs};
use crate::systems::{control_normalization_system, keyboard_input_system};

/// Input collection and normalization. Keyboard state is read when a
/// keyboard exists; `JoystickInputs` is left to the outer shell (or a test)
/// to write.
#[derive(Default)]
pub struct ControlPlugin {
    pub state: Option<ControlState>,
    pub barrel_roll: Option<BarrelRollConfig>,
}

impl Plugin for ControlPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.state.clone().unwrap_or_default())
            .insert_resource(self.barrel_roll.clone().unwrap_or_default())
            .init_resource::<KeyInputs>()
            .init_resource::<JoystickInputs>()
            .init_resource::<CombinedControls>()
            .add_systems(Update, keyboard_input_system.in_set(FlightSet::Input))
            .add_systems(
                Update,
                control_normalization_system.in_set(FlightSet::Normalize),
            );
    }
}
