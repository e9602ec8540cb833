use bevy::prelude::*;
use nalgebra::Vector2;

use crate::resources::config::control::{BarrelRollConfig, FlightMode, FlightModeProfile};
use crate::resources::control::{
    CombinedControls, ControlInputs, ControlState, JoystickInputs, KeyInputs,
};
use crate::resources::world::SimClock;

/// Map discrete keyboard state to a control vector. Up thrusts, down brakes,
/// left/right steer and roll; right also boosts.
pub fn keyboard_inputs(
    keys: &KeyInputs,
    control: &ControlState,
    mode: &FlightModeProfile,
) -> ControlInputs {
    let mut thrust = 0.0;
    let mut direction = Vector2::zeros();
    let mut boost = false;
    let mut roll = 0.0;

    if keys.up {
        thrust += 1.0;
    }
    let brake = keys.down;

    if keys.left {
        direction.x -= 1.0;
        roll -= 1.0;
    }
    if keys.right {
        direction.x += 1.0;
        roll += 1.0;
        boost = true;
    }

    ControlInputs {
        thrust: thrust * mode.thrust_multiplier,
        direction: direction * mode.response_multiplier,
        boost,
        brake,
        roll,
        precision: control.mode == FlightMode::Precision,
    }
}

/// Map a continuous joystick sample to a control vector. Axes inside the
/// deadzone are zeroed before any scaling; a strong down deflection brakes.
pub fn joystick_inputs(
    stick: &JoystickInputs,
    control: &ControlState,
    mode: &FlightModeProfile,
) -> ControlInputs {
    let x = if stick.x.abs() > control.deadzone {
        stick.x
    } else {
        0.0
    };
    let y = if stick.y.abs() > control.deadzone {
        stick.y
    } else {
        0.0
    };

    let thrust = y.max(0.0) * control.sensitivity;
    let direction = Vector2::new(
        x * control.sensitivity,
        // Negative y deflection steers downward
        -y.min(0.0) * control.sensitivity,
    );

    ControlInputs {
        thrust: thrust * mode.thrust_multiplier,
        direction: direction * mode.response_multiplier,
        boost: stick.boost,
        brake: y < -0.8,
        roll: x,
        precision: control.mode == FlightMode::Precision,
    }
}

/// Merge two control vectors so simultaneous keyboard and touch input never
/// cancel intent: thrust takes the max, directions and roll add, flags OR.
/// Direction components may leave [-1, 1] here; the integrator re-clamps.
pub fn combine(a: &ControlInputs, b: &ControlInputs) -> ControlInputs {
    ControlInputs {
        thrust: a.thrust.max(b.thrust),
        direction: a.direction + b.direction,
        boost: a.boost || b.boost,
        brake: a.brake || b.brake,
        roll: a.roll + b.roll,
        precision: a.precision || b.precision,
    }
}

/// Detect a barrel-roll trigger: a large roll reversal within one tick while
/// the input is hard over, outside the cooldown window. The cooldown stamp is
/// taken at trigger time.
pub fn detect_barrel_roll(
    roll: f64,
    control: &mut ControlState,
    config: &BarrelRollConfig,
    now: f64,
) -> bool {
    if now - control.barrel_roll_cooldown < config.cooldown {
        return false;
    }

    let roll_change = (roll - control.roll_state).abs();
    if roll_change > config.trigger_delta && roll.abs() > config.trigger_magnitude {
        control.barrel_roll_cooldown = now;
        control.roll_state = roll;
        return true;
    }

    control.roll_state = roll;
    false
}

/// Thrust input after brake/boost shaping: braking substitutes the air-brake
/// value, boosting scales it while the energy reserve allows.
pub fn effective_thrust(inputs: &ControlInputs, energy: f64, control: &ControlState) -> f64 {
    let mut thrust = inputs.thrust;
    if inputs.brake {
        thrust = control.brake_thrust;
    }
    if inputs.boost && energy > control.boost_min_energy {
        thrust *= control.boost_multiplier;
    }
    thrust
}

/// Refresh the keyboard buffer from bevy's input state. Headless consumers
/// (and tests) can instead write `KeyInputs` directly; the resource is left
/// untouched when no keyboard input source exists.
pub fn keyboard_input_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut keys: ResMut<KeyInputs>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };
    keys.up = keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::KeyW);
    keys.down = keyboard.pressed(KeyCode::ArrowDown) || keyboard.pressed(KeyCode::KeyS);
    keys.left = keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA);
    keys.right = keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD);
}

/// Rebuild the combined control vector from the raw input buffers.
pub fn control_normalization_system(
    keys: Res<KeyInputs>,
    stick: Res<JoystickInputs>,
    mut control: ResMut<ControlState>,
    mut combined: ResMut<CombinedControls>,
    clock: Res<SimClock>,
) {
    let mode = control.mode.profile();
    let keyboard = keyboard_inputs(&keys, &control, &mode);
    let joystick = joystick_inputs(&stick, &control, &mode);
    let merged = combine(&keyboard, &joystick);

    // A corrupt joystick sample (non-finite axes) is dropped wholesale
    // rather than fed to the integrator.
    combined.0 = match merged.validate() {
        Ok(()) => merged,
        Err(err) => {
            warn!("discarding control input: {err}");
            ControlInputs::default()
        }
    };

    let any_input = combined.0.thrust != 0.0
        || combined.0.direction != Vector2::zeros()
        || combined.0.brake
        || combined.0.boost;
    if any_input {
        control.last_input_time = clock.elapsed;
    }
}
