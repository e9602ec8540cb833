use bevy::prelude::*;
use nalgebra::Vector2;
use rand::Rng;

use crate::components::{FlightState, KinematicState, PlayerController};
use crate::resources::config::profile::{FlightProfile, StallProfile};
use crate::resources::control::{CombinedControls, ControlState};
use crate::resources::environment::wind::WindField;
use crate::resources::environment::{ActiveEnvironment, TurbulenceRng};
use crate::resources::world::{LastStep, SimClock, WorldTracker};
use crate::systems::forces;
use crate::systems::control::effective_thrust;

/// Weight at which wind feeds the acceleration, so gusts perturb rather than
/// overwhelm player control.
pub const WIND_DAMPING: f64 = 0.1;

/// Advance the kinematic state by one time increment.
///
/// Forces are recomputed from scratch: gravity (boosted while stalled), lift
/// (collapsed below stall speed and while stalled), thrust along the
/// commanded direction, quadratic drag, damped wind. Velocity is integrated
/// and hard-clamped per axis, energy is drained by thrust and trickle-charged
/// otherwise, and the acceleration accumulator is zeroed for the next tick.
///
/// Returns the net acceleration that was applied, captured before the reset.
#[allow(clippy::too_many_arguments)]
pub fn step_kinematics<R: Rng>(
    state: &mut KinematicState,
    direction: &Vector2<f64>,
    thrust_input: f64,
    dt: f64,
    profile: &FlightProfile,
    wind_field: &WindField,
    position: &Vector2<f64>,
    stalled: bool,
    stall: &StallProfile,
    rng: &mut R,
) -> Vector2<f64> {
    let speed = state.velocity.norm();
    let lift = if stalled {
        0.0
    } else {
        forces::lift(speed, profile)
    };
    let drag = forces::drag(&state.velocity, profile);
    let wind = forces::wind(position, wind_field, rng);

    // Gravity always applies; a stall makes the fall steeper.
    let gravity = if stalled {
        profile.gravity * stall.stall_gravity_boost
    } else {
        profile.gravity
    };
    state.acceleration.y = gravity;

    // Lift opposes gravity once above stall speed.
    if speed > profile.stall_speed {
        state.acceleration.y -= lift;
    }

    // Thrust along the commanded direction; combined inputs can leave
    // [-1, 1], so re-clamp here.
    let thrust_magnitude = (thrust_input * profile.thrust_power).min(profile.max_thrust);
    let direction = Vector2::new(direction.x.clamp(-1.0, 1.0), direction.y.clamp(-1.0, 1.0));
    state.acceleration += direction * thrust_magnitude;

    state.acceleration += drag;
    state.acceleration += wind * WIND_DAMPING;

    // Integrate, then clamp each axis to the symmetric bound.
    let net_acceleration = state.acceleration;
    state.velocity += state.acceleration * dt;
    state.velocity.x = state
        .velocity
        .x
        .clamp(-profile.max_velocity.x, profile.max_velocity.x);
    state.velocity.y = state
        .velocity
        .y
        .clamp(-profile.max_velocity.y, profile.max_velocity.y);

    // Energy: drained in proportion to thrust demand, slow regeneration
    // otherwise, always bounded.
    let consumption = thrust_input.abs() * profile.energy_drain;
    state.energy =
        (state.energy - consumption + profile.energy_regen).clamp(0.0, state.max_energy);

    state.lift = lift;
    state.drag = drag.norm();
    state.thrust = thrust_magnitude;
    state.air_resistance = drag.norm() + wind.x.abs() + wind.y.abs();

    state.acceleration = Vector2::zeros();
    net_acceleration
}

/// One simulation step per frame for the player entity.
pub fn physics_step_system(
    mut query: Query<(&mut KinematicState, &FlightState), With<PlayerController>>,
    combined: Res<CombinedControls>,
    control: Res<ControlState>,
    environment: Res<ActiveEnvironment>,
    stall: Res<StallProfile>,
    tracker: Res<WorldTracker>,
    clock: Res<SimClock>,
    mut rng: ResMut<TurbulenceRng>,
    mut last_step: ResMut<LastStep>,
) {
    if clock.dt <= 0.0 {
        return;
    }
    let Ok((mut state, flight)) = query.get_single_mut() else {
        return;
    };

    let thrust_input = effective_thrust(&combined.0, state.energy, &control);
    last_step.net_acceleration = step_kinematics(
        &mut state,
        &combined.0.direction,
        thrust_input,
        clock.dt,
        &environment.profile,
        &environment.wind,
        &tracker.world_position,
        flight.stalled(),
        &stall,
        &mut rng.0,
    );
}
