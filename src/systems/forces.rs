use nalgebra::Vector2;
use rand::Rng;

use crate::resources::config::profile::FlightProfile;
use crate::resources::environment::wind::WindField;

/// Scales the quadratic force terms into acceleration units.
pub const FORCE_SCALE: f64 = 0.001;

/// Lift magnitude at the given airspeed. Zero below the stall speed, then
/// quadratic in speed with no upper cap; callers clamp through the velocity
/// limits instead.
pub fn lift(speed: f64, profile: &FlightProfile) -> f64 {
    if speed < profile.stall_speed {
        return 0.0;
    }
    profile.lift_coefficient * profile.air_density * speed * speed * FORCE_SCALE
}

/// Drag vector opposing the current velocity. Zero at zero speed, which is
/// the only place the direction would be undefined.
pub fn drag(velocity: &Vector2<f64>, profile: &FlightProfile) -> Vector2<f64> {
    let speed = velocity.norm();
    if speed == 0.0 {
        return Vector2::zeros();
    }
    let magnitude = profile.drag_coefficient * profile.air_density * speed * speed * FORCE_SCALE;
    -(velocity / speed) * magnitude
}

/// Wind at a world position: base direction scaled by strength, one random
/// turbulence sample (full on x, halved on y), and every gust whose band
/// contains the position, weighted linearly toward the gust center.
///
/// The generator is injected so a seeded stream replays the same turbulence;
/// a turbulence of zero disables the random term entirely.
pub fn wind<R: Rng>(position: &Vector2<f64>, field: &WindField, rng: &mut R) -> Vector2<f64> {
    let mut effect = field.direction * field.strength;

    let turbulence = (rng.gen::<f64>() - 0.5) * field.turbulence;
    effect.x += turbulence;
    effect.y += turbulence * 0.5;

    for gust in &field.gusts {
        let distance = (position.x - gust.x).abs();
        if distance < gust.width {
            effect.x += (1.0 - distance / gust.width) * gust.strength;
        }
    }

    effect
}
