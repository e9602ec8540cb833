use bevy::prelude::*;

use crate::components::{KinematicState, PlayerController};
use crate::resources::config::camera::{CameraConfig, LevelConfig};
use crate::resources::control::CombinedControls;
use crate::resources::world::{SimClock, SimPhase, WorldTracker};

/// Exponentially-smoothed camera follow toward the point that keeps the
/// craft at the trigger column. Compounds the per-frame smoothing factor
/// over the frames this step spans, so convergence never overshoots.
pub fn follow_camera(offset: f64, world_x: f64, camera: &CameraConfig, frames: f64) -> f64 {
    let target = world_x - camera.follow_trigger;
    let blend = 1.0 - (1.0 - camera.smoothing).powf(frames);
    offset + (target - offset) * blend
}

/// Lateral screen motion from steering input, clamped to the visible band.
pub fn steer_screen_x(screen_x: f64, steer: f64, camera: &CameraConfig, frames: f64) -> f64 {
    (screen_x + steer * camera.lateral_rate * frames).clamp(
        camera.screen_min_x,
        camera.viewport_width - camera.screen_right_margin,
    )
}

/// Advance the world position from the integrated velocity, project it into
/// screen space, move the camera, and track progress toward the goal.
pub fn world_projection_system(
    query: Query<&KinematicState, With<PlayerController>>,
    combined: Res<CombinedControls>,
    camera: Res<CameraConfig>,
    level: Res<LevelConfig>,
    clock: Res<SimClock>,
    mut tracker: ResMut<WorldTracker>,
    mut phase: ResMut<SimPhase>,
) {
    if clock.dt <= 0.0 {
        return;
    }
    let Ok(kinematics) = query.get_single() else {
        return;
    };

    let frames = clock.frames();
    tracker.world_position += kinematics.velocity * frames;

    tracker.screen_position.x = steer_screen_x(
        tracker.screen_position.x,
        combined.0.direction.x,
        &camera,
        frames,
    );
    tracker.screen_position.y = tracker.world_position.y;

    // Once the craft's screen x passes the trigger column the camera
    // absorbs forward motion and the craft is pinned there.
    if tracker.screen_position.x > camera.follow_trigger {
        tracker.camera_offset.x = follow_camera(
            tracker.camera_offset.x,
            tracker.world_position.x,
            &camera,
            frames,
        );
        tracker.screen_position.x = tracker.screen_position.x.min(camera.follow_trigger);
    }

    // Progress only counts forward motion; flying backwards never refunds it.
    let travelled = tracker.world_position.x - level.start_world.x;
    tracker.distance = tracker.distance.max(travelled);

    if !tracker.level_complete && tracker.world_position.x >= level.goal_x {
        tracker.level_complete = true;
        *phase = SimPhase::Complete;
        info!(distance = tracker.distance, "level complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn camera_converges_without_overshoot() {
        let camera = CameraConfig::default();
        let world_x = 1000.0;
        let target = world_x - camera.follow_trigger;

        let mut offset = 0.0;
        for _ in 0..500 {
            let next = follow_camera(offset, world_x, &camera, 1.0);
            assert!(next >= offset);
            assert!(next <= target);
            offset = next;
        }
        assert_relative_eq!(offset, target, epsilon = 1e-6);
    }

    #[test]
    fn compounded_smoothing_matches_two_single_frames() {
        let camera = CameraConfig::default();
        let stepped = follow_camera(follow_camera(0.0, 1000.0, &camera, 1.0), 1000.0, &camera, 1.0);
        let combined = follow_camera(0.0, 1000.0, &camera, 2.0);
        assert_relative_eq!(stepped, combined, epsilon = 1e-9);
    }

    #[test]
    fn screen_x_stays_inside_the_visible_band() {
        let camera = CameraConfig::default();
        let mut x = 400.0;
        for _ in 0..100 {
            x = steer_screen_x(x, 1.0, &camera, 1.0);
        }
        assert_relative_eq!(x, camera.viewport_width - camera.screen_right_margin);

        for _ in 0..300 {
            x = steer_screen_x(x, -1.0, &camera, 1.0);
        }
        assert_relative_eq!(x, camera.screen_min_x);
    }
}
