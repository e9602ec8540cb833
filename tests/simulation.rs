mod common;

use approx::assert_relative_eq;
use nalgebra::Vector2;
use skyglide::{
    CombinedControls, ControlInputs, FlightStage, JoystickInputs, KeyInputs, LevelConfig,
    SimCommand, SimConfig, SimPhase, StallProfile, WindField,
};

use common::{assert_state_valid, TestAppBuilder};

fn no_stall() -> StallProfile {
    StallProfile {
        min_flying_speed: 0.0,
        ..StallProfile::default()
    }
}

#[test]
fn gravity_pulls_the_craft_down_in_calm_air() {
    let mut app = TestAppBuilder::new()
        .with_wind(WindField::calm())
        .with_stall(no_stall())
        .build();
    app.start();

    let state = app.kinematics();
    // Launch speed is below the lift threshold, so the only vertical force
    // is gravity under the ocean biome's modifier.
    assert_relative_eq!(
        state.velocity.y,
        0.015 * 0.95 / 60.0,
        epsilon = 1e-12
    );
    assert!(state.velocity.x > 0.0 && state.velocity.x < 2.0);
}

#[test]
fn reaching_the_goal_completes_the_level() {
    let mut config = SimConfig::default();
    config.level = LevelConfig {
        goal_x: 10_000.0,
        start_world: Vector2::new(9_990.0, 300.0),
        ..LevelConfig::default()
    };
    let mut app = TestAppBuilder::new()
        .with_config(config)
        .with_wind(WindField::calm())
        .with_stall(no_stall())
        .build();
    app.start();

    // Forward speed 2 per reference frame covers the last 10 units quickly.
    app.run_steps(10);

    assert!(app.tracker().level_complete);
    assert_eq!(app.phase(), SimPhase::Complete);
    assert!(app.tracker().world_position.x >= 10_000.0);

    // The presentation readback publishes the completion frame even though
    // the run is no longer in the Running phase.
    assert!(app.telemetry().level_complete);
}

#[test]
fn telemetry_reports_the_final_frame_after_completion() {
    let mut config = SimConfig::default();
    config.level = LevelConfig {
        goal_x: 10_000.0,
        start_world: Vector2::new(9_990.0, 300.0),
        ..LevelConfig::default()
    };
    let mut app = TestAppBuilder::new()
        .with_config(config)
        .with_wind(WindField::calm())
        .with_stall(no_stall())
        .build();
    app.start();
    app.run_steps(10);
    assert_eq!(app.phase(), SimPhase::Complete);

    let telemetry = app.telemetry();
    assert!(telemetry.level_complete);
    assert_relative_eq!(telemetry.distance, app.tracker().distance);
}

#[test]
fn camera_waits_for_the_screen_trigger_column() {
    let mut app = TestAppBuilder::new()
        .with_wind(WindField::calm())
        .with_stall(no_stall())
        .build();
    app.start();

    // Cruising forward moves the world, not the screen column, so the
    // camera must hold still.
    app.run_steps(600);
    assert!(app.tracker().world_position.x > 1_000.0);
    assert_relative_eq!(app.tracker().camera_offset.x, 0.0);
    assert_relative_eq!(app.tracker().screen_position.x, 100.0);

    // Steering right walks the screen column past the trigger; the craft
    // gets pinned there and the camera starts absorbing forward motion.
    app.set_keys(KeyInputs {
        right: true,
        ..Default::default()
    });
    app.run_steps(60);
    assert_relative_eq!(app.tracker().screen_position.x, 350.0);
    assert!(app.tracker().camera_offset.x > 0.0);
}

#[test]
fn corrupt_joystick_samples_are_discarded() {
    let mut app = TestAppBuilder::new()
        .with_wind(WindField::calm())
        .with_stall(no_stall())
        .build();
    app.start();
    app.set_joystick(JoystickInputs {
        x: f64::INFINITY,
        y: f64::NAN,
        boost: false,
    });
    app.run_steps(10);

    let combined = app
        .app
        .world()
        .resource::<CombinedControls>()
        .0
        .clone();
    assert_eq!(combined, ControlInputs::default());
    assert_state_valid(&app.kinematics());
}

#[test]
fn velocity_and_energy_stay_bounded_under_held_input() {
    let mut app = TestAppBuilder::new().with_stall(no_stall()).build();
    app.start();
    app.set_keys(KeyInputs {
        up: true,
        right: true,
        ..Default::default()
    });

    for _ in 0..600 {
        app.run_steps(1);
        let state = app.kinematics();
        assert_state_valid(&state);
        assert!(state.velocity.x.abs() <= 20.0);
        assert!(state.velocity.y.abs() <= 12.0);
    }
}

#[test]
fn launching_below_flying_speed_stalls() {
    let mut app = TestAppBuilder::new().with_wind(WindField::calm()).build();
    app.start();

    // Launch speed 2 is under the default minimum flying speed of 3.
    assert!(app.telemetry().stalled);
    assert_eq!(app.flight_state().stage, FlightStage::Stalled);
}

#[test]
fn hard_roll_reversal_triggers_a_barrel_roll() {
    let mut app = TestAppBuilder::new()
        .with_wind(WindField::calm())
        .with_stall(no_stall())
        .build();
    app.start();

    app.set_joystick(JoystickInputs {
        x: -1.0,
        y: 0.0,
        boost: false,
    });
    app.run_steps(1);
    app.set_joystick(JoystickInputs {
        x: 1.0,
        y: 0.0,
        boost: false,
    });
    app.run_steps(1);

    assert!(app.telemetry().barrel_rolling);

    // A full turn at 6 rad/s takes just over a second of simulated time.
    app.set_joystick(JoystickInputs::default());
    app.run_steps(70);
    assert!(!app.telemetry().barrel_rolling);
    assert_eq!(app.flight_state().stage, FlightStage::Flying);
}

#[test]
fn distance_never_decreases_when_flying_backwards() {
    let mut app = TestAppBuilder::new()
        .with_wind(WindField::calm())
        .with_stall(no_stall())
        .build();
    app.start();
    app.run_steps(20);

    let before = app.tracker();
    app.set_velocity(Vector2::new(-5.0, 0.0));
    app.run_steps(20);

    let after = app.tracker();
    assert!(after.distance >= before.distance);
    assert!(after.world_position.x < before.world_position.x);
}

#[test]
fn reset_restores_the_starting_state() {
    let mut app = TestAppBuilder::new().with_stall(no_stall()).build();
    app.start();
    app.set_keys(KeyInputs {
        up: true,
        ..Default::default()
    });
    app.run_steps(120);
    assert!(app.tracker().world_position.x > 100.0);

    app.send(SimCommand::Reset);
    app.run_steps(1);

    assert_eq!(app.phase(), SimPhase::Ready);
    let tracker = app.tracker();
    assert_relative_eq!(tracker.world_position.x, 100.0);
    assert_relative_eq!(tracker.distance, 0.0);
    let state = app.kinematics();
    assert_relative_eq!(state.velocity.x, 2.0);
    assert_relative_eq!(state.energy, 100.0);
}

#[test]
fn boost_drains_more_energy_than_cruise() {
    let mut cruise = TestAppBuilder::new()
        .with_wind(WindField::calm())
        .with_stall(no_stall())
        .build();
    cruise.start();
    cruise.set_keys(KeyInputs {
        up: true,
        ..Default::default()
    });
    cruise.run_steps(120);

    let mut boosted = TestAppBuilder::new()
        .with_wind(WindField::calm())
        .with_stall(no_stall())
        .build();
    boosted.start();
    boosted.set_keys(KeyInputs {
        up: true,
        right: true,
        ..Default::default()
    });
    boosted.run_steps(120);

    assert!(boosted.kinematics().energy < cruise.kinematics().energy);
}
