use bevy::prelude::*;
use skyglide::{
    CameraPlugin, ControlPlugin, EnvironmentPlugin, FlightPhysicsPlugin, FlightState,
    FlightTelemetry, JoystickInputs, KeyInputs, KinematicState, PlayerController, SimClock,
    SimCommand, SimConfig, SimPhase, StallProfile, WindField, WorldTracker,
};

/// Builder for a headless simulation app with customizable configuration.
pub struct TestAppBuilder {
    config: SimConfig,
    clock: SimClock,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimConfig::default(),
            clock: SimClock::fixed(1.0 / 60.0),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_wind(mut self, wind: WindField) -> Self {
        self.config.wind = wind;
        self
    }

    pub fn with_stall(mut self, stall: StallProfile) -> Self {
        self.config.stall = stall;
        self
    }

    pub fn with_time_step(mut self, dt: f64) -> Self {
        self.clock = SimClock::fixed(dt);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        let config = self.config;

        app.add_plugins(MinimalPlugins)
            .add_plugins(FlightPhysicsPlugin {
                clock: Some(self.clock),
                stall: Some(config.stall),
                seed: config.seed,
            })
            .add_plugins(ControlPlugin {
                state: Some(config.control),
                barrel_roll: Some(config.barrel_roll),
            })
            .add_plugins(EnvironmentPlugin {
                profile: Some(config.profile),
                wind: Some(config.wind),
                biomes: Some(config.biomes),
            })
            .add_plugins(CameraPlugin {
                camera: Some(config.camera),
                level: Some(config.level),
            });

        app.finish();
        app.cleanup();

        TestApp { app }
    }
}

pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Send a Start command and run one frame so it takes effect.
    pub fn start(&mut self) {
        self.send(SimCommand::Start);
        self.app.update();
    }

    pub fn send(&mut self, command: SimCommand) {
        self.app.world_mut().send_event(command);
    }

    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn set_keys(&mut self, keys: KeyInputs) {
        *self.app.world_mut().resource_mut::<KeyInputs>() = keys;
    }

    pub fn set_joystick(&mut self, stick: JoystickInputs) {
        *self.app.world_mut().resource_mut::<JoystickInputs>() = stick;
    }

    pub fn phase(&self) -> SimPhase {
        *self.app.world().resource::<SimPhase>()
    }

    pub fn tracker(&self) -> WorldTracker {
        self.app.world().resource::<WorldTracker>().clone()
    }

    pub fn telemetry(&self) -> FlightTelemetry {
        self.app.world().resource::<FlightTelemetry>().clone()
    }

    pub fn kinematics(&mut self) -> KinematicState {
        let mut query = self
            .app
            .world_mut()
            .query_filtered::<&KinematicState, With<PlayerController>>();
        query.single(self.app.world()).clone()
    }

    pub fn flight_state(&mut self) -> FlightState {
        let mut query = self
            .app
            .world_mut()
            .query_filtered::<&FlightState, With<PlayerController>>();
        query.single(self.app.world()).clone()
    }

    pub fn set_velocity(&mut self, velocity: nalgebra::Vector2<f64>) {
        let mut query = self
            .app
            .world_mut()
            .query_filtered::<&mut KinematicState, With<PlayerController>>();
        let world = self.app.world_mut();
        if let Ok(mut state) = query.get_single_mut(world) {
            state.velocity = velocity;
        }
    }
}

/// Assert the kinematic state contains no non-finite values.
#[track_caller]
pub fn assert_state_valid(state: &KinematicState) {
    assert!(state.velocity.x.is_finite(), "velocity x is not finite");
    assert!(state.velocity.y.is_finite(), "velocity y is not finite");
    assert!(state.energy.is_finite(), "energy is not finite");
    assert!(
        (0.0..=state.max_energy).contains(&state.energy),
        "energy out of bounds: {}",
        state.energy
    );
}
