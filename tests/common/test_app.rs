use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use aerobat::components::{ControlMode, FlightConfig};
use aerobat::plugins::{FlightAssistPlugin, RigidBodyPhysicsPlugin};
use aerobat::resources::PhysicsConfig;

/// Builder for a headless test application with one assisted vehicle.
pub struct TestAppBuilder {
    flight_config: FlightConfig,
    physics_config: PhysicsConfig,
    mode: ControlMode,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            flight_config: FlightConfig::default(),
            physics_config: PhysicsConfig::default(),
            mode: ControlMode::Cockpit,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flight_config(mut self, config: FlightConfig) -> Self {
        self.flight_config = config;
        self
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = config;
        self
    }

    pub fn with_mode(mut self, mode: ControlMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn build(self) -> TestApp {
        let timestep = self.physics_config.timestep;

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(RigidBodyPhysicsPlugin::with_config(self.physics_config))
            .add_plugins(FlightAssistPlugin::new(self.flight_config).with_mode(self.mode));

        // Advance time by exactly one fixed step per update, so every frame
        // runs one deterministic FixedUpdate tick.
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            timestep,
        )));

        // Initial update to run Startup and spawn the vehicle
        app.update();

        TestApp { app }
    }
}

/// Headless application wrapper mirroring the fixed-step frame loop.
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn query_single<T: Component + Clone>(&mut self) -> Option<T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok().cloned()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }
}
