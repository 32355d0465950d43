use bevy::prelude::*;

use crate::components::{
    ControlChannels, ControlInputs, ControlMode, FlightConfig, FlightController, SpatialComponent,
    SpeedState,
};
use crate::systems::{
    attitude_assist_system, condition_inputs_system, flight_log_system, keyboard_input_system,
    speed_model_system, velocity_alignment_system,
};

/// Fixed-step stages of the assist pipeline, run in declaration order.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightAssistSet {
    SpeedModel,
    Attitude,
    Alignment,
    Integration,
}

/// Spawns a stability-assisted vehicle and registers the per-frame control
/// pipeline: input conditioning on the variable-rate schedule, then the
/// speed model, attitude controller, velocity alignment, and integration on
/// the fixed-rate schedule, strictly in that order.
pub struct FlightAssistPlugin {
    config: FlightConfig,
    mode: ControlMode,
}

impl FlightAssistPlugin {
    pub fn new(config: FlightConfig) -> Self {
        Self {
            config,
            mode: ControlMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ControlMode) -> Self {
        self.mode = mode;
        self
    }

    /// Spawns the vehicle entity with the full component bundle.
    fn setup_vehicle(mut commands: Commands, config: FlightConfig, mode: ControlMode) {
        let inputs = ControlInputs::with_mode(mode);
        let channels = ControlChannels::primed(&inputs);
        let speed = SpeedState::new(&config.speed);
        let body = config.body.rigid_body();
        commands.spawn((
            config,
            inputs,
            channels,
            speed,
            body,
            SpatialComponent::default(),
            FlightController::new(),
            Name::new("FlightVehicle"),
        ));
    }
}

impl Plugin for FlightAssistPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        let mode = self.mode;

        app.configure_sets(
            FixedUpdate,
            (
                FlightAssistSet::SpeedModel,
                FlightAssistSet::Attitude,
                FlightAssistSet::Alignment,
                FlightAssistSet::Integration,
            )
                .chain(),
        );

        app.add_systems(
            Startup,
            move |commands: Commands| Self::setup_vehicle(commands, config.clone(), mode),
        );

        app.add_systems(
            Update,
            (keyboard_input_system, condition_inputs_system, flight_log_system).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                speed_model_system.in_set(FlightAssistSet::SpeedModel),
                attitude_assist_system.in_set(FlightAssistSet::Attitude),
                velocity_alignment_system.in_set(FlightAssistSet::Alignment),
            ),
        );
    }
}
