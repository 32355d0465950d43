use bevy::prelude::*;

use crate::plugins::FlightAssistSet;
use crate::resources::PhysicsConfig;
use crate::systems::rigid_body_integrator_system;

/// Owns the fixed timestep and the rigid-body integration stage. Every
/// force or torque producer must run in an earlier [`FlightAssistSet`] so
/// its contribution lands in the same step.
pub struct RigidBodyPhysicsPlugin {
    config: PhysicsConfig,
}

impl Default for RigidBodyPhysicsPlugin {
    fn default() -> Self {
        Self {
            config: PhysicsConfig::default(),
        }
    }
}

impl RigidBodyPhysicsPlugin {
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for RigidBodyPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());
        app.insert_resource(Time::<Fixed>::from_seconds(self.config.timestep));
        app.add_systems(
            FixedUpdate,
            rigid_body_integrator_system.in_set(FlightAssistSet::Integration),
        );
    }
}
