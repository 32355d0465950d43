use bevy::prelude::*;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Mass properties and per-step force/torque accumulators of the controlled
/// body. The assist systems only ever write through the accumulators; motion
/// itself belongs to the integrator.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct RigidBody {
    /// Mass [kg]
    pub mass: f64,
    /// Inertia tensor in the body frame [kg·m²]
    pub inertia: Matrix3<f64>,
    /// Inverse inertia tensor
    pub inertia_inv: Matrix3<f64>,
    /// Net force accumulated for the current step, world frame [N]
    pub net_force: Vector3<f64>,
    /// Net torque accumulated for the current step, body frame [N·m]
    pub net_torque: Vector3<f64>,
}

impl RigidBody {
    pub fn new(mass: f64, inertia: Matrix3<f64>) -> Self {
        let inertia_inv = inertia.try_inverse().unwrap_or_else(|| {
            error!("Inertia matrix is uninvertable, defaulting to identity.");
            Matrix3::identity()
        });
        Self {
            mass,
            inertia,
            inertia_inv,
            net_force: Vector3::zeros(),
            net_torque: Vector3::zeros(),
        }
    }

    /// Accumulate a world-frame force for this step [N]
    pub fn apply_force(&mut self, force: Vector3<f64>) {
        self.net_force += force;
    }

    /// Accumulate a body-frame torque for this step [N·m]
    pub fn apply_torque(&mut self, torque: Vector3<f64>) {
        self.net_torque += torque;
    }

    /// Reset the per-step accumulators
    pub fn clear_accumulators(&mut self) {
        self.net_force = Vector3::zeros();
        self.net_torque = Vector3::zeros();
    }
}
