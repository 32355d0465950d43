use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::GRAVITY;

/// Fixed-step physics parameters shared by every vehicle.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Fixed timestep [s]
    pub timestep: f64,
    /// Gravity in the world frame [m/s²]. NED: +z is down.
    pub gravity: Vector3<f64>,
    /// Cap on linear speed [m/s]
    pub max_velocity: f64,
    /// Cap on angular rate [rad/s]
    pub max_angular_velocity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 120.0, // 120 Hz default physics rate
            gravity: Vector3::new(0.0, 0.0, GRAVITY),
            max_velocity: 1000.0,
            max_angular_velocity: 6.0,
        }
    }
}
