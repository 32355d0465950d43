use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Component for storing spatial state of a vehicle.
///
/// World frame is NED (x north, y east, z down); altitude is `-position.z`.
/// Body frame is FRD (x forward, y right, z down).
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    /// Create a new spatial component with initial values
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    /// Create a new spatial component at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Body forward axis (+x) expressed in the world frame
    pub fn forward(&self) -> Vector3<f64> {
        self.attitude * Vector3::x()
    }

    /// Body right axis (+y) expressed in the world frame
    pub fn right(&self) -> Vector3<f64> {
        self.attitude * Vector3::y()
    }

    /// Body up axis (-z) expressed in the world frame
    pub fn up(&self) -> Vector3<f64> {
        self.attitude * -Vector3::z()
    }

    /// Angular velocity expressed in the world frame [rad/s]
    pub fn angular_velocity_world(&self) -> Vector3<f64> {
        self.attitude * self.angular_velocity
    }
}
