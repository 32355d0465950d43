use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::RigidBody;

/// Mass properties of the controlled body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Mass [kg]
    pub mass: f64,
    /// Principal moment of inertia about the roll axis [kg·m²]
    pub ixx: f64,
    /// Principal moment of inertia about the pitch axis [kg·m²]
    pub iyy: f64,
    /// Principal moment of inertia about the yaw axis [kg·m²]
    pub izz: f64,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            mass: 850.0,
            ixx: 1200.0,
            iyy: 1800.0,
            izz: 2400.0,
        }
    }
}

impl BodyConfig {
    pub fn inertia(&self) -> Matrix3<f64> {
        Matrix3::from_diagonal(&Vector3::new(self.ixx, self.iyy, self.izz))
    }

    pub fn rigid_body(&self) -> RigidBody {
        RigidBody::new(self.mass, self.inertia())
    }
}
