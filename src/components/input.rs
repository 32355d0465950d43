use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::ControlInputs;

/// Exponentially smoothed input channels, carried across frames for the
/// lifetime of the vehicle. Reset only when the vehicle is respawned.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControlChannels {
    /// Smoothed stick vector, after the per-axis deadzone
    pub stick: Vector2<f64>,
    /// Smoothed throttle in [0, 1]
    pub throttle: f64,
}

impl ControlChannels {
    /// Channels pre-converged onto the current raw inputs, so a freshly
    /// spawned vehicle does not sweep its controls from zero.
    pub fn primed(inputs: &ControlInputs) -> Self {
        Self {
            stick: inputs.stick(),
            throttle: inputs.throttle(),
        }
    }
}
