use serde::{Deserialize, Serialize};

/// Stick and throttle conditioning parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Per-axis threshold below which raw stick input reads as zero.
    /// Applied independently to each axis so one noisy axis does not
    /// suppress the other.
    pub deadzone: f64,
    /// Exponential smoothing rate for the stick [1/s]
    pub stick_smoothing: f64,
    /// Exponential smoothing rate for the throttle [1/s]. The throttle is
    /// never deadzoned.
    pub throttle_smoothing: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            deadzone: 0.10,
            stick_smoothing: 10.0,
            throttle_smoothing: 15.0,
        }
    }
}
