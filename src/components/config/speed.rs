use bevy::log::warn_once;
use serde::{Deserialize, Serialize};

/// Speed envelope and ramp rates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
    /// Cruise speed the vehicle returns to with no speed input [m/s]
    pub base_speed: f64,
    /// Lower bound of the speed envelope [m/s]
    pub min_speed: f64,
    /// Upper bound of the speed envelope [m/s]
    pub max_speed: f64,
    /// Ramp rate while the accelerate button is held [m/s²]
    pub accel_per_sec: f64,
    /// Ramp rate while the decelerate button is held [m/s²]
    pub decel_per_sec: f64,
    /// Rate of the return toward `base_speed` with no button held [m/s²]
    pub return_rate: f64,
    /// Rate at which the commanded speed chases the throttle target [m/s²]
    pub throttle_response: f64,
    /// Rate of the exponential blend of velocity onto the commanded
    /// direction [1/s]
    pub align_rate: f64,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            base_speed: 25.0,
            min_speed: 5.0,
            max_speed: 80.0,
            accel_per_sec: 15.0,
            decel_per_sec: 20.0,
            return_rate: 12.0,
            throttle_response: 25.0,
            align_rate: 9.0,
        }
    }
}

impl SpeedConfig {
    /// Speed bounds normalized so the low bound never exceeds the high one.
    pub fn bounds(&self) -> (f64, f64) {
        if self.min_speed <= self.max_speed {
            (self.min_speed, self.max_speed)
        } else {
            warn_once!(
                "Invalid speed envelope: min_speed ({}) > max_speed ({}). Swapping values.",
                self.min_speed,
                self.max_speed
            );
            (self.max_speed, self.min_speed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inverted_bounds_are_swapped() {
        let config = SpeedConfig {
            min_speed: 80.0,
            max_speed: 5.0,
            ..Default::default()
        };
        let (lo, hi) = config.bounds();
        assert_relative_eq!(lo, 5.0);
        assert_relative_eq!(hi, 80.0);
    }
}
