use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::config::SpeedConfig;
use crate::utils::inverse_lerp;

/// Commanded forward speed, carried across physics steps [m/s].
///
/// Held within the configured envelope by the speed model's clamped ramps.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpeedState {
    pub current: f64,
}

impl SpeedState {
    /// Initial speed: the cruise speed clamped into the envelope.
    pub fn new(config: &SpeedConfig) -> Self {
        let (lo, hi) = config.bounds();
        Self {
            current: config.base_speed.clamp(lo, hi),
        }
    }

    /// Position of the current speed within the envelope, in [0, 1].
    /// Presentation layers map this onto gauge needles.
    pub fn fraction(&self, config: &SpeedConfig) -> f64 {
        let (lo, hi) = config.bounds();
        inverse_lerp(lo, hi, self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_speed_clamped_into_envelope() {
        let config = SpeedConfig {
            base_speed: 100.0,
            min_speed: 5.0,
            max_speed: 80.0,
            ..Default::default()
        };
        assert_relative_eq!(SpeedState::new(&config).current, 80.0);
    }

    #[test]
    fn test_gauge_fraction() {
        let config = SpeedConfig::default();
        let state = SpeedState {
            current: (config.min_speed + config.max_speed) / 2.0,
        };
        assert_relative_eq!(state.fraction(&config), 0.5);
    }
}
