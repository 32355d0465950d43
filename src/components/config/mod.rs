mod attitude;
mod body;
mod input;
mod lift;
mod speed;

pub use attitude::AttitudeConfig;
pub use body::BodyConfig;
pub use input::InputConfig;
pub use lift::LiftConfig;
pub use speed::SpeedConfig;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid flight configuration: {0}")]
    ValidationError(String),
}

/// The complete tuning bundle for one vehicle: input conditioning, speed
/// envelope, attitude gains, lift, and mass properties. Attached to the
/// vehicle entity at spawn and read-only from then on.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub input: InputConfig,
    pub speed: SpeedConfig,
    pub attitude: AttitudeConfig,
    pub lift: LiftConfig,
    pub body: BodyConfig,
}

impl FlightConfig {
    /// Loads a tuning bundle from a YAML file. Missing fields fall back to
    /// the defaults, so a file only needs to name what it changes.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parses a tuning bundle from a YAML string.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: FlightConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values no amount of runtime clamping can make sense of.
    /// Recoverable oddities (an inverted speed envelope, an out-of-range
    /// base speed) are normalized at the point of use instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.input.deadzone) {
            return Err(ConfigError::ValidationError(format!(
                "deadzone must be in [0, 1), got {}",
                self.input.deadzone
            )));
        }
        if !(self.body.mass.is_finite() && self.body.mass > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "mass must be finite and positive, got {}",
                self.body.mass
            )));
        }
        let finite = [
            self.speed.base_speed,
            self.speed.min_speed,
            self.speed.max_speed,
            self.speed.throttle_response,
            self.speed.align_rate,
            self.input.stick_smoothing,
            self.input.throttle_smoothing,
            self.attitude.pitch_power,
            self.attitude.roll_power,
            self.attitude.max_roll_degrees,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValidationError(
                "tuning values must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
