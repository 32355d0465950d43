use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// How the vehicle is commanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    /// Stick and throttle lever; speed follows the throttle target.
    #[default]
    Cockpit,
    /// Stick plus accelerate/decelerate buttons; speed ramps while held and
    /// returns to the cruise speed otherwise.
    Buttons,
}

/// Boundary state written by input producers (cockpit props, buttons, the
/// keyboard fallback). Conditioned once at the start of the next frame.
///
/// Stick convention: `x` +1 commands a roll to the right, `y` +1 pulls the
/// nose up. Out-of-range writes are clamped rather than rejected, since
/// physical input devices report transient extremes.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct ControlInputs {
    pub mode: ControlMode,
    stick: Vector2<f64>,
    throttle: f64,
    /// Accelerate button held (buttons mode only)
    pub accel_held: bool,
    /// Decelerate button held (buttons mode only)
    pub decel_held: bool,
    stick_grasped: bool,
    throttle_grasped: bool,
}

impl Default for ControlInputs {
    fn default() -> Self {
        Self {
            mode: ControlMode::default(),
            stick: Vector2::zeros(),
            throttle: 0.5,
            accel_held: false,
            decel_held: false,
            stick_grasped: false,
            throttle_grasped: false,
        }
    }
}

impl ControlInputs {
    pub fn with_mode(mode: ControlMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Raw stick vector, magnitude at most 1
    pub fn stick(&self) -> Vector2<f64> {
        self.stick
    }

    /// Raw throttle in [0, 1]
    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    /// Write the stick vector, clamping its magnitude to 1.
    pub fn set_stick(&mut self, stick: Vector2<f64>) {
        let norm = stick.norm();
        self.stick = if norm > 1.0 { stick / norm } else { stick };
    }

    /// Write the throttle, clamped to [0, 1].
    pub fn set_throttle(&mut self, throttle: f64) {
        self.throttle = throttle.clamp(0.0, 1.0);
    }

    /// The stick prop has been grasped.
    pub fn grasp_stick(&mut self) {
        self.stick_grasped = true;
    }

    /// The stick prop has been released; it recenters immediately.
    pub fn release_stick(&mut self) {
        self.stick_grasped = false;
        self.stick = Vector2::zeros();
    }

    /// The throttle lever has been grasped.
    pub fn grasp_throttle(&mut self) {
        self.throttle_grasped = true;
    }

    /// The throttle lever has been released; it latches its last position.
    pub fn release_throttle(&mut self) {
        self.throttle_grasped = false;
    }

    pub fn is_stick_grasped(&self) -> bool {
        self.stick_grasped
    }

    pub fn is_throttle_grasped(&self) -> bool {
        self.throttle_grasped
    }
}

/// Marker for a vehicle driven by the assist systems. Deactivating stops
/// every per-frame update for that vehicle; state is left as-is.
#[derive(Component, Debug)]
pub struct FlightController {
    pub active: bool,
}

impl Default for FlightController {
    fn default() -> Self {
        Self { active: true }
    }
}

impl FlightController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled() -> Self {
        Self { active: false }
    }
}
