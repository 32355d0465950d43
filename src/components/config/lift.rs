use serde::{Deserialize, Serialize};

/// Simplified lift: an upward force countering gravity in proportion to
/// forward speed. Cosmetic stabilization, not an aerodynamic model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftConfig {
    pub enabled: bool,
    /// Scale on the gravity-compensating force. 1.0 fully cancels gravity
    /// at and above the cruise speed.
    pub scale: f64,
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            scale: 1.0,
        }
    }
}
