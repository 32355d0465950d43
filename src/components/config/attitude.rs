use serde::{Deserialize, Serialize};

/// Gains of the attitude torque controller. All torque contributions are
/// additive and zero-centered at equilibrium; each is tunable on its own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AttitudeConfig {
    /// Pitch control torque at full stick and full authority [N·m]
    pub pitch_power: f64,
    /// Roll control torque at full stick and full authority [N·m]
    pub roll_power: f64,
    /// Speed at which the controls reach full authority [m/s]. Below it,
    /// authority fades linearly to zero.
    pub control_speed_ref: f64,
    /// Pitch rate damping, scaled by mass
    pub pitch_damp: f64,
    /// Roll rate damping, scaled by mass
    pub roll_damp: f64,
    /// Yaw rate damping, scaled by mass
    pub yaw_damp: f64,
    /// Strength of the passive wings-level torque, scaled by mass
    pub auto_level: f64,
    /// Strength of the nose-to-horizon torque, scaled by mass
    pub pitch_leveling: f64,
    /// Bank angle beyond which the soft roll clamp engages [deg]
    pub max_roll_degrees: f64,
    /// Clamp torque per degree of excess bank [N·m/deg]
    pub roll_clamp_gain: f64,
    /// Upright-assist spring strength, scaled by mass
    pub upright_strength: f64,
    /// Upright-assist rate damping
    pub upright_damping: f64,
    /// How much deliberate stick input fades the upright assist, in [0, 1].
    /// 0 keeps the assist at full strength under input; 1 removes it
    /// entirely at full deflection.
    pub assist_fade_with_input: f64,
}

impl Default for AttitudeConfig {
    fn default() -> Self {
        Self {
            pitch_power: 2200.0,
            roll_power: 1800.0,
            control_speed_ref: 20.0,
            pitch_damp: 0.30,
            roll_damp: 0.28,
            yaw_damp: 0.10,
            auto_level: 0.50,
            pitch_leveling: 0.7,
            max_roll_degrees: 45.0,
            roll_clamp_gain: 20.0,
            upright_strength: 8.0,
            upright_damping: 3.0,
            assist_fade_with_input: 0.6,
        }
    }
}
