use bevy::prelude::*;

use crate::components::{
    ControlChannels, ControlInputs, ControlMode, FlightConfig, FlightController, SpeedConfig,
    SpeedState,
};
use crate::utils::{lerp, move_toward};

/// Advances the commanded speed once per fixed step.
///
/// Cockpit mode chases the throttle target at a bounded rate; buttons mode
/// ramps while a button is held and otherwise returns toward the cruise
/// speed. Holding both buttons cancels to the no-button branch, an explicit
/// policy rather than a fallthrough.
pub fn speed_model_system(
    time: Res<Time>,
    mut query: Query<(
        &ControlInputs,
        &ControlChannels,
        &FlightConfig,
        &mut SpeedState,
        &FlightController,
    )>,
) {
    let dt = time.delta_secs_f64();
    for (inputs, channels, config, mut state, controller) in query.iter_mut() {
        if !controller.active {
            continue;
        }
        state.current = match inputs.mode {
            ControlMode::Cockpit => {
                throttle_step(state.current, channels.throttle, &config.speed, dt)
            }
            ControlMode::Buttons => button_step(
                state.current,
                inputs.accel_held,
                inputs.decel_held,
                &config.speed,
                dt,
            ),
        };
    }
}

/// One step of the lever mode: rate-limited approach toward
/// `lerp(min, max, throttle)`, never an instantaneous jump.
pub fn throttle_step(current: f64, throttle: f64, config: &SpeedConfig, dt: f64) -> f64 {
    let (lo, hi) = config.bounds();
    let target = lerp(lo, hi, throttle);
    move_toward(current, target, config.throttle_response * dt)
}

/// One step of the button mode. Accel and decel ramps clamp at the envelope
/// edges; no input, or both buttons at once, returns toward the cruise speed.
pub fn button_step(
    current: f64,
    accel_held: bool,
    decel_held: bool,
    config: &SpeedConfig,
    dt: f64,
) -> f64 {
    let (lo, hi) = config.bounds();
    if accel_held && !decel_held {
        (current + config.accel_per_sec * dt).min(hi)
    } else if decel_held && !accel_held {
        (current - config.decel_per_sec * dt).max(lo)
    } else {
        move_toward(current, config.base_speed.clamp(lo, hi), config.return_rate * dt)
    }
}
