use bevy::prelude::*;
use nalgebra::Vector2;

use crate::components::{
    ControlChannels, ControlInputs, ControlMode, FlightConfig, FlightController, InputConfig,
};
use crate::utils::smoothing_factor;

/// Keyboard fallback for vehicles in buttons mode: WASD maps onto the stick
/// (W pulls the nose up, D rolls right), R accelerates, F decelerates.
///
/// The keyboard resource only exists when an input backend is running;
/// headless apps skip this system without error.
pub fn keyboard_input_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut query: Query<(&mut ControlInputs, &FlightController)>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };
    let axis = |pos: KeyCode, neg: KeyCode| {
        (keyboard.pressed(pos) as i32 - keyboard.pressed(neg) as i32) as f64
    };
    for (mut inputs, controller) in query.iter_mut() {
        if !controller.active || inputs.mode != ControlMode::Buttons {
            continue;
        }
        let stick = Vector2::new(
            axis(KeyCode::KeyD, KeyCode::KeyA),
            axis(KeyCode::KeyW, KeyCode::KeyS),
        );
        inputs.set_stick(stick);
        inputs.accel_held = keyboard.pressed(KeyCode::KeyR);
        inputs.decel_held = keyboard.pressed(KeyCode::KeyF);
    }
}

/// Conditions the raw channels once per frame: per-axis deadzone on the
/// stick, then a frame-rate independent exponential low-pass on stick and
/// throttle with their own rate constants.
pub fn condition_inputs_system(
    time: Res<Time>,
    mut query: Query<(
        &ControlInputs,
        &FlightConfig,
        &mut ControlChannels,
        &FlightController,
    )>,
) {
    let dt = time.delta_secs_f64();
    for (inputs, config, mut channels, controller) in query.iter_mut() {
        if !controller.active {
            continue;
        }
        channels.stick = condition_stick(inputs.stick(), channels.stick, &config.input, dt);
        channels.throttle = condition_scalar(
            inputs.throttle(),
            channels.throttle,
            config.input.throttle_smoothing,
            dt,
        );
    }
}

/// Deadzone plus exponential smoothing of one stick sample. The deadzone is
/// per-axis, so one noisy axis does not suppress a deliberate input on the
/// other.
pub fn condition_stick(
    raw: Vector2<f64>,
    smoothed: Vector2<f64>,
    config: &InputConfig,
    dt: f64,
) -> Vector2<f64> {
    let dz = Vector2::new(
        apply_deadzone(raw.x, config.deadzone),
        apply_deadzone(raw.y, config.deadzone),
    );
    smoothed + (dz - smoothed) * smoothing_factor(config.stick_smoothing, dt)
}

/// Exponential smoothing of a scalar channel. Never deadzoned; a throttle
/// lever has no noise band to reject.
pub fn condition_scalar(raw: f64, smoothed: f64, rate: f64, dt: f64) -> f64 {
    smoothed + (raw - smoothed) * smoothing_factor(rate, dt)
}

#[inline]
fn apply_deadzone(value: f64, deadzone: f64) -> f64 {
    if value.abs() < deadzone {
        0.0
    } else {
        value
    }
}
