use bevy::prelude::*;
use nalgebra::Vector3;
use std::f64::consts::FRAC_PI_4;

use crate::components::{
    AttitudeConfig, ControlChannels, FlightConfig, FlightController, RigidBody, SpatialComponent,
};
use crate::utils::{bank_angle, clamp01, elevation_angle, rad_to_deg, world_up};

/// Pitch error beyond this no longer grows the leveling torque [rad]
const PITCH_LEVEL_CLAMP: f64 = FRAC_PI_4;

/// The attitude controller: five additive torque contributions summed into
/// one body-frame torque and accumulated once per fixed step.
///
/// 1. Control torque from the smoothed stick, faded by control authority
///    (`speed / control_speed_ref`) so a slow vehicle cannot be tumbled.
/// 2. Pitch-level correction pulling the nose toward the horizon.
/// 3. Per-axis angular rate damping.
/// 4. Wings-level restoring torque from the bank angle.
/// 5. Upright assist spring toward world up, faded while the player is
///    deliberately steering.
///
/// A soft roll clamp adds a corrective torque proportional to the bank
/// excess beyond the configured limit; attitude is never written directly.
pub fn attitude_assist_system(
    mut query: Query<(
        &ControlChannels,
        &FlightConfig,
        &SpatialComponent,
        &mut RigidBody,
        &FlightController,
    )>,
) {
    for (channels, config, spatial, mut body, controller) in query.iter_mut() {
        if !controller.active {
            continue;
        }
        let mass = body.mass;
        if !(mass.is_finite() && mass > 0.0) {
            continue;
        }
        let torque = assist_torque(&config.attitude, spatial, channels, mass);
        body.apply_torque(torque);
    }
}

/// Computes the summed body-frame assist torque for one step [N·m].
pub fn assist_torque(
    config: &AttitudeConfig,
    spatial: &SpatialComponent,
    channels: &ControlChannels,
    mass: f64,
) -> Vector3<f64> {
    let forward = spatial.forward();
    let right = spatial.right();
    let omega = spatial.angular_velocity;

    let mut torque = Vector3::zeros();

    // control torque: stick.y pitches the nose up, stick.x rolls right
    let pitch_in = channels.stick.y.clamp(-1.0, 1.0);
    let roll_in = channels.stick.x.clamp(-1.0, 1.0);
    let speed = spatial.velocity.norm();
    let authority = clamp01(speed / config.control_speed_ref.max(f64::EPSILON));
    torque.y += pitch_in * config.pitch_power * authority;
    torque.x += roll_in * config.roll_power * authority;

    // nose-to-horizon correction, error clamped to +/-45 degrees
    let nose_up = elevation_angle(&forward).clamp(-PITCH_LEVEL_CLAMP, PITCH_LEVEL_CLAMP);
    torque.y -= nose_up * config.pitch_leveling * mass;

    // per-axis rate damping
    torque.x -= omega.x * config.roll_damp * mass;
    torque.y -= omega.y * config.pitch_damp * mass;
    torque.z -= omega.z * config.yaw_damp * mass;

    // wings-level restoring torque; knife-edge attitudes have no defined
    // bank and are left to the upright assist
    if let Some(bank) = bank_angle(&right, &forward) {
        torque.x -= bank * config.auto_level * mass;

        let bank_deg = rad_to_deg(bank);
        let excess = bank_deg.abs() - config.max_roll_degrees;
        if excess > 0.0 {
            torque.x -= bank_deg.signum() * excess * config.roll_clamp_gain;
        }
    }

    // upright assist, faded with deliberate input
    let assist_scale = 1.0 - clamp01(channels.stick.norm()) * config.assist_fade_with_input;
    let spring_world = spatial.up().cross(&world_up()) * (config.upright_strength * mass);
    let spring_body = spatial.attitude.inverse_transform_vector(&spring_world);
    let upright = spring_body - omega * config.upright_damping;
    torque + upright * assist_scale
}
