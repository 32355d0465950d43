use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    FlightConfig, FlightController, LiftConfig, RigidBody, SpatialComponent, SpeedConfig,
    SpeedState,
};
use crate::resources::PhysicsConfig;
use crate::utils::{clamp01, smoothing_factor, world_up};

/// Turns the commanded speed into actual translation: the velocity blends
/// exponentially onto `forward * current_speed`, independent of whatever net
/// force the torque stack produced this step. Optionally adds the simplified
/// lift force afterwards, from the post-blend speed.
pub fn velocity_alignment_system(
    time: Res<Time>,
    physics: Res<PhysicsConfig>,
    mut query: Query<(
        &FlightConfig,
        &SpeedState,
        &mut SpatialComponent,
        &mut RigidBody,
        &FlightController,
    )>,
) {
    let dt = time.delta_secs_f64();
    for (config, speed, mut spatial, mut body, controller) in query.iter_mut() {
        if !controller.active {
            continue;
        }
        spatial.velocity = aligned_velocity(
            spatial.velocity,
            spatial.forward(),
            speed.current,
            &config.speed,
            dt,
        );

        if config.lift.enabled {
            let lift = simple_lift(
                spatial.velocity.norm(),
                body.mass,
                physics.gravity.norm(),
                &config.speed,
                &config.lift,
            );
            body.apply_force(lift);
        }
    }
}

/// Exponential blend of the current velocity toward the commanded one.
/// A velocity already on target is a fixed point.
pub fn aligned_velocity(
    velocity: Vector3<f64>,
    forward: Vector3<f64>,
    current_speed: f64,
    config: &SpeedConfig,
    dt: f64,
) -> Vector3<f64> {
    let target = forward * current_speed;
    velocity + (target - velocity) * smoothing_factor(config.align_rate, dt)
}

/// Upward force countering gravity in proportion to forward speed [N].
/// Full compensation (times `scale`) at and above the cruise speed.
pub fn simple_lift(
    speed: f64,
    mass: f64,
    gravity: f64,
    speed_config: &SpeedConfig,
    lift: &LiftConfig,
) -> Vector3<f64> {
    let factor = clamp01(speed / speed_config.base_speed.max(f64::EPSILON));
    world_up() * (mass * gravity * factor * lift.scale)
}
