use bevy::prelude::*;
use nalgebra::UnitQuaternion;

use crate::components::{RigidBody, SpatialComponent};
use crate::resources::PhysicsConfig;

/// Integrates the accumulated forces and torques into the spatial state,
/// then clears the accumulators. Runs last in the fixed-step chain so every
/// contribution of the frame is included exactly once.
pub fn rigid_body_integrator_system(
    time: Res<Time>,
    config: Res<PhysicsConfig>,
    mut query: Query<(&mut RigidBody, &mut SpatialComponent)>,
) {
    let dt = time.delta_secs_f64();
    for (mut body, mut spatial) in query.iter_mut() {
        integrate_step(&mut body, &mut spatial, &config, dt);
    }
}

/// One semi-implicit step: body-frame Euler equations with the gyroscopic
/// coupling term, attitude composed from the new body rates, then the
/// linear state from forces plus gravity. Velocity magnitudes are capped
/// after integration.
pub fn integrate_step(
    body: &mut RigidBody,
    spatial: &mut SpatialComponent,
    config: &PhysicsConfig,
    dt: f64,
) {
    if !(body.mass.is_finite() && body.mass > 0.0) || !dt.is_finite() || dt <= 0.0 {
        // un-rigged or stalled frame: drop this step's inputs and move on
        body.clear_accumulators();
        return;
    }

    // angular state
    let omega = spatial.angular_velocity;
    let gyro = omega.cross(&(body.inertia * omega));
    let ang_accel = body.inertia_inv * (body.net_torque - gyro);
    let mut omega = omega + ang_accel * dt;
    let rate = omega.norm();
    if rate > config.max_angular_velocity {
        omega *= config.max_angular_velocity / rate;
    }
    spatial.angular_velocity = omega;

    if omega.norm() > 0.0 {
        // body rates compose on the right of the attitude
        let rotation = UnitQuaternion::from_scaled_axis(omega * dt);
        spatial.attitude = spatial.attitude * rotation;
        spatial.attitude =
            UnitQuaternion::from_quaternion(spatial.attitude.into_inner().normalize());
    }

    // linear state
    let accel = body.net_force / body.mass + config.gravity;
    spatial.velocity += accel * dt;
    let speed = spatial.velocity.norm();
    if speed > config.max_velocity {
        spatial.velocity *= config.max_velocity / speed;
    }
    spatial.position += spatial.velocity * dt;

    body.clear_accumulators();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Vector3};

    fn test_body() -> RigidBody {
        RigidBody::new(850.0, Matrix3::identity() * 1200.0)
    }

    fn ballistic_config() -> PhysicsConfig {
        PhysicsConfig {
            gravity: Vector3::zeros(),
            ..Default::default()
        }
    }

    #[test]
    fn test_constant_torque_spins_up() {
        let config = ballistic_config();
        let mut body = test_body();
        let mut spatial = SpatialComponent::default();

        body.apply_torque(Vector3::new(1200.0, 0.0, 0.0));
        integrate_step(&mut body, &mut spatial, &config, 0.01);

        // inertia 1200 about x: 1200 N·m for 10 ms gives 0.01 rad/s
        assert_relative_eq!(spatial.angular_velocity.x, 0.01, epsilon = 1e-9);
        // accumulators consumed
        assert_relative_eq!(body.net_torque.norm(), 0.0);
    }

    #[test]
    fn test_angular_velocity_is_capped() {
        let config = PhysicsConfig {
            max_angular_velocity: 6.0,
            ..ballistic_config()
        };
        let mut body = test_body();
        let mut spatial = SpatialComponent::default();

        for _ in 0..1000 {
            body.apply_torque(Vector3::new(1.0e6, 0.0, 0.0));
            integrate_step(&mut body, &mut spatial, &config, 0.01);
            assert!(spatial.angular_velocity.norm() <= config.max_angular_velocity + 1e-9);
        }
    }

    #[test]
    fn test_gravity_accelerates_fall() {
        let config = PhysicsConfig::default();
        let mut body = test_body();
        let mut spatial = SpatialComponent::default();

        integrate_step(&mut body, &mut spatial, &config, 0.01);
        // NED: gravity is +z (down)
        assert!(spatial.velocity.z > 0.0);
        assert!(spatial.position.z > 0.0);
    }

    #[test]
    fn test_pure_roll_rotates_attitude() {
        let config = ballistic_config();
        let mut body = test_body();
        let mut spatial = SpatialComponent {
            angular_velocity: Vector3::new(0.1, 0.0, 0.0),
            ..Default::default()
        };

        let steps = 100;
        for _ in 0..steps {
            integrate_step(&mut body, &mut spatial, &config, 0.01);
        }

        let (roll, pitch, yaw) = spatial.attitude.euler_angles();
        assert_relative_eq!(roll, 0.1, epsilon = 1e-6);
        assert_relative_eq!(pitch, 0.0, epsilon = 1e-9);
        assert_relative_eq!(yaw, 0.0, epsilon = 1e-9);
        // quaternion stays normalized
        assert_relative_eq!(spatial.attitude.as_ref().norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_state_stays_finite() {
        let config = PhysicsConfig::default();
        let mut body = test_body();
        let mut spatial = SpatialComponent {
            velocity: Vector3::new(100.0, 10.0, 5.0),
            angular_velocity: Vector3::new(0.05, 0.1, -0.03),
            ..Default::default()
        };

        for _ in 0..1000 {
            body.apply_force(Vector3::new(1000.0, 500.0, -2000.0));
            body.apply_torque(Vector3::new(100.0, -50.0, 25.0));
            integrate_step(&mut body, &mut spatial, &config, 0.01);

            assert!(spatial.position.iter().all(|v| v.is_finite()));
            assert!(spatial.velocity.iter().all(|v| v.is_finite()));
            assert!(spatial.angular_velocity.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_degenerate_mass_skips_step() {
        let config = PhysicsConfig::default();
        let mut body = test_body();
        body.mass = 0.0;
        body.apply_force(Vector3::new(1000.0, 0.0, 0.0));
        let mut spatial = SpatialComponent::default();

        integrate_step(&mut body, &mut spatial, &config, 0.01);

        // no motion, inputs dropped
        assert_relative_eq!(spatial.velocity.norm(), 0.0);
        assert_relative_eq!(body.net_force.norm(), 0.0);
    }
}
