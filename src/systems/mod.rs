pub mod attitude;
pub mod debug;
pub mod input;
pub mod physics;
pub mod speed;
pub mod velocity;

pub use attitude::{assist_torque, attitude_assist_system};
pub use debug::flight_log_system;
pub use input::{condition_inputs_system, condition_scalar, condition_stick, keyboard_input_system};
pub use physics::{integrate_step, rigid_body_integrator_system};
pub use speed::{button_step, speed_model_system, throttle_step};
pub use velocity::{aligned_velocity, simple_lift, velocity_alignment_system};
