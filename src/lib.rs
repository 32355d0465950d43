pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{ControlInputs, ControlMode, FlightConfig, SpeedState};
pub use plugins::{FlightAssistPlugin, FlightAssistSet, RigidBodyPhysicsPlugin};
pub use resources::PhysicsConfig;
