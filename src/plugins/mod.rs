mod flight;
mod physics;

pub use flight::{FlightAssistPlugin, FlightAssistSet};
pub use physics::RigidBodyPhysicsPlugin;
