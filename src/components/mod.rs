pub mod cockpit;
pub mod config;
pub mod input;
pub mod rigid_body;
pub mod spatial;
pub mod speed;

pub use cockpit::{ControlInputs, ControlMode, FlightController};
pub use config::{
    AttitudeConfig, BodyConfig, ConfigError, FlightConfig, InputConfig, LiftConfig, SpeedConfig,
};
pub use input::ControlChannels;
pub use rigid_body::RigidBody;
pub use spatial::SpatialComponent;
pub use speed::SpeedState;
