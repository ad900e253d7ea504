mod actuators;
mod autopilot;

pub use actuators::{actuator_system, update_actuators};
pub use autopilot::{apply_attitude_hold, attitude_hold_system};
