mod mixer;

pub use mixer::{axis_force_pair, calculate_control_forces, control_force_system, ForcePoint};
