mod thrust;

pub use thrust::{calculate_thrust, propulsion_system, thrust_magnitude};
