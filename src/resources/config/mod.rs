pub mod aerodynamics;
pub mod physics;

pub use aerodynamics::AerodynamicsConfig;
pub use physics::PhysicsConfig;
