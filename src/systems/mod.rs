pub mod aerodynamics;
pub mod control_forces;
pub mod controls;
pub mod physics;
pub mod propulsion;

pub use aerodynamics::*;
pub use control_forces::*;
pub use controls::*;
pub use physics::*;
pub use propulsion::*;
