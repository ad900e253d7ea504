mod actuator;
mod aerodynamics;
mod collision;
mod controller;
mod physics;
mod spatial;
pub mod vehicle;

pub use actuator::{Actuator, ActuatorBank};
pub use aerodynamics::{
    chord_scale, effectiveness, max_delta_alpha, AirData, ControlSurfaceEffectiveness,
    ControlSurfaceState, ControlSurfaces,
};
pub use collision::{application_point, CollisionVolume};
pub use controller::{AttitudeHold, PidController};
pub use physics::{Force, ForceCategory, Moment, PhysicsComponent, ReferenceFrame};
pub use spatial::{world_up, LocalDirection, SpatialComponent};
pub use vehicle::*;
