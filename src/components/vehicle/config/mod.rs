mod actuator;
mod aero_coef;
mod control_forces;
mod control_surface;
mod engine;
pub mod loader;
mod probe_drag;
mod vehicle;

pub use actuator::{ActuatorConfig, ControlChannel};
pub use aero_coef::{
    AeroCoefficients, DampingCoefficients, DragCoefficients, LiftCoefficients,
    StabilityCoefficients,
};
pub use control_forces::{ControlAxisConfig, ControlForceConfig};
pub use control_surface::ControlSurfaceConfig;
pub use engine::{EngineConfig, VectoringRange};
pub use loader::load_vehicle_config;
pub use probe_drag::{LinearDampingOverride, ProbeDragConfig};
pub use vehicle::{VehicleConfig, VehicleSource, VehicleType};
