mod air_data;
mod control_surfaces;
mod damping;
mod force_calculator;
mod probe_drag;
mod stability;

pub use air_data::air_data_system;
pub use control_surfaces::{control_surface_system, update_control_surfaces};
pub use damping::calculate_damping_moment;
pub use force_calculator::{
    aero_force_system, calculate_lift, calculate_parasitic_drag, lift_coefficient, LiftForces,
};
pub use probe_drag::{
    calculate_probe_drag, probe_drag_category, probe_drag_system, ProbeDragOutput,
};
pub use stability::calculate_stability_moment;
