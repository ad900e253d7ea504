pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const KILONEWTON: f64 = 1000.0; // N/kN

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 120.0; // Fixed physics timestep

// Early-exit thresholds
pub const MIN_LIFT_SPEED: f64 = 0.1; // m/s
pub const MIN_ANGULAR_RATE_SQUARED: f64 = 1e-8; // (rad/s)^2
pub const MIN_FORCE_NORM_SQUARED: f64 = 1e-9;

// Control surface effectiveness curve
pub const EFFECTIVENESS_FALLOFF: f64 = 0.05;
pub const EFFECTIVENESS_MIDPOINT: f64 = 0.7;
pub const CHORD_SCALE_EXPONENT: f64 = 0.12;
pub const MAX_CHORD_RATIO: f64 = 0.5;
