use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Off-axis "probe" drag: penalises flight with the nose away from the smoothed heading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeDragConfig {
    /// Application point in the body frame (m)
    pub point: Vector3<f64>,
    /// Reference area (m²)
    pub area: f64,
    pub c_d: f64,
    /// Heading smoothing rate (1/s); higher follows the velocity more closely
    pub smoothing: f64,
    #[serde(default)]
    pub linear_damping: Option<LinearDampingOverride>,
}

/// Linear damping handed to the integrator: `base + offbore_gain * offbore / π`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinearDampingOverride {
    pub base: f64,
    pub offbore_gain: f64,
}

impl Default for ProbeDragConfig {
    fn default() -> Self {
        Self {
            point: Vector3::new(1.0, 0.0, 0.0),
            area: 1.0,
            c_d: 0.5,
            smoothing: 4.0,
            linear_damping: None,
        }
    }
}
