use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::LocalDirection;

/// Configuration for one engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub name: String,
    /// Thrust at full negative input (kN)
    pub min_thrust: f64,
    /// Thrust at full positive input (kN)
    pub max_thrust: f64,
    /// Directions the engine pushes along; summed and renormalized
    pub push_directions: Vec<LocalDirection>,
    /// Thrust point relative to the centre of mass in the body frame (m)
    pub position: Vector3<f64>,
    /// Optional pitch rotation range of the thrust point
    #[serde(default)]
    pub vectoring: Option<VectoringRange>,
}

/// Thrust-vectoring range in degrees about the thrust point's pitch axis
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VectoringRange {
    pub min_aoa: f64,
    pub max_aoa: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: "Generic Engine".to_string(),
            min_thrust: 0.0,
            max_thrust: 20.0,
            push_directions: vec![LocalDirection::Forward],
            position: Vector3::zeros(),
            vectoring: None,
        }
    }
}

impl EngineConfig {
    /// Unit push direction in the thrust point frame, or `None` when the flags cancel out
    pub fn push_direction(&self) -> Option<Vector3<f64>> {
        let sum: Vector3<f64> = self
            .push_directions
            .iter()
            .map(|d| d.vector())
            .fold(Vector3::zeros(), |acc, v| acc + v);
        sum.try_normalize(1e-9)
    }

    /// Left/right pair of `engine` placed `y_offset` either side of the centreline
    pub fn twin(engine: EngineConfig, y_offset: f64) -> Vec<EngineConfig> {
        let left = EngineConfig {
            name: format!("{} (left)", engine.name),
            position: Vector3::new(engine.position.x, -y_offset, engine.position.z),
            ..engine.clone()
        };
        let right = EngineConfig {
            name: format!("{} (right)", engine.name),
            position: Vector3::new(engine.position.x, y_offset, engine.position.z),
            ..engine
        };
        vec![left, right]
    }
}
