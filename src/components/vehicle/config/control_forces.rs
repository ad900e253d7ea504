use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::LocalDirection;

/// Roll/pitch/yaw control force points
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControlForceConfig {
    #[serde(default)]
    pub roll: Option<ControlAxisConfig>,
    #[serde(default)]
    pub pitch: Option<ControlAxisConfig>,
    #[serde(default)]
    pub yaw: Option<ControlAxisConfig>,
    /// Apply forces at the nearest point on the collision volume
    #[serde(default)]
    pub project_to_surface: bool,
}

/// A pair of opposing force points driven by one control axis.
///
/// Point A slides along `offset_direction` by `d = lerp(min_offset, max_offset, (input+1)/2)`
/// and pushes along `force_direction`; point B slides by `-d` and pushes the opposite way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlAxisConfig {
    /// Rest position of point A in the body frame (m)
    pub point: Vector3<f64>,
    /// Rest position of the mirrored point B in the body frame (m)
    pub mirror_point: Vector3<f64>,
    pub offset_direction: LocalDirection,
    pub min_offset: f64,
    pub max_offset: f64,
    pub force_direction: LocalDirection,
    /// Force magnitude at each point (N)
    pub force: f64,
}

impl ControlAxisConfig {
    pub fn new(
        offset_direction: LocalDirection,
        offset: f64,
        force_direction: LocalDirection,
        force: f64,
    ) -> Self {
        Self {
            point: Vector3::zeros(),
            mirror_point: Vector3::zeros(),
            offset_direction,
            min_offset: -offset,
            max_offset: offset,
            force_direction,
            force,
        }
    }
}

impl ControlForceConfig {
    /// Right-wing-down roll, nose-up pitch and nose-right yaw for positive inputs
    pub fn standard(roll_force: f64, pitch_force: f64, yaw_force: f64, span: f64, length: f64) -> Self {
        Self {
            roll: Some(ControlAxisConfig::new(
                LocalDirection::Right,
                span / 2.0,
                LocalDirection::Down,
                roll_force,
            )),
            pitch: Some(ControlAxisConfig::new(
                LocalDirection::Forward,
                length / 2.0,
                LocalDirection::Up,
                pitch_force,
            )),
            yaw: Some(ControlAxisConfig::new(
                LocalDirection::Forward,
                length / 2.0,
                LocalDirection::Right,
                yaw_force,
            )),
            project_to_surface: false,
        }
    }
}
