use nalgebra::{Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::LocalDirection;

/// A hinged control surface on the main lifting body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlSurfaceConfig {
    pub name: String,
    /// Fraction of the lifting surface's chord taken by the hinged part, in [0, 0.5]
    pub chord_ratio: f64,
    /// Local direction the surface faces (its forward axis)
    pub axis: LocalDirection,
    /// Bounding dimensions of the surface along body X, Y, Z (m)
    pub dimensions: Vector3<f64>,
    /// Actuator providing the deflection in radians
    pub actuator: String,
    /// Deflects opposite to the actuator (e.g. the left aileron)
    #[serde(default)]
    pub reversed: bool,
    /// Whether the surface's Δα is added to the lifting body's angle of attack
    #[serde(default = "contributes_by_default")]
    pub lift: bool,
}

fn contributes_by_default() -> bool {
    true
}

impl ControlSurfaceConfig {
    pub fn forward_axis(&self) -> Vector3<f64> {
        self.axis.vector()
    }

    /// Hinge axis: perpendicular to the forward axis, along whichever of the two remaining
    /// dimensions is larger. Ties go to the lower axis index.
    pub fn rotation_axis(&self) -> Unit<Vector3<f64>> {
        let forward = self.axis.axis_index();
        let (a, b) = match forward {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        let index = if self.dimensions[b] > self.dimensions[a] {
            b
        } else {
            a
        };
        Unit::new_unchecked(Vector3::ith(index, 1.0))
    }

    /// Local rotation of the surface about its hinge for a given deflection (rad)
    pub fn hinge_rotation(&self, deflection: f64) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&self.rotation_axis(), deflection)
    }
}
