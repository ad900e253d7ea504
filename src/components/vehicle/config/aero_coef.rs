use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Scalar coefficient bank for the aerodynamic force model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AeroCoefficients {
    pub lift: LiftCoefficients,
    pub drag: DragCoefficients,
    pub damping: DampingCoefficients,
    pub stability: StabilityCoefficients,
}

/// Lift curve of the main lifting body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiftCoefficients {
    /// Wing reference area (m²).
    pub wing_area: f64,
    /// Lift coefficient at zero angle of attack.
    pub c_l_0: f64,
    /// Lift curve slope (per radian).
    pub c_l_alpha: f64,
    /// Lower clamp of the lift coefficient.
    pub c_l_min: f64,
    /// Upper clamp of the lift coefficient.
    pub c_l_max: f64,
    /// Induced drag factor, multiplied by CL².
    pub induced_drag_factor: f64,
    /// Where lift is applied, relative to the centre of mass in the body frame (m).
    pub point: Vector3<f64>,
    /// Apply lift at the nearest point on the collision volume instead of `point`.
    #[serde(default)]
    pub project_to_surface: bool,
}

/// Parasitic drag, independent per body axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragCoefficients {
    /// Reference area per body axis (m²)
    pub reference_area: Vector3<f64>,
    /// Drag coefficient per body axis
    pub c_d: Vector3<f64>,
    #[serde(default = "unit_multiplier")]
    pub multiplier: f64,
}

/// Combined linear and quadratic angular rate damping, per body axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DampingCoefficients {
    pub linear: Vector3<f64>,
    pub quadratic: Vector3<f64>,
    #[serde(default = "unit_multiplier")]
    pub multiplier: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityCoefficients {
    #[serde(default)]
    pub enabled: bool,
    /// Restoring torque per radian of angle of attack
    pub pitch: f64,
    /// Restoring torque per radian of sideslip
    pub yaw: f64,
    /// Restoring torque per radian of bank
    pub roll: f64,
    /// Airspeed at which stability reaches full strength (m/s)
    pub reference_speed: f64,
    /// Below this airspeed no stability torque is produced (m/s)
    pub min_speed: f64,
    /// Growth of the restoring torque with |angle|; zero keeps it linear
    #[serde(default)]
    pub nonlinearity: f64,
    #[serde(default = "unit_multiplier")]
    pub scale: f64,
}

fn unit_multiplier() -> f64 {
    1.0
}

impl Default for AeroCoefficients {
    fn default() -> Self {
        Self::light_jet()
    }
}

impl AeroCoefficients {
    /// Light twin-tail jet, ~10 t
    pub fn light_jet() -> Self {
        Self {
            lift: LiftCoefficients {
                wing_area: 46.5,
                c_l_0: 0.2,
                c_l_alpha: 5.5,
                c_l_min: -1.2,
                c_l_max: 1.6,
                induced_drag_factor: 0.045,
                point: Vector3::new(-0.3, 0.0, 0.0),
                project_to_surface: false,
            },
            drag: DragCoefficients {
                reference_area: Vector3::new(4.0, 22.0, 50.0),
                c_d: Vector3::new(0.025, 0.6, 1.1),
                multiplier: 1.0,
            },
            damping: DampingCoefficients {
                linear: Vector3::new(40_000.0, 90_000.0, 80_000.0),
                quadratic: Vector3::new(20_000.0, 60_000.0, 60_000.0),
                multiplier: 1.0,
            },
            stability: StabilityCoefficients {
                enabled: true,
                pitch: 150_000.0,
                yaw: 120_000.0,
                roll: 30_000.0,
                reference_speed: 120.0,
                min_speed: 5.0,
                nonlinearity: 0.5,
                scale: 1.0,
            },
        }
    }

    /// High aspect-ratio sailplane, ~500 kg
    pub fn glider() -> Self {
        Self {
            lift: LiftCoefficients {
                wing_area: 16.0,
                c_l_0: 0.3,
                c_l_alpha: 5.2,
                c_l_min: -0.8,
                c_l_max: 1.4,
                induced_drag_factor: 0.015,
                point: Vector3::new(-0.1, 0.0, 0.0),
                project_to_surface: false,
            },
            drag: DragCoefficients {
                reference_area: Vector3::new(0.8, 6.0, 16.0),
                c_d: Vector3::new(0.012, 0.5, 1.0),
                multiplier: 1.0,
            },
            damping: DampingCoefficients {
                linear: Vector3::new(1_500.0, 2_500.0, 2_000.0),
                quadratic: Vector3::new(800.0, 1_500.0, 1_500.0),
                multiplier: 1.0,
            },
            stability: StabilityCoefficients {
                enabled: true,
                pitch: 6_000.0,
                yaw: 4_000.0,
                roll: 1_500.0,
                reference_speed: 30.0,
                min_speed: 2.0,
                nonlinearity: 0.0,
                scale: 1.0,
            },
        }
    }
}
