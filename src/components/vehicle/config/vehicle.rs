use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::components::vehicle::config::{
    AeroCoefficients, ActuatorConfig, ControlChannel, ControlForceConfig, ControlSurfaceConfig,
    EngineConfig, ProbeDragConfig, VectoringRange,
};
use crate::components::vehicle::config::loader::load_vehicle_config;
use crate::components::{CollisionVolume, LocalDirection};
use crate::utils::{ConfigError, MAX_CHORD_RATIO};

/// Everything designer-authored about one vehicle.
///
/// Loaded once and treated as immutable for the lifetime of the simulation; every force
/// computation borrows the part it needs.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub name: String,
    pub aero: AeroCoefficients,
    #[serde(default)]
    pub actuators: Vec<ActuatorConfig>,
    #[serde(default)]
    pub control_surfaces: Vec<ControlSurfaceConfig>,
    #[serde(default)]
    pub engines: Vec<EngineConfig>,
    #[serde(default)]
    pub control_forces: ControlForceConfig,
    #[serde(default)]
    pub probe_drag: Option<ProbeDragConfig>,
    #[serde(default)]
    pub collision: Option<CollisionVolume>,
}

/// Programmed vehicle presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VehicleType {
    LightJet,
    Glider,
}

#[derive(Debug, Clone)]
pub enum VehicleSource {
    Programmed(VehicleType),
    File(PathBuf),
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self::light_jet()
    }
}

impl VehicleConfig {
    /// Creates a configuration from a preset or a YAML/JSON file.
    pub fn new(source: VehicleSource) -> Result<Self, ConfigError> {
        match source {
            VehicleSource::Programmed(VehicleType::LightJet) => Ok(Self::light_jet()),
            VehicleSource::Programmed(VehicleType::Glider) => Ok(Self::glider()),
            VehicleSource::File(path) => load_vehicle_config(path),
        }
    }

    /// Single-engine jet with thrust vectoring and rate-limited surfaces
    pub fn light_jet() -> Self {
        Self {
            name: "LightJet".to_string(),
            aero: AeroCoefficients::light_jet(),
            actuators: vec![
                ActuatorConfig::surface("aileron", ControlChannel::Roll, 2.0, 0.35),
                ActuatorConfig::surface("elevator", ControlChannel::Pitch, 1.5, 0.4),
                ActuatorConfig::surface("rudder", ControlChannel::Yaw, 1.5, 0.5),
                ActuatorConfig::smoothing("spool", ControlChannel::Throttle(0), 0.8),
                ActuatorConfig::smoothing("nozzle", ControlChannel::Vectoring(0), 2.0),
            ],
            control_surfaces: vec![
                ControlSurfaceConfig {
                    name: "aileron_left".to_string(),
                    chord_ratio: 0.2,
                    axis: LocalDirection::Back,
                    dimensions: Vector3::new(0.5, 2.4, 0.08),
                    actuator: "aileron".to_string(),
                    reversed: true,
                    lift: true,
                },
                ControlSurfaceConfig {
                    name: "aileron_right".to_string(),
                    chord_ratio: 0.2,
                    axis: LocalDirection::Back,
                    dimensions: Vector3::new(0.5, 2.4, 0.08),
                    actuator: "aileron".to_string(),
                    reversed: false,
                    lift: true,
                },
                ControlSurfaceConfig {
                    name: "elevator".to_string(),
                    chord_ratio: 0.3,
                    axis: LocalDirection::Back,
                    dimensions: Vector3::new(0.7, 4.0, 0.1),
                    actuator: "elevator".to_string(),
                    reversed: false,
                    lift: true,
                },
                ControlSurfaceConfig {
                    name: "rudder".to_string(),
                    chord_ratio: 0.25,
                    axis: LocalDirection::Back,
                    dimensions: Vector3::new(0.8, 0.15, 2.2),
                    actuator: "rudder".to_string(),
                    reversed: false,
                    lift: false,
                },
            ],
            engines: vec![EngineConfig {
                name: "F404".to_string(),
                min_thrust: 0.0,
                max_thrust: 98.0,
                push_directions: vec![LocalDirection::Forward],
                position: Vector3::new(-6.5, 0.0, 0.2),
                vectoring: Some(VectoringRange {
                    min_aoa: -20.0,
                    max_aoa: 20.0,
                }),
            }],
            control_forces: ControlForceConfig {
                project_to_surface: true,
                ..ControlForceConfig::standard(8_000.0, 12_000.0, 6_000.0, 9.0, 14.0)
            },
            probe_drag: None,
            collision: Some(CollisionVolume::Box {
                center: Vector3::zeros(),
                half_extents: Vector3::new(7.0, 4.5, 1.5),
            }),
        }
    }

    /// Unpowered sailplane with off-axis probe drag
    pub fn glider() -> Self {
        Self {
            name: "Glider".to_string(),
            aero: AeroCoefficients::glider(),
            actuators: vec![
                ActuatorConfig::surface("aileron", ControlChannel::Roll, 3.0, 0.3),
                ActuatorConfig::surface("elevator", ControlChannel::Pitch, 3.0, 0.35),
                ActuatorConfig::surface("rudder", ControlChannel::Yaw, 3.0, 0.45),
            ],
            control_surfaces: vec![ControlSurfaceConfig {
                name: "elevator".to_string(),
                chord_ratio: 0.35,
                axis: LocalDirection::Back,
                dimensions: Vector3::new(0.4, 2.8, 0.05),
                actuator: "elevator".to_string(),
                reversed: false,
                lift: true,
            }],
            engines: Vec::new(),
            control_forces: ControlForceConfig::standard(400.0, 600.0, 300.0, 15.0, 7.0),
            probe_drag: Some(ProbeDragConfig {
                point: Vector3::new(3.0, 0.0, 0.0),
                area: 0.6,
                c_d: 0.8,
                smoothing: 3.0,
                linear_damping: None,
            }),
            collision: Some(CollisionVolume::Capsule {
                center: Vector3::zeros(),
                half_length: 3.0,
                radius: 0.5,
            }),
        }
    }

    /// Checks the parts of the configuration the force model relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lift = &self.aero.lift;
        if lift.c_l_min > lift.c_l_max {
            return Err(ConfigError::ValidationError(format!(
                "{}: c_l_min ({}) exceeds c_l_max ({})",
                self.name, lift.c_l_min, lift.c_l_max
            )));
        }

        let mut names = HashSet::new();
        for actuator in &self.actuators {
            if !names.insert(actuator.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate actuator name '{}'",
                    actuator.name
                )));
            }
            if actuator.min > actuator.max {
                return Err(ConfigError::ValidationError(format!(
                    "actuator '{}' has min {} above max {}",
                    actuator.name, actuator.min, actuator.max
                )));
            }
            if actuator.rate.is_nan() || actuator.rate < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "actuator '{}' has negative rate {}",
                    actuator.name, actuator.rate
                )));
            }
        }

        for surface in &self.control_surfaces {
            if !(0.0..=MAX_CHORD_RATIO).contains(&surface.chord_ratio) {
                return Err(ConfigError::ValidationError(format!(
                    "control surface '{}' chord ratio {} outside [0, {}]",
                    surface.name, surface.chord_ratio, MAX_CHORD_RATIO
                )));
            }
        }

        for engine in &self.engines {
            if engine.min_thrust > engine.max_thrust {
                return Err(ConfigError::ValidationError(format!(
                    "engine '{}' has min thrust {} above max {}",
                    engine.name, engine.min_thrust, engine.max_thrust
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        VehicleConfig::light_jet().validate().unwrap();
        VehicleConfig::glider().validate().unwrap();
    }

    #[test]
    fn test_rejects_chord_ratio_out_of_range() {
        let mut config = VehicleConfig::light_jet();
        config.control_surfaces[0].chord_ratio = 0.6;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_actuators() {
        let mut config = VehicleConfig::glider();
        let duplicate = config.actuators[0].clone();
        config.actuators.push(duplicate);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_thrust_range() {
        let mut config = VehicleConfig::light_jet();
        config.engines[0].min_thrust = 120.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_programmed_source() {
        let config = VehicleConfig::new(VehicleSource::Programmed(VehicleType::Glider)).unwrap();
        assert_eq!(config.name, "Glider");
        assert!(config.engines.is_empty());
    }
}
