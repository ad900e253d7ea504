use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{ConfigError, DEFAULT_TIMESTEP, SEA_LEVEL_DENSITY};

/// Configuration shared by every force system
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Fixed tick length (s); must be strictly positive
    pub timestep: f64,
    /// Air density used for dynamic pressure (kg/m³)
    pub air_density: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP, // 120 Hz
            air_density: SEA_LEVEL_DENSITY,
        }
    }
}

impl PhysicsConfig {
    pub fn new(timestep: f64, air_density: f64) -> Result<Self, ConfigError> {
        let config = Self {
            timestep,
            air_density,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.timestep > 0.0 && self.timestep.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "timestep must be positive, got {}",
                self.timestep
            )));
        }
        if !(self.air_density >= 0.0 && self.air_density.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "air density must be non-negative, got {}",
                self.air_density
            )));
        }
        Ok(())
    }
}
