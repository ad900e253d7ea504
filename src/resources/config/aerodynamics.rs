use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{MIN_ANGULAR_RATE_SQUARED, MIN_FORCE_NORM_SQUARED, MIN_LIFT_SPEED};

/// Early-exit thresholds of the aerodynamic force model
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct AerodynamicsConfig {
    /// Below this airspeed lift, induced drag and probe drag are skipped (m/s)
    pub min_airspeed_threshold: f64,
    /// Below this |ω|² no damping torque is produced ((rad/s)²)
    pub min_angular_rate_squared: f64,
    /// Contributions with a smaller squared norm are not published
    pub min_force_norm_squared: f64,
}

impl Default for AerodynamicsConfig {
    fn default() -> Self {
        Self {
            min_airspeed_threshold: MIN_LIFT_SPEED,
            min_angular_rate_squared: MIN_ANGULAR_RATE_SQUARED,
            min_force_norm_squared: MIN_FORCE_NORM_SQUARED,
        }
    }
}
