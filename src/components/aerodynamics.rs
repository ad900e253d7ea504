use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::components::vehicle::config::ControlSurfaceConfig;
use crate::components::SpatialComponent;
use crate::utils::{
    signed_angle, CHORD_SCALE_EXPONENT, EFFECTIVENESS_FALLOFF, EFFECTIVENESS_MIDPOINT,
    SEA_LEVEL_DENSITY,
};

/// Air data derived from the rigid-body snapshot at the start of a tick.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct AirData {
    /// Speed relative to still air (m/s).
    pub airspeed: f64,
    /// Unit velocity direction in world space, zero when stationary.
    pub velocity_direction: Vector3<f64>,
    /// Angle of attack (rad), positive with the nose above the flight path.
    pub alpha: f64,
    /// Sideslip (rad), positive with the nose right of the flight path.
    pub sideslip: f64,
    /// Bank angle (rad), positive with the right wing down.
    pub bank: f64,
    /// Dynamic pressure 0.5ρV² (Pa).
    pub dynamic_pressure: f64,
    /// Air density (kg/m³).
    pub density: f64,
}

impl Default for AirData {
    fn default() -> Self {
        Self {
            airspeed: 0.0,
            velocity_direction: Vector3::zeros(),
            alpha: 0.0,
            sideslip: 0.0,
            bank: 0.0,
            dynamic_pressure: 0.0,
            density: SEA_LEVEL_DENSITY,
        }
    }
}

impl AirData {
    pub fn calculate(spatial: &SpatialComponent, density: f64) -> Self {
        let airspeed = spatial.velocity.norm();
        let velocity_direction = spatial
            .velocity
            .try_normalize(1e-12)
            .unwrap_or_else(Vector3::zeros);

        let (alpha, sideslip) = if airspeed > 0.0 {
            (
                signed_angle(&velocity_direction, &spatial.forward(), &spatial.right()),
                signed_angle(&spatial.forward(), &velocity_direction, &spatial.up()),
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            airspeed,
            velocity_direction,
            alpha,
            sideslip,
            bank: spatial.bank_angle(),
            dynamic_pressure: 0.5 * density * airspeed * airspeed,
            density,
        }
    }
}

/// Empirical flap-effectiveness model for a hinged surface of a given chord ratio.
///
/// `Δα_max` and the chord scale only depend on the chord ratio, so they are kept here and
/// recomputed when it changes; everything that depends on the deflection is evaluated on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlSurfaceEffectiveness {
    chord_ratio: f64,
    max_delta_alpha: f64,
    scale: f64,
}

impl ControlSurfaceEffectiveness {
    pub fn new(chord_ratio: f64) -> Self {
        Self {
            chord_ratio,
            max_delta_alpha: max_delta_alpha(chord_ratio),
            scale: chord_scale(chord_ratio),
        }
    }

    /// Returns `true` when the cached terms had to be recomputed.
    pub fn set_chord_ratio(&mut self, chord_ratio: f64) -> bool {
        if self.chord_ratio == chord_ratio {
            return false;
        }
        *self = Self::new(chord_ratio);
        true
    }

    pub fn chord_ratio(&self) -> f64 {
        self.chord_ratio
    }

    pub fn max_delta_alpha(&self) -> f64 {
        self.max_delta_alpha
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn lift_effectiveness(&self, deflection: f64) -> f64 {
        effectiveness(deflection) * self.scale
    }

    /// Change in effective angle of attack (rad) produced by `deflection` (rad)
    pub fn delta_alpha(&self, deflection: f64) -> f64 {
        self.max_delta_alpha * deflection.sin() * effectiveness(deflection) * self.scale
    }
}

/// Thin-airfoil flap theory: `1 - (θf - sin θf)/π` with `θf = acos(2c - 1)`
pub fn max_delta_alpha(chord_ratio: f64) -> f64 {
    let theta_f = (2.0 * chord_ratio - 1.0).clamp(-1.0, 1.0).acos();
    1.0 - (theta_f - theta_f.sin()) / PI
}

pub fn chord_scale(chord_ratio: f64) -> f64 {
    chord_ratio.max(0.0).powf(CHORD_SCALE_EXPONENT)
}

/// Falls from 1 at zero deflection towards 0.4 at large deflections (flow separation).
pub fn effectiveness(deflection: f64) -> f64 {
    let d4 = deflection.powi(4);
    EFFECTIVENESS_MIDPOINT
        + (1.0 - EFFECTIVENESS_MIDPOINT) * (EFFECTIVENESS_FALLOFF - d4) / (EFFECTIVENESS_FALLOFF + d4)
}

/// Per-tick state of one control surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlSurfaceState {
    pub name: String,
    pub model: ControlSurfaceEffectiveness,
    /// Current deflection (rad), after any reversal
    pub deflection: f64,
    pub delta_alpha: f64,
    pub lift_effectiveness: f64,
    /// Whether `delta_alpha` feeds the lifting body's angle of attack
    pub contributes_lift: bool,
}

impl ControlSurfaceState {
    pub fn new(config: &ControlSurfaceConfig) -> Self {
        let model = ControlSurfaceEffectiveness::new(config.chord_ratio);
        Self {
            name: config.name.clone(),
            model,
            deflection: 0.0,
            delta_alpha: 0.0,
            lift_effectiveness: model.lift_effectiveness(0.0),
            contributes_lift: config.lift,
        }
    }

    pub fn set_deflection(&mut self, deflection: f64) {
        self.deflection = deflection;
        self.delta_alpha = self.model.delta_alpha(deflection);
        self.lift_effectiveness = self.model.lift_effectiveness(deflection);
    }
}

/// All control surfaces of one vehicle, in configuration order
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControlSurfaces {
    pub surfaces: Vec<ControlSurfaceState>,
}

impl ControlSurfaces {
    pub fn new(configs: &[ControlSurfaceConfig]) -> Self {
        Self {
            surfaces: configs.iter().map(ControlSurfaceState::new).collect(),
        }
    }

    /// Sum of Δα over the surfaces that contribute to lift
    pub fn total_delta_alpha(&self) -> f64 {
        self.surfaces
            .iter()
            .filter(|s| s.contributes_lift)
            .map(|s| s.delta_alpha)
            .sum()
    }

    pub fn get(&self, name: &str) -> Option<&ControlSurfaceState> {
        self.surfaces.iter().find(|s| s.name == name)
    }
}
