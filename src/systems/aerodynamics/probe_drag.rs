use bevy::prelude::*;
use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::components::{
    AirData, Force, ForceCategory, PhysicsComponent, ProbeDragConfig, ProbeDragState,
    ReferenceFrame, SpatialComponent, VehicleConfig,
};
use crate::resources::{AerodynamicsConfig, PhysicsConfig};
use crate::utils::angle_between;

/// Force category published by the probe drag system
pub fn probe_drag_category() -> ForceCategory {
    ForceCategory::Custom("probe_drag".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeDragOutput {
    /// Penalty drag in the world frame (N)
    pub force: Vector3<f64>,
    /// Angle between the nose and the smoothed heading (rad)
    pub offbore: f64,
    pub linear_damping: Option<f64>,
}

/// Off-axis penalty drag `-v̂ q A Cd (1 - cos offbore)`.
///
/// Updates the smoothed heading in `state`. Returns `None` below the minimum airspeed, where
/// the heading is left untouched.
pub fn calculate_probe_drag(
    config: &ProbeDragConfig,
    air_data: &AirData,
    spatial: &SpatialComponent,
    state: &mut ProbeDragState,
    dt: f64,
    thresholds: &AerodynamicsConfig,
) -> Option<ProbeDragOutput> {
    if air_data.airspeed < thresholds.min_airspeed_threshold {
        return None;
    }

    let heading = state.update(&air_data.velocity_direction, config.smoothing, dt);
    let offbore = angle_between(&spatial.forward(), &heading);
    state.offbore = offbore;

    let magnitude = air_data.dynamic_pressure * config.area * config.c_d * (1.0 - offbore.cos());

    Some(ProbeDragOutput {
        force: -air_data.velocity_direction * magnitude,
        offbore,
        linear_damping: config
            .linear_damping
            .map(|d| d.base + d.offbore_gain * offbore / PI),
    })
}

pub fn probe_drag_system(
    mut query: Query<(
        &VehicleConfig,
        &AirData,
        &SpatialComponent,
        &mut ProbeDragState,
        &mut PhysicsComponent,
    )>,
    physics_config: Res<PhysicsConfig>,
    thresholds: Res<AerodynamicsConfig>,
) {
    let category = probe_drag_category();
    for (config, air_data, spatial, mut state, mut physics) in query.iter_mut() {
        let Some(probe) = config.probe_drag.as_ref() else {
            continue;
        };
        physics.clear_category(&category);

        match calculate_probe_drag(
            probe,
            air_data,
            spatial,
            &mut state,
            physics_config.timestep,
            &thresholds,
        ) {
            Some(output) => {
                if output.force.norm_squared() > thresholds.min_force_norm_squared {
                    physics.add_force(Force {
                        vector: output.force,
                        point: Some(probe.point),
                        frame: ReferenceFrame::Inertial,
                        category: category.clone(),
                    });
                }
                physics.linear_damping_override = output.linear_damping;
            }
            None => {
                physics.linear_damping_override = probe.linear_damping.map(|d| d.base);
            }
        }
    }
}
