use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    application_point, CollisionVolume, ControlAxisConfig, ControlForceConfig, ControlState,
    Force, ForceCategory, PhysicsComponent, ReferenceFrame, VehicleConfig,
};
use crate::resources::AerodynamicsConfig;
use crate::utils::{axis_to_unit, lerp};

/// Body-frame point and force of one side of a control force pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForcePoint {
    pub point: Vector3<f64>,
    pub force: Vector3<f64>,
}

/// The two opposing force points of one control axis for a [-1, 1] input.
///
/// Point A sits at `point + offset_direction * d`, point B at `mirror_point - offset_direction * d`
/// with `d = lerp(min_offset, max_offset, (input + 1) / 2)`. A pushes along `force_direction`,
/// B the opposite way, so the pair adds torque but no net force.
pub fn axis_force_pair(axis: &ControlAxisConfig, input: f64) -> [ForcePoint; 2] {
    let d = lerp(axis.min_offset, axis.max_offset, axis_to_unit(input));
    let offset = axis.offset_direction.vector() * d;
    let force = axis.force_direction.vector() * axis.force;

    [
        ForcePoint {
            point: axis.point + offset,
            force,
        },
        ForcePoint {
            point: axis.mirror_point - offset,
            force: -force,
        },
    ]
}

/// All roll/pitch/yaw control force points, with application points resolved against the
/// collision volume when projection is requested.
pub fn calculate_control_forces(
    config: &ControlForceConfig,
    controls: &ControlState,
    collision: Option<&CollisionVolume>,
) -> Vec<ForcePoint> {
    let axes = [
        (config.roll.as_ref(), controls.roll),
        (config.pitch.as_ref(), controls.pitch),
        (config.yaw.as_ref(), controls.yaw),
    ];

    axes.into_iter()
        .filter_map(|(axis, input)| axis.map(|axis| axis_force_pair(axis, input)))
        .flatten()
        .map(|pair| ForcePoint {
            point: application_point(&pair.point, config.project_to_surface, collision),
            force: pair.force,
        })
        .collect()
}

pub fn control_force_system(
    mut query: Query<(&VehicleConfig, &ControlState, &mut PhysicsComponent)>,
    thresholds: Res<AerodynamicsConfig>,
) {
    for (config, controls, mut physics) in query.iter_mut() {
        physics.clear_category(&ForceCategory::Control);

        for pair in calculate_control_forces(
            &config.control_forces,
            controls,
            config.collision.as_ref(),
        ) {
            if pair.force.norm_squared() > thresholds.min_force_norm_squared {
                physics.add_force(Force {
                    vector: pair.force,
                    point: Some(pair.point),
                    frame: ReferenceFrame::Body,
                    category: ForceCategory::Control,
                });
            }
        }
    }
}
