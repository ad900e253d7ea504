use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    application_point, AirData, ControlSurfaces, DragCoefficients, Force, ForceCategory,
    LiftCoefficients, Moment, PhysicsComponent, ReferenceFrame, SpatialComponent, VehicleConfig,
};
use crate::resources::AerodynamicsConfig;
use crate::systems::aerodynamics::{calculate_damping_moment, calculate_stability_moment};
use crate::utils::signed_square;

// --- Pure Calculation Logic ---

/// Lift and induced drag of the main lifting body, both in the world frame
#[derive(Debug, Clone, PartialEq)]
pub struct LiftForces {
    pub lift: Vector3<f64>,
    pub induced_drag: Vector3<f64>,
    pub c_l: f64,
}

/// Clamped lift coefficient at an effective angle of attack (rad)
pub fn lift_coefficient(coeffs: &LiftCoefficients, alpha: f64) -> f64 {
    (coeffs.c_l_0 + coeffs.c_l_alpha * alpha).clamp(coeffs.c_l_min, coeffs.c_l_max)
}

/// Lift along body up and induced drag against the flight path.
///
/// `delta_alpha` is the summed Δα of the control surfaces. Returns `None` below the
/// minimum airspeed. Negative lift coefficients produce no lift but still feed induced drag.
pub fn calculate_lift(
    coeffs: &LiftCoefficients,
    air_data: &AirData,
    spatial: &SpatialComponent,
    delta_alpha: f64,
    thresholds: &AerodynamicsConfig,
) -> Option<LiftForces> {
    if air_data.airspeed < thresholds.min_airspeed_threshold {
        return None;
    }

    let c_l = lift_coefficient(coeffs, air_data.alpha + delta_alpha);
    let q_s = air_data.dynamic_pressure * coeffs.wing_area;

    Some(LiftForces {
        lift: spatial.up() * q_s * c_l.max(0.0),
        induced_drag: -air_data.velocity_direction * q_s * coeffs.induced_drag_factor * c_l * c_l,
        c_l,
    })
}

/// Per-axis parasitic drag `-0.5ρ A Cd v|v|`, rotated to the world frame
pub fn calculate_parasitic_drag(
    coeffs: &DragCoefficients,
    spatial: &SpatialComponent,
    density: f64,
) -> Vector3<f64> {
    let velocity_body = spatial.velocity_body();
    let drag_body = -0.5
        * density
        * coeffs
            .reference_area
            .component_mul(&coeffs.c_d)
            .component_mul(&signed_square(&velocity_body));
    spatial.to_world(&drag_body) * coeffs.multiplier
}

/// System for calculating aerodynamic forces and moments acting on each vehicle.
/// Queries components, calls the pure calculation functions, replaces the vehicle's
/// aerodynamic contributions on the `PhysicsComponent`.
pub fn aero_force_system(
    mut query: Query<(
        &VehicleConfig,
        &AirData,
        &SpatialComponent,
        &ControlSurfaces,
        &mut PhysicsComponent,
    )>,
    thresholds: Res<AerodynamicsConfig>,
) {
    for (config, air_data, spatial, surfaces, mut physics) in query.iter_mut() {
        physics.clear_category(&ForceCategory::Aerodynamic);

        let coeffs = &config.aero;
        let mut forces = Vec::with_capacity(3);

        if let Some(lift) = calculate_lift(
            &coeffs.lift,
            air_data,
            spatial,
            surfaces.total_delta_alpha(),
            &thresholds,
        ) {
            let point = application_point(
                &coeffs.lift.point,
                coeffs.lift.project_to_surface,
                config.collision.as_ref(),
            );
            forces.push((lift.lift, Some(point)));
            forces.push((lift.induced_drag, None));
        }

        forces.push((
            calculate_parasitic_drag(&coeffs.drag, spatial, air_data.density),
            None,
        ));

        for (vector, point) in forces {
            if vector.norm_squared() > thresholds.min_force_norm_squared {
                physics.add_force(Force {
                    vector,
                    point,
                    frame: ReferenceFrame::Inertial,
                    category: ForceCategory::Aerodynamic,
                });
            }
        }

        let moments = [
            calculate_damping_moment(&coeffs.damping, spatial, &thresholds),
            calculate_stability_moment(&coeffs.stability, air_data, spatial),
        ];
        for vector in moments {
            if vector.norm_squared() > thresholds.min_force_norm_squared {
                physics.add_moment(Moment {
                    vector,
                    frame: ReferenceFrame::Inertial,
                    category: ForceCategory::Aerodynamic,
                });
            }
        }
    }
}
