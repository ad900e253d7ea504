use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{
    ControlChannel, ControlState, EngineConfig, EngineState, EngineStates, Force, ForceCategory,
    PhysicsComponent, ReferenceFrame, SpatialComponent, VehicleConfig,
};
use crate::resources::AerodynamicsConfig;
use crate::utils::{axis_to_unit, deg_to_rad, lerp, KILONEWTON};

/// Thrust magnitude in newtons for a [-1, 1] throttle input
pub fn thrust_magnitude(engine: &EngineConfig, throttle: f64) -> f64 {
    let input = throttle.clamp(-1.0, 1.0);
    lerp(engine.min_thrust, engine.max_thrust, axis_to_unit(input)) * KILONEWTON
}

/// Thrust force of one engine in the world frame, applied at the engine position.
///
/// The push direction is rotated about the body pitch axis by the engine's current vector
/// angle. The vectoring input only moves that angle after the force is computed, so it
/// takes effect on the following tick. Engines whose push flags cancel out produce nothing.
pub fn calculate_thrust(
    engine: &EngineConfig,
    state: &mut EngineState,
    throttle: f64,
    vectoring: Option<f64>,
    spatial: &SpatialComponent,
) -> Option<Vector3<f64>> {
    let result = engine.push_direction().map(|push| {
        let thrust = thrust_magnitude(engine, throttle);
        let nozzle = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), deg_to_rad(state.vector_angle));
        let force = spatial.to_world(&(nozzle * push * thrust));
        state.thrust = thrust;
        state.thrust_vector = force;
        force
    });

    if result.is_none() {
        state.thrust = 0.0;
        state.thrust_vector = Vector3::zeros();
    }

    if let (Some(range), Some(input)) = (engine.vectoring, vectoring) {
        state.vector_angle = lerp(
            range.min_aoa,
            range.max_aoa,
            axis_to_unit(input.clamp(-1.0, 1.0)),
        );
    }

    result
}

/// System producing the propulsive forces of every engine.
pub fn propulsion_system(
    mut query: Query<(
        &VehicleConfig,
        &ControlState,
        &SpatialComponent,
        &mut EngineStates,
        &mut PhysicsComponent,
    )>,
    thresholds: Res<AerodynamicsConfig>,
) {
    for (config, controls, spatial, mut states, mut physics) in query.iter_mut() {
        physics.clear_category(&ForceCategory::Propulsive);

        for (index, (engine, state)) in config
            .engines
            .iter()
            .zip(states.engines.iter_mut())
            .enumerate()
        {
            let Some(throttle) = controls.get(ControlChannel::Throttle(index)) else {
                debug!("Engine '{}' has no throttle channel {}", engine.name, index);
                continue;
            };
            let vectoring = controls.get(ControlChannel::Vectoring(index));

            let Some(force) = calculate_thrust(engine, state, throttle, vectoring, spatial) else {
                debug!("Engine '{}' has no push direction", engine.name);
                continue;
            };

            if force.norm_squared() > thresholds.min_force_norm_squared {
                physics.add_force(Force {
                    vector: force,
                    point: Some(engine.position),
                    frame: ReferenceFrame::Inertial,
                    category: ForceCategory::Propulsive,
                });
            }
        }
    }
}
