use crate::components::{Force, Moment, PhysicsComponent, ReferenceFrame, SpatialComponent};
use bevy::prelude::*;
use nalgebra::Vector3;

fn to_inertial(vector: &Vector3<f64>, frame: ReferenceFrame, spatial: &SpatialComponent) -> Vector3<f64> {
    match frame {
        ReferenceFrame::Body => spatial.to_world(vector),
        ReferenceFrame::Inertial => *vector,
    }
}

/// Sums forces and moments in the inertial frame.
///
/// Forces with an application point also contribute `r × F`, with `r` the body-frame point
/// rotated into the world frame. Gravity is left to the integrator.
pub fn calculate_net_forces_moments(
    forces: &[Force],
    moments: &[Moment],
    spatial: &SpatialComponent,
) -> (Vector3<f64>, Vector3<f64>) {
    let mut net_force = Vector3::zeros();
    let mut net_moment = Vector3::zeros();

    for force in forces {
        let force_inertial = to_inertial(&force.vector, force.frame, spatial);
        net_force += force_inertial;

        if let Some(point) = force.point {
            let point_inertial = spatial.to_world(&point);
            net_moment += point_inertial.cross(&force_inertial);
        }
    }

    for moment in moments {
        net_moment += to_inertial(&moment.vector, moment.frame, spatial);
    }

    (net_force, net_moment)
}

pub fn force_calculator_system(mut query: Query<(&mut PhysicsComponent, &SpatialComponent)>) {
    for (mut physics, spatial) in query.iter_mut() {
        let (net_force, net_moment) =
            calculate_net_forces_moments(&physics.forces, &physics.moments, spatial);
        physics.net_force = net_force;
        physics.net_moment = net_moment;
    }
}
