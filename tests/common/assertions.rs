use approx::assert_relative_eq;
use flyer_dynamics::components::PhysicsComponent;
use nalgebra::Vector3;

/// Assert that every published contribution and the net values are finite
#[track_caller]
pub fn assert_physics_valid(physics: &PhysicsComponent) {
    assert!(
        physics.net_force.iter().all(|x| x.is_finite()),
        "Net force contains non-finite values: {:?}",
        physics.net_force
    );
    assert!(
        physics.net_moment.iter().all(|x| x.is_finite()),
        "Net moment contains non-finite values: {:?}",
        physics.net_moment
    );
    for force in &physics.forces {
        assert!(
            force.vector.iter().all(|x| x.is_finite()),
            "{:?} force is not finite",
            force.category
        );
    }
    for moment in &physics.moments {
        assert!(
            moment.vector.iter().all(|x| x.is_finite()),
            "{:?} moment is not finite",
            moment.category
        );
    }
}

/// Assert that two vectors are approximately equal
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon, max_relative = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon, max_relative = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon, max_relative = epsilon);
}
