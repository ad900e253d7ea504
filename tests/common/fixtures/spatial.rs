use flyer_dynamics::components::SpatialComponent;
use nalgebra::{UnitQuaternion, Vector3};

/// Wings level, nose on the flight path, at `speed` m/s heading world +X
pub fn level_flight(speed: f64) -> SpatialComponent {
    SpatialComponent {
        position: Vector3::new(0.0, 0.0, -1000.0),
        velocity: Vector3::new(speed, 0.0, 0.0),
        attitude: UnitQuaternion::identity(),
        angular_velocity: Vector3::zeros(),
    }
}

/// Level flight with the wings rolled by `bank` radians (positive right wing down)
pub fn banked_flight(speed: f64, bank: f64) -> SpatialComponent {
    SpatialComponent {
        attitude: UnitQuaternion::from_axis_angle(&Vector3::x_axis(), bank),
        ..level_flight(speed)
    }
}

/// Flight path along world +X with the nose yawed by `yaw` radians (positive right)
pub fn yawed_flight(speed: f64, yaw: f64) -> SpatialComponent {
    SpatialComponent {
        attitude: UnitQuaternion::from_axis_angle(&Vector3::z_axis(), yaw),
        ..level_flight(speed)
    }
}

pub fn at_rest() -> SpatialComponent {
    SpatialComponent::at_position(Vector3::new(0.0, 0.0, -1000.0))
}
