use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::signed_angle;

/// Kinematic state of a rigid body, owned by the integrator.
///
/// Everything here is in world space. The world frame has `-Z` up; the body frame is
/// `+X` forward, `+Y` right, `+Z` down.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in world space [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn forward(&self) -> Vector3<f64> {
        self.attitude * LocalDirection::Forward.vector()
    }

    pub fn right(&self) -> Vector3<f64> {
        self.attitude * LocalDirection::Right.vector()
    }

    pub fn up(&self) -> Vector3<f64> {
        self.attitude * LocalDirection::Up.vector()
    }

    pub fn to_body(&self, world: &Vector3<f64>) -> Vector3<f64> {
        self.attitude.inverse_transform_vector(world)
    }

    pub fn to_world(&self, body: &Vector3<f64>) -> Vector3<f64> {
        self.attitude * body
    }

    pub fn velocity_body(&self) -> Vector3<f64> {
        self.to_body(&self.velocity)
    }

    pub fn angular_velocity_body(&self) -> Vector3<f64> {
        self.to_body(&self.angular_velocity)
    }

    /// Bank angle in radians, positive with the right wing down.
    ///
    /// Measured about the forward axis between world up (projected normal to the nose) and body
    /// up. Zero when the nose points straight up or down.
    pub fn bank_angle(&self) -> f64 {
        let forward = self.forward();
        let up = world_up();
        let level_up = up - forward * up.dot(&forward);
        if level_up.norm_squared() < 1e-12 {
            return 0.0;
        }
        signed_angle(&level_up, &self.up(), &forward)
    }

    /// Pitch angle of the nose above the horizon in radians
    pub fn pitch_angle(&self) -> f64 {
        self.forward().dot(&world_up()).clamp(-1.0, 1.0).asin()
    }
}

/// World-frame up vector
pub fn world_up() -> Vector3<f64> {
    -Vector3::z()
}

/// One of the six cardinal directions of the body frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalDirection {
    Forward,
    Back,
    Right,
    Left,
    Up,
    Down,
}

impl LocalDirection {
    pub const ALL: [LocalDirection; 6] = [
        LocalDirection::Forward,
        LocalDirection::Back,
        LocalDirection::Right,
        LocalDirection::Left,
        LocalDirection::Up,
        LocalDirection::Down,
    ];

    /// Unit vector in the body frame
    pub fn vector(self) -> Vector3<f64> {
        match self {
            LocalDirection::Forward => Vector3::x(),
            LocalDirection::Back => -Vector3::x(),
            LocalDirection::Right => Vector3::y(),
            LocalDirection::Left => -Vector3::y(),
            LocalDirection::Up => -Vector3::z(),
            LocalDirection::Down => Vector3::z(),
        }
    }

    /// Index of the body axis this direction lies on (0 = x, 1 = y, 2 = z)
    pub fn axis_index(self) -> usize {
        match self {
            LocalDirection::Forward | LocalDirection::Back => 0,
            LocalDirection::Right | LocalDirection::Left => 1,
            LocalDirection::Up | LocalDirection::Down => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_body_axes_follow_attitude() {
        // Yaw 90 degrees about world down: nose swings to world +Y
        let spatial = SpatialComponent {
            attitude: UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
            ..Default::default()
        };

        assert_relative_eq!(spatial.forward(), Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(spatial.right(), -Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(spatial.up(), world_up(), epsilon = 1e-12);
    }

    #[test]
    fn test_body_world_round_trip() {
        let spatial = SpatialComponent {
            attitude: UnitQuaternion::from_euler_angles(0.3, -0.2, 1.1),
            velocity: Vector3::new(50.0, 3.0, -2.0),
            ..Default::default()
        };
        let body = spatial.velocity_body();
        assert_relative_eq!(spatial.to_world(&body), spatial.velocity, epsilon = 1e-9);
    }

    #[test]
    fn test_bank_and_pitch_angles() {
        // Positive rotation about the nose drops the right wing
        let banked = SpatialComponent {
            attitude: UnitQuaternion::from_axis_angle(&Vector3::x_axis(), 0.4),
            ..Default::default()
        };
        assert_relative_eq!(banked.bank_angle(), 0.4, epsilon = 1e-12);
        assert_relative_eq!(banked.pitch_angle(), 0.0, epsilon = 1e-12);

        // Positive rotation about the right wing raises the nose
        let climbing = SpatialComponent {
            attitude: UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.25),
            ..Default::default()
        };
        assert_relative_eq!(climbing.pitch_angle(), 0.25, epsilon = 1e-12);
        assert_relative_eq!(climbing.bank_angle(), 0.0, epsilon = 1e-6);

        let vertical = SpatialComponent {
            attitude: UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2),
            ..Default::default()
        };
        assert_relative_eq!(vertical.bank_angle(), 0.0);
    }

    #[test]
    fn test_direction_axes() {
        for dir in LocalDirection::ALL {
            let v = dir.vector();
            assert_relative_eq!(v.norm(), 1.0);
            assert_relative_eq!(v[dir.axis_index()].abs(), 1.0);
        }
    }
}
