use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Physical envelope of a vehicle, in the body frame relative to the centre of mass.
///
/// Force points can be projected onto its surface so torque arms follow the real shape of
/// the vehicle rather than wherever a designer dropped a marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CollisionVolume {
    Box {
        center: Vector3<f64>,
        half_extents: Vector3<f64>,
    },
    Sphere {
        center: Vector3<f64>,
        radius: f64,
    },
    /// Capsule whose core segment runs along the body X axis
    Capsule {
        center: Vector3<f64>,
        half_length: f64,
        radius: f64,
    },
}

impl Default for CollisionVolume {
    fn default() -> Self {
        CollisionVolume::Sphere {
            center: Vector3::zeros(),
            radius: 1.0,
        }
    }
}

impl CollisionVolume {
    /// Point on the surface of the volume nearest to `point`.
    ///
    /// Points inside the volume are pushed out to the closest face, so the result always lies
    /// on the surface.
    pub fn closest_surface_point(&self, point: &Vector3<f64>) -> Vector3<f64> {
        match *self {
            CollisionVolume::Box {
                center,
                half_extents,
            } => center + box_surface_point(&(point - center), &half_extents),
            CollisionVolume::Sphere { center, radius } => {
                sphere_surface_point(&center, radius, point)
            }
            CollisionVolume::Capsule {
                center,
                half_length,
                radius,
            } => {
                let local = point - center;
                let core = center + Vector3::x() * local.x.clamp(-half_length, half_length);
                sphere_surface_point(&core, radius, point)
            }
        }
    }
}

/// Application point for a body-frame `point`: its projection onto `collision` when requested.
///
/// A requested projection without a collision volume falls back to the raw point.
pub fn application_point(
    point: &Vector3<f64>,
    project_to_surface: bool,
    collision: Option<&CollisionVolume>,
) -> Vector3<f64> {
    if !project_to_surface {
        return *point;
    }
    match collision {
        Some(volume) => volume.closest_surface_point(point),
        None => {
            debug!("No collision volume to project onto, using raw point {:?}", point);
            *point
        }
    }
}

fn box_surface_point(local: &Vector3<f64>, half_extents: &Vector3<f64>) -> Vector3<f64> {
    let outside = (0..3).any(|i| local[i].abs() > half_extents[i]);
    if outside {
        return Vector3::from_fn(|i, _| local[i].clamp(-half_extents[i], half_extents[i]));
    }

    // Inside: snap the axis with the least clearance onto its face
    let mut nearest = 0;
    for i in 1..3 {
        if half_extents[i] - local[i].abs() < half_extents[nearest] - local[nearest].abs() {
            nearest = i;
        }
    }
    let mut surface = *local;
    let side = if local[nearest] < 0.0 { -1.0 } else { 1.0 };
    surface[nearest] = side * half_extents[nearest];
    surface
}

fn sphere_surface_point(center: &Vector3<f64>, radius: f64, point: &Vector3<f64>) -> Vector3<f64> {
    let offset = point - center;
    let direction = offset
        .try_normalize(1e-12)
        .unwrap_or_else(Vector3::x);
    center + direction * radius
}
