use nalgebra::Vector3;
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation between two values, with the factor clamped to [0, 1]
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Maps a symmetric [-1, 1] control signal onto a [0, 1] interpolation factor
#[inline]
pub fn axis_to_unit(input: f64) -> f64 {
    (input + 1.0) / 2.0
}

#[inline]
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Moves `current` towards `target` by at most `max_delta`, never overshooting.
pub fn move_toward(current: f64, target: f64, max_delta: f64) -> f64 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

/// Unsigned angle between two vectors in radians. Returns zero when either is degenerate.
pub fn angle_between(from: &Vector3<f64>, to: &Vector3<f64>) -> f64 {
    let denom = (from.norm_squared() * to.norm_squared()).sqrt();
    if denom < 1e-15 {
        return 0.0;
    }
    (from.dot(to) / denom).clamp(-1.0, 1.0).acos()
}

/// Angle from `from` to `to` in radians, measured about `axis` (right-handed).
///
/// Both vectors are projected onto the plane normal to `axis` first, so components along the
/// axis do not contribute. Returns zero when a projection or the axis is degenerate.
pub fn signed_angle(from: &Vector3<f64>, to: &Vector3<f64>, axis: &Vector3<f64>) -> f64 {
    let Some(n) = axis.try_normalize(1e-15) else {
        return 0.0;
    };
    let a = from - n * from.dot(&n);
    let b = to - n * to.dot(&n);
    if a.norm_squared() < 1e-24 || b.norm_squared() < 1e-24 {
        return 0.0;
    }
    n.dot(&a.cross(&b)).atan2(a.dot(&b))
}

/// Component-wise `v * |v|`, the sign-preserving square used by quadratic drag and damping
pub fn signed_square(v: &Vector3<f64>) -> Vector3<f64> {
    v.component_mul(&v.abs())
}
