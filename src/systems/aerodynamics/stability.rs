use nalgebra::Vector3;

use crate::components::{AirData, SpatialComponent, StabilityCoefficients};
use crate::utils::clamp01;

/// Restoring torque magnitude for one channel, growing with |angle| when nonlinearity > 0
#[inline]
fn restoring(gain: f64, angle: f64, nonlinearity: f64) -> f64 {
    gain * angle * (1.0 + nonlinearity * angle.abs())
}

/// Static stability torque in the world frame.
///
/// Each channel turns the vehicle back towards its trimmed attitude: the nose towards the
/// flight path in pitch and yaw, the wings towards level in roll. The total is scaled by
/// `clamp01(airspeed / reference_speed)` and the stability multiplier, and is zero below the
/// minimum speed.
pub fn calculate_stability_moment(
    coeffs: &StabilityCoefficients,
    air_data: &AirData,
    spatial: &SpatialComponent,
) -> Vector3<f64> {
    if !coeffs.enabled || air_data.airspeed <= 0.0 || air_data.airspeed < coeffs.min_speed {
        return Vector3::zeros();
    }

    // Angles measured from the current attitude towards the trimmed one
    let pitch = -air_data.alpha;
    let yaw = air_data.sideslip;
    let roll = -air_data.bank;

    let k = coeffs.nonlinearity;
    let torque = spatial.right() * restoring(coeffs.pitch, pitch, k)
        + spatial.up() * restoring(coeffs.yaw, yaw, k)
        + spatial.forward() * restoring(coeffs.roll, roll, k);

    let speed_factor = clamp01(air_data.airspeed / coeffs.reference_speed);
    torque * speed_factor * coeffs.scale
}
