use nalgebra::Vector3;

use crate::components::{DampingCoefficients, SpatialComponent};
use crate::resources::AerodynamicsConfig;
use crate::utils::signed_square;

/// Angular rate damping `-(linear ω + quadratic ω|ω|)` per body axis, in the world frame.
///
/// Zero when the vehicle is effectively not rotating.
pub fn calculate_damping_moment(
    coeffs: &DampingCoefficients,
    spatial: &SpatialComponent,
    thresholds: &AerodynamicsConfig,
) -> Vector3<f64> {
    let rate = spatial.angular_velocity_body();
    if rate.norm_squared() < thresholds.min_angular_rate_squared {
        return Vector3::zeros();
    }

    let damping_body = -(coeffs.linear.component_mul(&rate)
        + coeffs.quadratic.component_mul(&signed_square(&rate)));
    spatial.to_world(&damping_body) * coeffs.multiplier
}
