use bevy::prelude::*;

use crate::components::{AirData, SpatialComponent};
use crate::resources::PhysicsConfig;

/// Recomputes air data from the start-of-tick rigid-body snapshot.
pub fn air_data_system(
    mut query: Query<(&SpatialComponent, &mut AirData)>,
    config: Res<PhysicsConfig>,
) {
    for (spatial, mut air_data) in query.iter_mut() {
        *air_data = AirData::calculate(spatial, config.air_density);
    }
}
