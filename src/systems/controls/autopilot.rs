use bevy::prelude::*;

use crate::components::{AttitudeHold, ControlInputs, SpatialComponent};
use crate::resources::PhysicsConfig;

/// Writes bank/pitch hold commands into the roll and pitch channels.
///
/// Commands are clamped to [-1, 1]. Does nothing unless the hold is engaged.
pub fn apply_attitude_hold(
    hold: &mut AttitudeHold,
    spatial: &SpatialComponent,
    inputs: &mut ControlInputs,
    dt: f64,
) {
    if !hold.engaged {
        return;
    }

    if let Some(pid) = hold.bank.as_mut() {
        inputs.roll = pid.get_control(spatial.bank_angle(), dt).clamp(-1.0, 1.0);
    }
    if let Some(pid) = hold.pitch.as_mut() {
        inputs.pitch = pid.get_control(spatial.pitch_angle(), dt).clamp(-1.0, 1.0);
    }
}

pub fn attitude_hold_system(
    mut query: Query<(&mut AttitudeHold, &SpatialComponent, &mut ControlInputs)>,
    config: Res<PhysicsConfig>,
) {
    for (mut hold, spatial, mut inputs) in query.iter_mut() {
        apply_attitude_hold(&mut hold, spatial, &mut inputs, config.timestep);
    }
}
