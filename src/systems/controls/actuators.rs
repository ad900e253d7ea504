use bevy::prelude::*;

use crate::components::{ActuatorBank, ControlInputs, ControlState};
use crate::resources::PhysicsConfig;

/// Advances every actuator towards its channel's input by one tick.
///
/// Raw inputs are mapped onto the actuator range with [`Actuator::scaled_input`] before the
/// rate limit is applied. Actuators whose channel has no input keep their position.
///
/// [`Actuator::scaled_input`]: crate::components::Actuator::scaled_input
pub fn update_actuators(bank: &mut ActuatorBank, inputs: &ControlInputs, dt: f64) {
    for actuator in bank.actuators.iter_mut() {
        let Some(raw) = inputs.get(actuator.channel) else {
            debug!(
                "Actuator '{}' has no input on channel {:?}, holding position",
                actuator.name, actuator.channel
            );
            continue;
        };
        let target = actuator.scaled_input(raw);
        actuator.update(target, dt);
    }
}

/// System stepping actuator dynamics and publishing the effective control state.
pub fn actuator_system(
    mut query: Query<(&ControlInputs, &mut ActuatorBank, &mut ControlState)>,
    config: Res<PhysicsConfig>,
) {
    let dt = config.timestep;
    for (inputs, mut bank, mut state) in query.iter_mut() {
        update_actuators(&mut bank, inputs, dt);
        *state = ControlState::resolve(inputs, &bank);
    }
}
