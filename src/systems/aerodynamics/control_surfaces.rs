use bevy::prelude::*;

use crate::components::{ActuatorBank, ControlSurfaces, VehicleConfig};

/// Updates every control surface from its actuator.
///
/// Deflection is the named actuator's current value, negated for reversed surfaces. A surface
/// whose actuator is missing stays neutral and produces no Δα.
pub fn update_control_surfaces(
    config: &VehicleConfig,
    actuators: &ActuatorBank,
    surfaces: &mut ControlSurfaces,
) {
    for (surface_config, surface) in config
        .control_surfaces
        .iter()
        .zip(surfaces.surfaces.iter_mut())
    {
        surface.model.set_chord_ratio(surface_config.chord_ratio);

        let deflection = match actuators.get(&surface_config.actuator) {
            Some(actuator) if surface_config.reversed => -actuator.current_value,
            Some(actuator) => actuator.current_value,
            None => {
                debug!(
                    "Control surface '{}' references unknown actuator '{}'",
                    surface_config.name, surface_config.actuator
                );
                0.0
            }
        };
        surface.set_deflection(deflection);
    }
}

pub fn control_surface_system(
    mut query: Query<(&VehicleConfig, &ActuatorBank, &mut ControlSurfaces)>,
) {
    for (config, actuators, mut surfaces) in query.iter_mut() {
        update_control_surfaces(config, actuators, &mut surfaces);
    }
}
