use flyer_dynamics::components::{
    ActuatorConfig, ControlChannel, LinearDampingOverride, VehicleConfig,
};

/// Light jet whose actuators follow their inputs instantly
pub fn instant_light_jet() -> VehicleConfig {
    let mut config = VehicleConfig::light_jet();
    for actuator in config.actuators.iter_mut() {
        actuator.rate = f64::INFINITY;
    }
    config
}

/// Glider with probe drag also publishing a linear damping override
pub fn damped_glider() -> VehicleConfig {
    let mut config = VehicleConfig::glider();
    if let Some(probe) = config.probe_drag.as_mut() {
        probe.linear_damping = Some(LinearDampingOverride {
            base: 0.05,
            offbore_gain: 1.5,
        });
    }
    config
}

/// Light jet with its throttle actuator removed, so throttle passes straight through
pub fn direct_throttle_jet() -> VehicleConfig {
    let mut config = VehicleConfig::light_jet();
    config
        .actuators
        .retain(|a| !matches!(a.channel, ControlChannel::Throttle(_)));
    config
}

pub fn extra_actuator(name: &str) -> ActuatorConfig {
    ActuatorConfig::surface(name, ControlChannel::Pitch, 1.0, 0.2)
}
