use bevy::prelude::*;

use crate::components::vehicle::{
    ControlInputs, ControlState, EngineStates, ProbeDragState, VehicleConfig,
};
use crate::components::{ActuatorBank, AirData, ControlSurfaces, PhysicsComponent, SpatialComponent};

/// Everything the flight model needs on a vehicle entity, built from its configuration
#[derive(Bundle)]
pub struct VehicleBundle {
    pub name: Name,
    pub spatial: SpatialComponent,
    pub physics: PhysicsComponent,
    pub air_data: AirData,
    pub inputs: ControlInputs,
    pub control_state: ControlState,
    pub actuators: ActuatorBank,
    pub surfaces: ControlSurfaces,
    pub engines: EngineStates,
    pub probe: ProbeDragState,
    pub config: VehicleConfig,
}

impl VehicleBundle {
    pub fn new(config: VehicleConfig, spatial: SpatialComponent) -> Self {
        Self {
            name: Name::new(config.name.clone()),
            spatial,
            physics: PhysicsComponent::new(),
            air_data: AirData::default(),
            inputs: ControlInputs::for_engines(config.engines.len()),
            control_state: ControlState::default(),
            actuators: ActuatorBank::new(&config.actuators),
            surfaces: ControlSurfaces::new(&config.control_surfaces),
            engines: EngineStates::new(&config.engines),
            probe: ProbeDragState::default(),
            config,
        }
    }
}
