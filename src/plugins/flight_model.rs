use bevy::prelude::*;

use crate::components::{SpatialComponent, VehicleBundle, VehicleConfig};
use crate::resources::{AerodynamicsConfig, PhysicsConfig};
use crate::systems::{
    actuator_system, aero_force_system, air_data_system, attitude_hold_system,
    control_force_system, control_surface_system, force_calculator_system, probe_drag_system,
    propulsion_system,
};

/// Flight model stages, run in order every fixed tick
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightModelSet {
    /// Attitude hold, actuator dynamics and control surface deflections
    Controls,
    AirData,
    /// Aerodynamic, propulsive and control forces, all reading the same snapshot
    Forces,
    /// Net force and moment for the integrator
    Accumulate,
}

/// Plugin computing per-tick forces and moments for every vehicle entity.
///
/// Integration is left to an external plugin, which should run after
/// [`FlightModelSet::Accumulate`] and read `PhysicsComponent::net_force` / `net_moment`.
pub struct FlightModelPlugin {
    pub physics: PhysicsConfig,
    pub aerodynamics: AerodynamicsConfig,
    /// Vehicles spawned at startup
    pub vehicles: Vec<(VehicleConfig, SpatialComponent)>,
}

impl Default for FlightModelPlugin {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            aerodynamics: AerodynamicsConfig::default(),
            vehicles: Vec::new(),
        }
    }
}

impl FlightModelPlugin {
    pub fn with_config(physics: PhysicsConfig) -> Self {
        Self {
            physics,
            ..Default::default()
        }
    }

    pub fn with_vehicle(mut self, config: VehicleConfig, spatial: SpatialComponent) -> Self {
        self.vehicles.push((config, spatial));
        self
    }

    fn spawn_vehicles(mut commands: Commands, vehicles: Vec<(VehicleConfig, SpatialComponent)>) {
        for (config, spatial) in vehicles {
            info!("Spawning vehicle '{}'", config.name);
            commands.spawn(VehicleBundle::new(config, spatial));
        }
    }
}

impl Plugin for FlightModelPlugin {
    fn build(&self, app: &mut App) {
        let physics = match self.physics.validate() {
            Ok(()) => self.physics.clone(),
            Err(e) => {
                warn!("{}, falling back to default physics config", e);
                PhysicsConfig::default()
            }
        };

        let vehicles: Vec<_> = self
            .vehicles
            .iter()
            .filter(|(config, _)| match config.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!("Skipping vehicle '{}': {}", config.name, e);
                    false
                }
            })
            .cloned()
            .collect();

        app.insert_resource(Time::<Fixed>::from_seconds(physics.timestep))
            .insert_resource(physics)
            .insert_resource(self.aerodynamics.clone());

        app.configure_sets(
            FixedUpdate,
            (
                FlightModelSet::Controls,
                FlightModelSet::AirData,
                FlightModelSet::Forces,
                FlightModelSet::Accumulate,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                (attitude_hold_system, actuator_system, control_surface_system)
                    .chain()
                    .in_set(FlightModelSet::Controls),
                air_data_system.in_set(FlightModelSet::AirData),
                (
                    aero_force_system,
                    probe_drag_system,
                    propulsion_system,
                    control_force_system,
                )
                    .in_set(FlightModelSet::Forces),
                force_calculator_system.in_set(FlightModelSet::Accumulate),
            ),
        );

        if !vehicles.is_empty() {
            app.add_systems(Startup, move |commands: Commands| {
                Self::spawn_vehicles(commands, vehicles.clone())
            });
        }
    }
}
