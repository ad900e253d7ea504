use bevy::prelude::*;
use flyer_dynamics::{
    components::{SpatialComponent, VehicleBundle, VehicleConfig},
    plugins::FlightModelPlugin,
    resources::PhysicsConfig,
};

// Builder for creating a test application with customizable configuration
#[derive(Default)]
pub struct TestAppBuilder {
    physics_config: Option<PhysicsConfig>,
    vehicles: Vec<(VehicleConfig, SpatialComponent)>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = Some(config);
        self
    }

    pub fn with_vehicle(mut self, config: VehicleConfig, spatial: SpatialComponent) -> Self {
        self.vehicles.push((config, spatial));
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(FlightModelPlugin::with_config(
            self.physics_config.unwrap_or_default(),
        ));

        let vehicles = self
            .vehicles
            .into_iter()
            .map(|(config, spatial)| {
                app.world_mut()
                    .spawn(VehicleBundle::new(config, spatial))
                    .id()
            })
            .collect();

        TestApp { app, vehicles }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub vehicles: Vec<Entity>,
}

impl TestApp {
    /// Runs the fixed-tick schedule directly, independent of wall-clock time
    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn vehicle(&self, index: usize) -> Entity {
        self.vehicles[index]
    }

    pub fn get<T: Component>(&self, entity: Entity) -> &T {
        self.app
            .world()
            .get::<T>(entity)
            .expect("vehicle is missing the requested component")
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Mut<T> {
        self.app
            .world_mut()
            .get_mut::<T>(entity)
            .expect("vehicle is missing the requested component")
    }

    pub fn insert<B: Bundle>(&mut self, entity: Entity, bundle: B) {
        self.app.world_mut().entity_mut(entity).insert(bundle);
    }
}
