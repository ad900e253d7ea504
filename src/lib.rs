pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::VehicleConfig;
pub use plugins::{FlightModelPlugin, FlightModelSet};
