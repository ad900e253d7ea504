mod flight_model;

pub use flight_model::{FlightModelPlugin, FlightModelSet};
