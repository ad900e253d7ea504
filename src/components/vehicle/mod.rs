mod bundle;
pub mod config;
mod state;

pub use bundle::VehicleBundle;
pub use config::*;
pub use state::*;
