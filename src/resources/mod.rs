pub mod config;

pub use config::{AerodynamicsConfig, PhysicsConfig};
