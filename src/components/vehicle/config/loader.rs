use bevy::prelude::*;
use std::path::Path;

use crate::components::vehicle::config::VehicleConfig;
use crate::utils::ConfigError;

/// Reads a vehicle configuration, choosing the format from the file extension.
///
/// `.yaml`/`.yml` and `.json` are supported. The result is validated before it is returned.
pub fn load_vehicle_config<P: AsRef<Path>>(path: P) -> Result<VehicleConfig, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let config = match extension.as_str() {
        "yaml" | "yml" => parse_yaml(&contents)?,
        "json" => parse_json(&contents)?,
        other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
    };

    info!(
        "Loaded vehicle '{}' from {}: {} engines, {} control surfaces",
        config.name,
        path.display(),
        config.engines.len(),
        config.control_surfaces.len()
    );
    Ok(config)
}

pub fn parse_yaml(contents: &str) -> Result<VehicleConfig, ConfigError> {
    let config: VehicleConfig = serde_yaml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

pub fn parse_json(contents: &str) -> Result<VehicleConfig, ConfigError> {
    let config: VehicleConfig = serde_json::from_str(contents)?;
    config.validate()?;
    Ok(config)
}
