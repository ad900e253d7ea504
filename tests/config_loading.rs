mod common;

use common::*;
use flyer_dynamics::{
    components::{load_vehicle_config, VehicleConfig, VehicleSource, VehicleType},
    utils::ConfigError,
};
use pretty_assertions::assert_eq;
use std::io::Write;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file
}

#[test]
fn test_yaml_preset_round_trip() {
    let preset = VehicleConfig::light_jet();
    let yaml = serde_yaml::to_string(&preset).unwrap();
    let file = write_temp(".yaml", &yaml);

    let loaded = VehicleConfig::new(VehicleSource::File(file.path().to_path_buf())).unwrap();

    assert_eq!(loaded.name, preset.name);
    assert_eq!(loaded.actuators.len(), preset.actuators.len());
    assert_eq!(loaded.control_surfaces[0].reversed, true);
    assert_eq!(loaded.engines[0].max_thrust, 98.0);
    assert_eq!(loaded.collision, preset.collision);
}

#[test]
fn test_json_file_loading() {
    let preset = VehicleConfig::glider();
    let json = serde_json::to_string_pretty(&preset).unwrap();
    let file = write_temp(".json", &json);

    let loaded = load_vehicle_config(file.path()).unwrap();
    assert_eq!(loaded.name, "Glider");
    assert!(loaded.probe_drag.is_some());
}

#[test]
fn test_unsupported_extension() {
    let file = write_temp(".toml", "name = \"jet\"");
    assert!(matches!(
        load_vehicle_config(file.path()),
        Err(ConfigError::UnsupportedFormat(ext)) if ext == "toml"
    ));
}

#[test]
fn test_missing_file() {
    let result = VehicleConfig::new(VehicleSource::File("does/not/exist.yaml".into()));
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_malformed_yaml() {
    let file = write_temp(".yml", "name: [unterminated");
    assert!(matches!(
        load_vehicle_config(file.path()),
        Err(ConfigError::YamlError(_))
    ));
}

#[test]
fn test_invalid_file_rejected_by_validation() {
    let mut config = VehicleConfig::light_jet();
    config.actuators.push(extra_actuator("elevator"));
    let file = write_temp(".yaml", &serde_yaml::to_string(&config).unwrap());

    assert!(matches!(
        load_vehicle_config(file.path()),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn test_programmed_presets() {
    let jet = VehicleConfig::new(VehicleSource::Programmed(VehicleType::LightJet)).unwrap();
    assert_eq!(jet.engines.len(), 1);
    jet.validate().unwrap();
}

#[test]
fn test_instant_actuators_round_trip_through_json() {
    let preset = instant_light_jet();
    let file = write_temp(".json", &serde_json::to_string_pretty(&preset).unwrap());

    let loaded = load_vehicle_config(file.path()).unwrap();
    assert_eq!(loaded.actuators.len(), preset.actuators.len());
    assert!(loaded.actuators.iter().all(|a| a.rate == f64::INFINITY));
}
