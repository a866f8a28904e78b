//! Tests for the full validation pipeline.

use super::*;
use std::path::PathBuf;

#[test]
fn default_config_validates() {
    let config = UnobotConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_temperature_too_high() {
    let mut config = UnobotConfig::default();
    config.openai.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("openai.temperature"));
}

#[test]
fn catches_negative_temperature() {
    let mut config = UnobotConfig::default();
    config.openai.temperature = -0.1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("openai.temperature"));
}

#[test]
fn catches_nan_temperature() {
    let mut config = UnobotConfig::default();
    config.openai.temperature = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_empty_model() {
    let mut config = UnobotConfig::default();
    config.openai.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("openai.model"));
}

#[test]
fn catches_empty_manual_path() {
    let mut config = UnobotConfig::default();
    config.manual.path = PathBuf::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("manual.path"));
}

#[test]
fn catches_base_url_without_scheme() {
    let mut config = UnobotConfig::default();
    config.openai.base_url = "api.openai.com/v1".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("openai.base_url"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = UnobotConfig::default();
    config.openai.model = String::new();
    config.openai.temperature = 5.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("openai.model"));
    assert!(err.contains("openai.temperature"));
    assert!(err.contains("; "));
}
