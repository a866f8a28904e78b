//! Full configuration validation.
//!
//! Collects every problem into a single `ConfigError` so a user fixing
//! their config sees all of them at once.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::UnobotConfig;
use helpers::{validate_non_empty, validate_range_f64};
use unobot_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &UnobotConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_non_empty(
        &mut errors,
        "manual.path",
        &config.manual.path.to_string_lossy(),
    );
    validate_non_empty(&mut errors, "openai.model", &config.openai.model);
    validate_non_empty(&mut errors, "openai.base_url", &config.openai.base_url);
    validate_range_f64(
        &mut errors,
        "openai.temperature",
        config.openai.temperature,
        0.0,
        2.0,
    );

    let base_url = config.openai.base_url.trim();
    let has_scheme = base_url.starts_with("http://") || base_url.starts_with("https://");
    if !base_url.is_empty() && !has_scheme {
        errors.push(format!(
            "openai.base_url = {base_url} must start with http:// or https://"
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
