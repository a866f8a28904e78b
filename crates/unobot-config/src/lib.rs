//! unobot configuration system.
//!
//! TOML-based configuration for the manual location, the completion
//! endpoint and logging, plus `.env` discovery for the API credential.
//! All config sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use unobot_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config.openai.model);
//! ```

pub mod env_file;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env_file::{api_key_from_env, default_env_candidates, load_env_file, resolve_env_file};
pub use schema::{LogLevel, LoggingConfig, ManualConfig, OpenAiSettings, UnobotConfig};

use std::path::Path;

use unobot_common::ConfigError;

/// Load config from an explicit path, or from the platform default path.
///
/// An explicit path must exist. The default path is created with a
/// commented template when missing. The result is validated.
pub fn load_config(path: Option<&Path>) -> Result<UnobotConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}
