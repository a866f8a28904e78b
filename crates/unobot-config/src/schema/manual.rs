//! Reference manual location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default manual, relative to the working directory.
pub const DEFAULT_MANUAL_PATH: &str = "./UNOClassicManualGerman.pdf";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualConfig {
    pub path: PathBuf,
}

impl Default for ManualConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MANUAL_PATH),
        }
    }
}
