//! Configuration schema types for unobot.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod manual;
mod openai;
mod system;

pub use manual::*;
pub use openai::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for unobot.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UnobotConfig {
    pub manual: ManualConfig,
    pub openai: OpenAiSettings,
    pub logging: LoggingConfig,
}
