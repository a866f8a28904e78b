//! Completion endpoint settings.

use serde::{Deserialize, Serialize};
use unobot_common::defaults::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// OpenAI-compatible chat completion settings.
///
/// `context_model` names the model the manual context was prepared for.
/// It is reported at startup but never sent to the endpoint; every request
/// uses `model`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
    pub model: String,
    pub context_model: String,
    /// Sampling temperature for non-streaming answers (valid range: 0.0-2.0).
    pub temperature: f64,
    pub base_url: String,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            context_model: DEFAULT_MODEL.into(),
            temperature: 0.0,
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shared_constants() {
        let settings = OpenAiSettings::default();
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.context_model, DEFAULT_MODEL);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }
}
