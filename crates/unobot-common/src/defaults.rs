//! Defaults shared by the config schema and the completion client.

/// Environment variable holding the completion API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Chat model used when neither the config nor `--model` names one.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// OpenAI-compatible endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
