//! Default TOML config template with documentation comments.

/// Generate the default TOML config content with comments.
pub(super) fn default_config_toml() -> &'static str {
    r#"# unobot configuration
# Only override what you want to change -- missing fields use defaults.

[manual]
# Relative paths resolve against the working directory.
# path = "./UNOClassicManualGerman.pdf"

[openai]
# model = "gpt-4.1-mini"          # used for every answer
# context_model = "gpt-4.1-mini"  # informational only
# temperature = 0.0               # 0.0-2.0, non-streaming answers only
# base_url = "https://api.openai.com/v1"

[logging]
# level = "INFO"                  # DEBUG, INFO, WARNING, ERROR
"#
}
