use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures while turning the manual into plain text.
#[derive(Debug, thiserror::Error)]
pub enum ManualError {
    #[error("manual not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read manual {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract text from {path}: {reason}")]
    Extract { path: PathBuf, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum UnobotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Manual(#[from] ManualError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ai error: {0}")]
    Ai(String),
}
