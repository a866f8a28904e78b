//! Conversation engine for unobot.
//!
//! Provides the OpenAI chat completion client with:
//! - Streaming (SSE) support
//! - A single-owner conversation session seeded with the manual
//! - Relay helpers for draining streams and legacy error text

pub mod openai;
pub mod relay;
pub mod session;
pub mod streaming;

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;

pub use openai::{OpenAiClient, OpenAiConfig};
pub use session::{build_system_prompt, Session};

/// Lazy, finite sequence of answer text chunks. Not restartable.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<String, AiError>> + Send>>;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the full history and wait for the finished answer, trimmed.
    async fn complete(&self, messages: &[Message]) -> Result<String, AiError>;

    /// Send the full history and return the answer as it is generated.
    async fn stream(&self, messages: &[Message]) -> Result<ChunkStream, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("Missing credential: {0} is not set")]
    MissingCredential(&'static str),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
