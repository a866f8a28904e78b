//! OpenAI chat completions client.
//!
//! Implements the `CompletionClient` trait against any OpenAI-compatible
//! `/chat/completions` endpoint, authenticated with a bearer API key
//! (`OPENAI_API_KEY`).

mod api;
mod client;
mod config;


pub use client::OpenAiClient;
pub use config::OpenAiConfig;
