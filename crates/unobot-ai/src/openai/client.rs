//! OpenAI client struct, request building, and response parsing.

use unobot_common::defaults::API_KEY_VAR;

use crate::{AiError, Message};

use super::config::OpenAiConfig;

/// Sentinel data payload that ends a streamed answer.
pub(crate) const DONE_SENTINEL: &str = "[DONE]";

/// OpenAI chat completions client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    /// No request timeout is configured; a stalled connection blocks the
    /// caller until the server gives up.
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    pub(crate) fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// The API key, or `MissingCredential` if none is configured.
    pub(crate) fn api_key(&self) -> Result<&str, AiError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(AiError::MissingCredential(API_KEY_VAR))
    }

    /// Build the JSON request body for the chat completions API.
    ///
    /// The temperature is only sent on non-streaming requests; streamed
    /// answers use the endpoint's default sampling.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        stream: bool,
    ) -> serde_json::Value {
        let msgs: Vec<_> = messages
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role.as_str(),
                    "content": msg.content,
                })
            })
            .collect();

        let mut body = serde_json::json!({
            "model": self.config.model,
            "messages": msgs,
            "stream": stream,
        });

        if !stream {
            body["temperature"] = serde_json::json!(self.config.temperature);
        }

        body
    }

    /// Parse a non-streaming response into the trimmed answer text.
    pub(crate) fn parse_response(json: &serde_json::Value) -> Result<String, AiError> {
        json["choices"][0]["message"]["content"]
            .as_str()
            .map(|content| content.trim().to_string())
            .ok_or_else(|| {
                AiError::ParseError("response has no choices[0].message.content".into())
            })
    }

    /// Parse one streamed event payload into its text delta, if any.
    pub(crate) fn parse_chunk(data: &str) -> Result<Option<String>, AiError> {
        let json: serde_json::Value =
            serde_json::from_str(data).map_err(|e| AiError::ParseError(e.to_string()))?;

        if let Some(message) = json["error"]["message"].as_str() {
            return Err(AiError::ApiError(message.to_string()));
        }

        Ok(json["choices"][0]["delta"]["content"]
            .as_str()
            .filter(|text| !text.is_empty())
            .map(String::from))
    }
}
