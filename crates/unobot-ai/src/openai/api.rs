//! CompletionClient trait implementation for OpenAiClient (complete + stream).

use async_trait::async_trait;
use futures_util::{future, TryStreamExt};
use tracing::debug;

use crate::streaming::sse_events;
use crate::{AiError, ChunkStream, CompletionClient, Message};

use super::client::{OpenAiClient, DONE_SENTINEL};

impl OpenAiClient {
    /// POST a request body and check the response status.
    ///
    /// The credential is checked before anything touches the network.
    async fn post(&self, body: &serde_json::Value) -> Result<reqwest::Response, AiError> {
        let api_key = self.api_key()?;

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        Ok(response)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, AiError> {
        let body = self.build_request_body(messages, false);

        debug!(model = %self.config.model, messages = messages.len(), "chat completion request");

        let response = self.post(&body).await?;
        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        Self::parse_response(&json)
    }

    async fn stream(&self, messages: &[Message]) -> Result<ChunkStream, AiError> {
        let body = self.build_request_body(messages, true);

        debug!(
            model = %self.config.model,
            messages = messages.len(),
            "chat completion streaming request"
        );

        let response = self.post(&body).await?;
        let chunks = sse_events(response)
            .try_take_while(|event| future::ready(Ok(event.data != DONE_SENTINEL)))
            .try_filter_map(|event| future::ready(Self::parse_chunk(&event.data)));

        Ok(Box::pin(chunks))
    }
}
