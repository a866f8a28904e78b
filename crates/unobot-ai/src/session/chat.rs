//! Async turn methods for Session (ask + streaming).

use tracing::debug;

use crate::relay::collect_stream;
use crate::{AiError, CompletionClient, Message};

use super::manager::Session;

impl Session {
    /// Add a user message and wait for the complete answer.
    ///
    /// On failure the user message stays in the history and no assistant
    /// message is added.
    pub async fn ask(
        &mut self,
        client: &dyn CompletionClient,
        question: impl Into<String>,
    ) -> Result<String, AiError> {
        self.append(Message::user(question));

        let answer = client.complete(&self.messages).await?;
        debug!(chars = answer.len(), "answer received");

        self.append(Message::assistant(answer.clone()));
        Ok(answer)
    }

    /// Add a user message and stream the answer, calling `on_chunk` for
    /// each piece as it arrives. The stream is drained to completion before
    /// the assistant message (the concatenation of all chunks) is added.
    pub async fn stream_turn(
        &mut self,
        client: &dyn CompletionClient,
        question: impl Into<String>,
        on_chunk: impl FnMut(&str),
    ) -> Result<String, AiError> {
        self.append(Message::user(question));

        let stream = client.stream(&self.messages).await?;
        let answer = collect_stream(stream, on_chunk).await?;
        debug!(chars = answer.len(), "streamed answer complete");

        self.append(Message::assistant(answer.clone()));
        Ok(answer)
    }
}
