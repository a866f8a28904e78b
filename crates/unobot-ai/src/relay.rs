//! Helpers between a `CompletionClient` and whoever renders its answers.

use futures_util::StreamExt;
use tracing::warn;

use crate::{AiError, ChunkStream, CompletionClient, Message};

/// Render an error the way it is shown in place of an answer.
pub fn error_text(err: &AiError) -> String {
    format!("Error: {err}")
}

/// Complete a conversation, folding any failure into `"Error: ..."` text.
///
/// The result cannot be told apart from a real answer that happens to
/// start with the same prefix. Callers that need to branch on failure
/// should use `CompletionClient::complete` directly.
pub async fn complete_text(client: &dyn CompletionClient, messages: &[Message]) -> String {
    match client.complete(messages).await {
        Ok(answer) => answer,
        Err(e) => {
            warn!("completion failed: {e}");
            error_text(&e)
        }
    }
}

/// Drain a chunk stream, handing each chunk to `on_chunk` as it arrives.
///
/// Returns the concatenation of every chunk. The first error ends the
/// drain; chunks already rendered stay rendered.
pub async fn collect_stream(
    mut stream: ChunkStream,
    mut on_chunk: impl FnMut(&str),
) -> Result<String, AiError> {
    let mut full_content = String::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        on_chunk(&chunk);
        full_content.push_str(&chunk);
    }
    Ok(full_content)
}
