//! Server-Sent Events (SSE) streaming parser.
//!
//! The chat completions endpoint streams its answer as SSE `data:` lines.
//! `SseParser` handles the line framing; `sse_events` drives it over a
//! reqwest response body and yields events lazily.

use futures_util::{Stream, StreamExt};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::io::StreamReader;

use crate::AiError;

/// A single SSE event parsed from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The event type, when the server sends one.
    pub event: Option<String>,
    /// The event data (JSON string, or the `[DONE]` sentinel).
    pub data: String,
}

/// Incremental line-oriented SSE parser.
#[derive(Debug, Default)]
pub struct SseParser {
    event: Option<String>,
    data: String,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line (without its terminator). Returns an event when the
    /// line completes one.
    pub fn push_line(&mut self, line: &str) -> Option<SseEvent> {
        if line.is_empty() {
            // Empty line = end of event
            let event = self.take_event();
            self.event = None;
            return event;
        }

        if let Some(event_type) = field_value(line, "event") {
            self.event = Some(event_type.to_string());
        } else if let Some(data) = field_value(line, "data") {
            if !self.data.is_empty() {
                self.data.push('\n');
            }
            self.data.push_str(data);
        }
        // Ignore other fields (id:, retry:, comments)
        None
    }

    /// Flush a trailing event that was not followed by a blank line.
    pub fn finish(&mut self) -> Option<SseEvent> {
        self.take_event()
    }

    fn take_event(&mut self) -> Option<SseEvent> {
        if self.data.is_empty() {
            return None;
        }
        Some(SseEvent {
            event: self.event.take(),
            data: std::mem::take(&mut self.data),
        })
    }
}

fn field_value<'a>(line: &'a str, field: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(field)?.strip_prefix(':')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// Parse an SSE stream from a reqwest response into a lazy event stream.
pub fn sse_events(
    response: reqwest::Response,
) -> impl Stream<Item = Result<SseEvent, AiError>> + Send {
    let byte_stream = response
        .bytes_stream()
        .map(|result| result.map_err(std::io::Error::other));
    let lines = BufReader::new(StreamReader::new(byte_stream)).lines();

    futures_util::stream::try_unfold(
        (lines, SseParser::new()),
        |(mut lines, mut parser)| async move {
            loop {
                let line = match lines.next_line().await {
                    Ok(line) => line,
                    Err(e) => return Err(AiError::NetworkError(e.to_string())),
                };
                match line {
                    Some(line) => {
                        if let Some(event) = parser.push_line(&line) {
                            return Ok(Some((event, (lines, parser))));
                        }
                    }
                    None => {
                        let event = parser.finish();
                        return Ok(event.map(|event| (event, (lines, parser))));
                    }
                }
            }
        },
    )
}
