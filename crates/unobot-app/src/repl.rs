//! Interactive turn loop: read a question, relay it, render the answer.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};
use unobot_ai::relay::error_text;
use unobot_ai::{CompletionClient, Message, Session};

pub(crate) const TITLE: &str = "UNO Manual Chatbot";
pub(crate) const GREETING: &str = "Ask me anything about UNO rules!";
const PROMPT: &str = "Your question: ";

/// How answers are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Render chunks as they arrive.
    Stream,
    /// Wait for the finished answer.
    Blocking,
}

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Question(&'a str),
    History,
    Quit,
    Empty,
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Input::Empty,
            "/quit" | "/exit" => Input::Quit,
            "/history" => Input::History,
            question => Input::Question(question),
        }
    }
}

/// Write messages as a role-tagged transcript.
pub(crate) fn write_transcript(out: &mut impl Write, messages: &[Message]) -> std::io::Result<()> {
    for message in messages {
        writeln!(out, "[{}] {}", message.role, message.content)?;
    }
    Ok(())
}

/// Answer one question, rendering into `out`.
///
/// Completion failures are rendered in place of the answer and the session
/// continues. A failed write to `out` is returned once the turn is recorded.
pub(crate) async fn answer(
    session: &mut Session,
    client: &dyn CompletionClient,
    mode: Mode,
    question: &str,
    out: &mut impl Write,
) -> std::io::Result<bool> {
    write!(out, "[assistant] ")?;
    out.flush()?;

    let result = match mode {
        Mode::Stream => {
            // Keep draining after a failed write; the first error is returned.
            let mut write_error = None;
            let result = session
                .stream_turn(client, question, |chunk| {
                    if write_error.is_some() {
                        return;
                    }
                    let written = out.write_all(chunk.as_bytes()).and_then(|()| out.flush());
                    if let Err(e) = written {
                        write_error = Some(e);
                    }
                })
                .await;
            if let Some(e) = write_error {
                return Err(e);
            }
            result.map(drop)
        }
        Mode::Blocking => match session.ask(client, question).await {
            Ok(answer) => {
                out.write_all(answer.as_bytes())?;
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => {
            writeln!(out)?;
            Ok(true)
        }
        Err(e) => {
            warn!("turn failed: {e}");
            writeln!(out, "{}", error_text(&e))?;
            Ok(false)
        }
    }
}

/// Run the interactive session until `/quit` or end of input.
pub(crate) async fn run<R, W>(
    session: &mut Session,
    client: &dyn CompletionClient,
    mode: Mode,
    input: R,
    mut out: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{GREETING}")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match Input::parse(&line) {
            Input::Empty => continue,
            Input::Quit => break,
            Input::History => write_transcript(&mut out, session.visible())?,
            Input::Question(question) => {
                answer(session, client, mode, question, &mut out).await?;
            }
        }
    }

    info!(messages = session.len(), "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use unobot_ai::{AiError, ChunkStream, Role};

    struct FixedClient;

    #[async_trait]
    impl CompletionClient for FixedClient {
        async fn complete(&self, _messages: &[Message]) -> Result<String, AiError> {
            Ok("Sieben.".into())
        }

        async fn stream(&self, _messages: &[Message]) -> Result<ChunkStream, AiError> {
            Ok(Box::pin(futures_util::stream::iter(vec![
                Ok("Hello, ".to_string()),
                Ok("world!".to_string()),
            ])))
        }
    }

    struct OfflineClient;

    #[async_trait]
    impl CompletionClient for OfflineClient {
        async fn complete(&self, _messages: &[Message]) -> Result<String, AiError> {
            Err(AiError::MissingCredential("OPENAI_API_KEY"))
        }

        async fn stream(&self, _messages: &[Message]) -> Result<ChunkStream, AiError> {
            Err(AiError::MissingCredential("OPENAI_API_KEY"))
        }
    }

    /// Accepts `limit` bytes, then fails every write.
    struct ClosedAfter {
        written: Vec<u8>,
        limit: usize,
    }

    impl Write for ClosedAfter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.written.len() + buf.len() > self.limit {
                return Err(std::io::ErrorKind::BrokenPipe.into());
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn closed_after_header() -> ClosedAfter {
        ClosedAfter {
            written: Vec::new(),
            limit: "[assistant] ".len(),
        }
    }

    async fn drive(client: &dyn CompletionClient, mode: Mode, input: &str) -> (Session, String) {
        let mut session = Session::new("Handbuch");
        let mut out = Vec::new();
        run(&mut session, client, mode, input.as_bytes(), &mut out)
            .await
            .unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn input_parsing() {
        assert_eq!(Input::parse("  "), Input::Empty);
        assert_eq!(Input::parse("/quit"), Input::Quit);
        assert_eq!(Input::parse("/history\n"), Input::History);
        assert_eq!(Input::parse(" Wer gibt? "), Input::Question("Wer gibt?"));
    }

    #[test]
    fn transcript_is_role_tagged() {
        let mut out = Vec::new();
        write_transcript(
            &mut out,
            &[Message::user("Frage"), Message::assistant("Antwort")],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[user] Frage\n[assistant] Antwort\n"
        );
    }

    #[tokio::test]
    async fn streamed_answer_is_rendered_and_recorded() {
        let (session, out) = drive(&FixedClient, Mode::Stream, "Hi\n/quit\n").await;
        assert!(out.starts_with("UNO Manual Chatbot\n"));
        assert!(out.contains("[assistant] Hello, world!\n"));
        assert_eq!(session.len(), 3);
        assert_eq!(session.messages()[2], Message::assistant("Hello, world!"));
    }

    #[tokio::test]
    async fn history_hides_the_manual() {
        let (_, out) = drive(&FixedClient, Mode::Blocking, "Wie viele?\n\n/history\n").await;
        assert!(out.contains("[user] Wie viele?\n[assistant] Sieben.\n"));
        assert!(!out.contains("Handbuch"));
        assert!(!out.contains("[system]"));
    }

    #[tokio::test]
    async fn failures_are_rendered_and_the_loop_continues() {
        let (session, out) = drive(&OfflineClient, Mode::Stream, "Eins\nZwei\n").await;
        assert_eq!(
            out.matches("Error: Missing credential: OPENAI_API_KEY is not set").count(),
            2
        );
        assert_eq!(session.len(), 3);
        assert!(session.visible().iter().all(|m| m.role == Role::User));
    }

    #[tokio::test]
    async fn streamed_write_failure_is_returned_after_the_turn() {
        let mut session = Session::new("Handbuch");
        let mut out = closed_after_header();

        let err = answer(&mut session, &FixedClient, Mode::Stream, "Hi", &mut out)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
        assert_eq!(out.written, b"[assistant] ");
        assert_eq!(session.len(), 3);
        assert_eq!(session.messages()[2], Message::assistant("Hello, world!"));
    }

    #[tokio::test]
    async fn blocking_write_failure_is_returned() {
        let mut session = Session::new("Handbuch");
        let mut out = closed_after_header();

        let err = answer(&mut session, &FixedClient, Mode::Blocking, "Wie viele?", &mut out)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
        assert_eq!(session.messages()[2], Message::assistant("Sieben."));
    }
}
