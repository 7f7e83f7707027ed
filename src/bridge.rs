//! Line-oriented JSON [`EventSource`] implementation.
//!
//! Reads newline-delimited JSON from any buffered stream — the pipe an
//! embedding runtime hands us, a recorded gesture trace on disk, a test
//! cursor — and parses each line as a [`Command`].
//!
//! # Wire format
//!
//! Every message is a single line of JSON followed by `\n`:
//!
//! ```json
//! {"SetItems":[{"id":"mail","kind":"app"}]}
//! {"DragBegan":{"id":"mail","at":{"x":20.0,"y":70.0}}}
//! {"DragMoved":{"at":"150 300"}}
//! {"DragEnded":{"at":{"x":150.0,"y":300.0}}}
//! "CancelDrag"
//! ```
//!
//! Malformed lines are logged and skipped; a stream full of garbage ends
//! without ever producing a command, but never tears the session down.

use crate::command::Command;
use crate::traits::EventSource;
use log::{debug, error, info};
use std::io::BufRead;
use std::sync::mpsc;

/// An [`EventSource`] that reads newline-delimited JSON commands from a
/// buffered stream until it is exhausted.
pub struct JsonCommandReader<R> {
    reader: R,
}

/// Errors produced by the JSON command reader.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl<R: BufRead> JsonCommandReader<R> {
    /// Wrap a buffered stream.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead + Send> EventSource for JsonCommandReader<R> {
    type Error = BridgeError;

    /// Read lines until the stream is exhausted.
    ///
    /// This method **blocks**.  Run it on a dedicated thread when the
    /// stream is live (e.g. stdin).
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error> {
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                info!("command stream exhausted");
                return Ok(());
            }
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            match serde_json::from_str::<Command>(text) {
                Ok(cmd) => {
                    debug!("received {:?}", cmd);
                    if sink.send(cmd).is_err() {
                        info!("sink closed, shutting down");
                        return Ok(());
                    }
                }
                Err(e) => {
                    error!("bad command: {}: {}", text, e);
                }
            }
        }
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::PointerSample;
    use crate::item::{ItemKind, ItemSpec};
    use std::io::Cursor;

    fn run_over(input: &str) -> Vec<Command> {
        let mut reader = JsonCommandReader::new(Cursor::new(input.to_string()));
        let (tx, rx) = mpsc::channel();
        reader.run(tx).unwrap();
        rx.try_iter().collect()
    }

    #[test]
    fn parses_a_command_stream() {
        let cmds = run_over(concat!(
            r#"{"SetItems":[{"id":"mail","kind":"app"}]}"#,
            "\n",
            r#"{"DragBegan":{"id":"mail","at":"20 70"}}"#,
            "\n",
            r#""CancelDrag""#,
            "\n",
        ));
        assert_eq!(cmds.len(), 3);
        assert_eq!(
            cmds[0],
            Command::SetItems(vec![ItemSpec {
                id: "mail".into(),
                kind: ItemKind::App,
            }])
        );
        assert_eq!(
            cmds[1],
            Command::DragBegan {
                id: "mail".into(),
                at: PointerSample { x: 20.0, y: 70.0 },
            }
        );
        assert_eq!(cmds[2], Command::CancelDrag);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let cmds = run_over(concat!(
            "not json at all\n",
            "\n",
            r#""CancelDrag""#,
            "\n",
        ));
        assert_eq!(cmds, vec![Command::CancelDrag]);
    }

    #[test]
    fn empty_stream_produces_nothing() {
        assert!(run_over("").is_empty());
    }
}
