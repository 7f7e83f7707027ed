//! Core abstractions that decouple the launcher session from any specific
//! host runtime or transport mechanism.
//!
//! Commands flow *in* through an [`EventSource`] (an FFI bridge, a replay
//! file, a test harness, …) and feedback flows *out* through an
//! [`mpsc`](std::sync::mpsc) channel of [`FeedbackEvent`]s.  The
//! [`DragSession`](crate::session::DragSession) only depends on these
//! boundaries; it never talks to a renderer directly.

use crate::command::Command;
use crate::item::{GridPosition, Slot};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::mpsc;

/// Events sent from the [`DragSession`](crate::session::DragSession) to
/// the host UI over an [`mpsc`](std::sync::mpsc) channel.
///
/// The session holds an `Option<mpsc::Sender<FeedbackEvent>>`.  Any
/// listener — the rendering layer, a debug logger, a replay harness — can
/// own the receiving end without being owned by the session.
///
/// The host is responsible for how feedback is presented (highlight
/// styling, drop animations, haptics); the session only describes *what*
/// happened to the layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FeedbackEvent {
    /// The layout was rebuilt from a new authoritative item list; apply
    /// the fresh position map to every rendered element.
    LayoutChanged(HashMap<String, GridPosition>),

    /// The held item currently hovers over a cell it could be dropped
    /// into; highlight that cell.
    Highlight(Slot),

    /// No valid drop cell is under the pointer (or the gesture ended);
    /// remove any highlight.
    ClearHighlight,

    /// A drag committed: the item now occupies the given position.
    ItemMoved { id: String, position: GridPosition },

    /// A drag ended over no valid drop cell; the item stays at its
    /// previous position.
    DragRejected { id: String },
}

/// A source of [`Command`]s.
///
/// Implementations listen on some transport — a pipe from the embedding
/// runtime, a recorded gesture trace, an in-memory channel, … — and
/// forward parsed commands into the provided [`mpsc::Sender`].
///
/// The trait is deliberately transport-agnostic: the session does not
/// know (or care) whether commands come from live touches or a test
/// script.
///
/// # Contract
///
/// * [`run`](EventSource::run) **blocks** until the source is exhausted
///   or an unrecoverable error occurs.
/// * Each received command must be sent through `sink` exactly once.
/// * Implementations must be [`Send`] so they can run on a dedicated
///   thread.
pub trait EventSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start listening and forward every incoming [`Command`] into `sink`.
    ///
    /// This method blocks the calling thread.  To run multiple sources
    /// concurrently, spawn each one on its own thread.
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error>;
}
