//! The orchestrator that ties the layout engine to the host UI's
//! gestures.
//!
//! [`DragSession`] owns the [`GridLayoutManager`] and reacts to
//! [`Command`]s: list changes rebuild the layout, pointer movement during
//! a drag produces highlight feedback for the prospective drop cell, and
//! a release commits the move — or leaves everything untouched when the
//! drop is invalid.

use crate::command::Command;
use crate::config::Metrics;
use crate::grid::{GridLayoutManager, PlacementError};
use crate::item::GridItem;
use crate::traits::FeedbackEvent;
use log::{debug, info, warn};
use std::sync::mpsc;

/// Possible errors from the session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The layout engine rejected the input (e.g. a duplicate id in the
    /// authoritative item list).
    #[error("layout error: {0}")]
    Layout(#[from] PlacementError),
}

/// State of an in-flight drag gesture.
#[derive(Debug)]
struct ActiveDrag {
    id: String,
}

/// Orchestrates the launcher grid against incoming gesture commands.
///
/// The session is synchronous and single-threaded like the manager it
/// owns; the host serializes commands through its event loop (or an
/// [`EventSource`](crate::traits::EventSource) thread feeding a channel).
///
/// # Typical usage
///
/// ```ignore
/// let metrics = Metrics::new(&config, screen_width)?;
/// let mut session = DragSession::new(metrics);
/// session.handle(Command::SetItems(items))?;
/// ```
pub struct DragSession {
    layout: GridLayoutManager,
    feedback_tx: Option<mpsc::Sender<FeedbackEvent>>,
    active_drag: Option<ActiveDrag>,
}

impl DragSession {
    /// Create a session with an empty single-page layout.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            layout: GridLayoutManager::new(metrics),
            feedback_tx: None,
            active_drag: None,
        }
    }

    /// Attach a feedback event channel.
    ///
    /// The session will send:
    ///
    /// - [`FeedbackEvent::LayoutChanged`] after every
    ///   [`Command::SetItems`]
    /// - [`FeedbackEvent::Highlight`] / [`FeedbackEvent::ClearHighlight`]
    ///   while a drag is in flight
    /// - [`FeedbackEvent::ItemMoved`] / [`FeedbackEvent::DragRejected`]
    ///   when a gesture ends
    ///
    /// The receiver end can be owned by any independent listener; how
    /// feedback is presented is entirely the host's business.
    pub fn set_feedback(&mut self, tx: mpsc::Sender<FeedbackEvent>) {
        self.feedback_tx = Some(tx);
    }

    /// Shared access to the underlying layout.
    pub fn layout(&self) -> &GridLayoutManager {
        &self.layout
    }

    /// Process a single [`Command`].
    pub fn handle(&mut self, cmd: Command) -> Result<(), SessionError> {
        match cmd {
            Command::SetItems(items) => {
                if self.active_drag.take().is_some() {
                    warn!("item list changed mid-drag, abandoning the gesture");
                    self.emit(FeedbackEvent::ClearHighlight);
                }
                let positions = self.layout.reorganize(&items)?;
                info!(
                    "rebuilt layout: {} items across {} page(s)",
                    positions.len(),
                    self.layout.page_count()
                );
                self.emit(FeedbackEvent::LayoutChanged(positions));
            }

            Command::DragBegan { id, at } => {
                if self.layout.item(&id).is_none() {
                    warn!("drag began for unknown item {:?}, ignoring", id);
                    return Ok(());
                }
                info!("drag began: {:?}", id);
                self.active_drag = Some(ActiveDrag { id });
                self.update_highlight(at.x, at.y);
            }

            Command::DragMoved { at } => {
                if self.active_drag.is_none() {
                    debug!("pointer moved with no drag in flight, ignoring");
                    return Ok(());
                }
                debug!("drag moved to ({:.1}, {:.1})", at.x, at.y);
                self.update_highlight(at.x, at.y);
            }

            Command::DragEnded { at } => {
                let Some(drag) = self.active_drag.take() else {
                    debug!("drag ended with no drag in flight, ignoring");
                    return Ok(());
                };
                self.commit_drop(drag.id, at.x, at.y);
                self.emit(FeedbackEvent::ClearHighlight);
            }

            Command::CancelDrag => {
                if let Some(drag) = self.active_drag.take() {
                    info!("drag cancelled: {:?}", drag.id);
                    self.emit(FeedbackEvent::ClearHighlight);
                }
            }
        }
        Ok(())
    }

    //  Gesture helpers

    /// Emit highlight feedback for the cell under the pointer, or clear
    /// it when no acceptable drop cell is there.
    fn update_highlight(&mut self, x: f64, y: f64) {
        let Some(drag) = &self.active_drag else {
            return;
        };
        match self.layout.find_drop_target(x, y) {
            Some(slot) if self.layout.would_accept(&drag.id, slot) => {
                self.emit(FeedbackEvent::Highlight(slot));
            }
            _ => self.emit(FeedbackEvent::ClearHighlight),
        }
    }

    /// Resolve the release point and commit the move if the target region
    /// is available; the layout stays untouched otherwise.
    fn commit_drop(&mut self, id: String, x: f64, y: f64) {
        let moved = match self.layout.find_drop_target(x, y) {
            Some(slot) => self.layout.move_item(&id, slot.page, slot.row, slot.col),
            None => false,
        };
        if moved {
            // The manager just committed the position; the lookup cannot
            // miss unless the id was removed concurrently, which the
            // threading model rules out.
            if let Some(GridItem { position, .. }) = self.layout.item(&id) {
                info!("drag committed: {:?} -> {}", id, position.slot());
                self.emit(FeedbackEvent::ItemMoved { id, position });
            }
        } else {
            info!("drag rejected: {:?} stays put", id);
            self.emit(FeedbackEvent::DragRejected { id });
        }
    }

    /// Send a feedback event, if a channel is attached.
    fn emit(&self, event: FeedbackEvent) {
        if let Some(tx) = &self.feedback_tx {
            let _ = tx.send(event);
        }
    }
}

//  Tests
