//! **launchgrid** — a paged icon-grid layout engine for draggable app
//! launchers.
//!
//! Items are arranged on a paged `rows × columns` grid: apps occupy a
//! single cell, folders a 2×2 block.  Placement is deterministic (a
//! row-major, page-ascending first-fit scan), pages are appended when a
//! page fills up, and live pointer coordinates resolve back to grid cells
//! for drag-and-drop.
//!
//! # Architecture
//!
//! The crate is organised around two boundaries:
//!
//! * [`traits::EventSource`] — abstracts the transport that delivers
//!   user intent (an FFI bridge, a recorded trace, a test harness, …) so
//!   the session is not coupled to any specific host runtime.
//! * [`traits::FeedbackEvent`] — the outbound channel vocabulary the host
//!   UI consumes to render layout changes and drag highlights; rendering
//!   itself never happens in this crate.
//!
//! [`grid::GridLayoutManager`] is the core: it owns the occupancy grid
//! and answers every placement and lookup query.
//! [`session::DragSession`] drives it from incoming [`command::Command`]s.

pub mod bridge;
pub mod command;
pub mod config;
pub mod grid;
pub mod item;
pub mod session;
pub mod traits;
