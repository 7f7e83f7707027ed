//! Items and positions used throughout launchgrid.
//!
//! This module defines the vocabulary that all components share:
//! [`ItemKind`] distinguishes the two things a launcher places (apps and
//! folders), [`Slot`] / [`GridPosition`] name grid cells with and without
//! their pixel origin, and [`GridItem`] / [`ItemSpec`] carry items across
//! the layout boundary.
//!
//! The layout engine only ever needs an item's `id` and `kind`; the richer
//! payloads (names, icon assets, folder contents) belong to the host UI's
//! data layer and never cross into this crate.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// What an item is, and therefore how many cells it covers.
///
/// An app occupies a single cell; a folder occupies a 2×2 block.  The kind
/// of an item never changes after creation — converting an app into a
/// folder is modelled as removing one item and adding another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemKind {
    App,
    Folder,
}

impl ItemKind {
    /// The cell rectangle this kind of item covers.
    pub fn footprint(self) -> Footprint {
        match self {
            ItemKind::App => Footprint {
                width: 1,
                height: 1,
            },
            ItemKind::Folder => Footprint {
                width: 2,
                height: 2,
            },
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::App => write!(f, "app"),
            ItemKind::Folder => write!(f, "folder"),
        }
    }
}

/// Parse a kind string (case-insensitive; accepts "app", "Folder", "FOLDER", etc.).
fn parse_kind(s: &str) -> Option<ItemKind> {
    let normalized: String = s
        .trim()
        .chars()
        .flat_map(|c| c.to_lowercase())
        .collect();
    match normalized.as_str() {
        "app" => Some(ItemKind::App),
        "folder" => Some(ItemKind::Folder),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for ItemKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_kind(&s).ok_or_else(|| DeError::custom(format!("invalid item kind: {:?}", s)))
    }
}

/// The rectangular cell span an item occupies, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: usize,
    pub height: usize,
}

/// A grid cell addressed by page, row, and column — no pixel information.
///
/// Used for drop targets resolved from pointer coordinates and for
/// preferred placements.  For a multi-cell item the slot names the
/// top-left cell of its footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub page: usize,
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.page, self.row, self.col)
    }
}

/// A committed grid placement: the cell plus its absolute pixel origin.
///
/// `x` / `y` are logical pixels; `x` folds the page index in
/// (`page * screen_width + …`), so positions on later pages lie beyond the
/// first screen's width.  Both are derived deterministically from
/// `(page, row, col)` and the frozen [`Metrics`](crate::config::Metrics) —
/// they are never stored independently of their source cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridPosition {
    pub page: usize,
    pub row: usize,
    pub col: usize,
    /// Absolute x of the cell's top-left corner, in logical pixels.
    pub x: f64,
    /// Absolute y of the cell's top-left corner, in logical pixels.
    pub y: f64,
}

impl GridPosition {
    /// The cell this position was derived from.
    pub fn slot(&self) -> Slot {
        Slot {
            page: self.page,
            row: self.row,
            col: self.col,
        }
    }
}

/// A placed item as the layout engine sees it.
///
/// The footprint is always derived from `kind` rather than stored, so the
/// two can never disagree.  Instances returned from the engine are clones;
/// mutating them does not affect engine state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridItem {
    pub id: String,
    pub kind: ItemKind,
    pub position: GridPosition,
}

impl GridItem {
    /// The cell rectangle this item covers.
    pub fn footprint(&self) -> Footprint {
        self.kind.footprint()
    }
}

/// One element of the authoritative, externally-ordered item list.
///
/// The host UI owns the list (sourced from its persisted app/folder
/// records) and hands it to
/// [`GridLayoutManager::reorganize`](crate::grid::GridLayoutManager::reorganize)
/// whenever it changes shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub id: String,
    pub kind: ItemKind,
}
