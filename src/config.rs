//! Grid configuration and derived geometry.
//!
//! [`GridConfig`] is the tunable, serializable half: cell counts, icon
//! size, paddings.  It can be loaded from a JSON file (`--config <path>`);
//! every field is optional and falls back to its compiled-in default, so a
//! minimal `{}` file is valid.
//!
//! [`Metrics`] is the frozen half: the derived pixel geometry computed
//! once from a config plus the screen width sampled at construction.
//! Horizontal spacing and cell width/height are *derived* values — they
//! cannot be set directly, only influenced through the config.
//!
//! # Example
//!
//! ```json
//! {
//!   "columns": 4,
//!   "rows": 6,
//!   "icon_size": 60.0,
//!   "horizontal_padding": 16.0,
//!   "top_offset": 64.0
//! }
//! ```

use crate::item::Slot;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable layout knobs.
///
/// `rows` counts only the scrollable grid rows — a dock pinned below the
/// grid, if the host UI has one, is not part of this layout.
///
/// `cell_spacing` is the *requested* minimum horizontal gap between icons.
/// The actual gap is derived from the screen width and column count; if it
/// comes out narrower than requested, [`Metrics::new`] logs a warning but
/// proceeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Columns per page.  Default: `4`.
    pub columns: usize,
    /// Rows per page, excluding any reserved dock area.  Default: `6`.
    pub rows: usize,
    /// Rendered size of an app icon, in logical pixels.  Default: `60.0`.
    pub icon_size: f64,
    /// Left/right screen inset, in logical pixels.  Default: `16.0`.
    pub horizontal_padding: f64,
    /// Extra vertical breathing room per row, in logical pixels.
    /// Default: `18.0`.
    pub vertical_padding: f64,
    /// Vertical inset reserved at the top for the search affordance,
    /// in logical pixels.  Default: `64.0`.
    pub top_offset: f64,
    /// Height reserved under each icon for its label, in logical pixels.
    /// Default: `14.0`.
    pub label_height: f64,
    /// Requested minimum horizontal gap between icons, in logical pixels.
    /// Default: `8.0`.
    pub cell_spacing: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            rows: 6,
            icon_size: 60.0,
            horizontal_padding: 16.0,
            vertical_padding: 18.0,
            top_offset: 64.0,
            label_height: 14.0,
            cell_spacing: 8.0,
        }
    }
}

impl GridConfig {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

/// Frozen pixel geometry for one launcher surface.
///
/// Built once from a [`GridConfig`] and the screen width the caller
/// sampled at construction time.  The width is **not** re-sampled on
/// rotation or resize — a host whose dimensions change constructs a new
/// manager and replays its item list.
///
/// Derived values:
///
/// - `cell_width  = (screen_width − 2·horizontal_padding) / columns`
/// - `cell_height = icon_size + label_height + vertical_padding`
/// - `horizontal_spacing = cell_width − icon_size`
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    screen_width: f64,
    columns: usize,
    rows: usize,
    icon_size: f64,
    horizontal_padding: f64,
    top_offset: f64,
    cell_width: f64,
    cell_height: f64,
    horizontal_spacing: f64,
}

impl Metrics {
    /// Validate `config` against `screen_width` and freeze the derived
    /// geometry.
    ///
    /// Fails if the grid cannot hold a 2×2 folder (`columns` or `rows`
    /// below 2), if any size or inset is non-positive where it must not
    /// be, or if the paddings leave no horizontal room for cells.
    pub fn new(config: &GridConfig, screen_width: f64) -> Result<Self, ConfigError> {
        if config.columns < 2 || config.rows < 2 {
            return Err(ConfigError(format!(
                "grid must be at least 2×2 to hold a folder, got {}×{}",
                config.columns, config.rows
            )));
        }
        if !screen_width.is_finite() || screen_width <= 0.0 {
            return Err(ConfigError(format!(
                "screen width must be positive, got {}",
                screen_width
            )));
        }
        if config.icon_size <= 0.0 {
            return Err(ConfigError(format!(
                "icon size must be positive, got {}",
                config.icon_size
            )));
        }
        for (name, value) in [
            ("horizontal_padding", config.horizontal_padding),
            ("vertical_padding", config.vertical_padding),
            ("top_offset", config.top_offset),
            ("label_height", config.label_height),
            ("cell_spacing", config.cell_spacing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        let usable = screen_width - 2.0 * config.horizontal_padding;
        if usable <= 0.0 {
            return Err(ConfigError(format!(
                "horizontal padding {} leaves no room on a {}px screen",
                config.horizontal_padding, screen_width
            )));
        }

        let cell_width = usable / config.columns as f64;
        let cell_height = config.icon_size + config.label_height + config.vertical_padding;
        let horizontal_spacing = cell_width - config.icon_size;

        if horizontal_spacing < config.cell_spacing {
            warn!(
                "derived horizontal spacing {:.1} is below the requested {:.1}",
                horizontal_spacing, config.cell_spacing
            );
        }

        Ok(Self {
            screen_width,
            columns: config.columns,
            rows: config.rows,
            icon_size: config.icon_size,
            horizontal_padding: config.horizontal_padding,
            top_offset: config.top_offset,
            cell_width,
            cell_height,
            horizontal_spacing,
        })
    }

    //  Accessors

    /// Screen width sampled at construction, in logical pixels.
    pub fn screen_width(&self) -> f64 {
        self.screen_width
    }

    /// Columns per page.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Rows per page.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Derived width of one grid cell, in logical pixels.
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Derived height of one grid cell, in logical pixels.
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Derived horizontal gap per cell (`cell_width − icon_size`).
    pub fn horizontal_spacing(&self) -> f64 {
        self.horizontal_spacing
    }

    /// Rendered icon size, in logical pixels.
    pub fn icon_size(&self) -> f64 {
        self.icon_size
    }

    /// Rendered folder size — fixed at 2× the icon footprint in both axes.
    pub fn folder_size(&self) -> f64 {
        2.0 * self.icon_size
    }

    //  Coordinate mapping

    /// Absolute pixel origin (top-left corner) of a cell.
    ///
    /// The page index is folded into `x`, so cells on later pages lie
    /// beyond the first screen's width.
    pub fn cell_origin(&self, slot: Slot) -> (f64, f64) {
        let x = slot.page as f64 * self.screen_width
            + self.horizontal_padding
            + slot.col as f64 * self.cell_width;
        let y = self.top_offset + slot.row as f64 * self.cell_height;
        (x, y)
    }

    /// Resolve absolute pixel coordinates back to the cell containing them.
    ///
    /// Returns `None` when the point lies outside the grid area: above the
    /// top offset, inside the horizontal padding strips, below the last
    /// row, or left of x = 0.  Occupancy is **not** consulted — this is a
    /// coordinate resolver, and the resolved page may exceed the number of
    /// pages currently allocated.
    pub fn slot_at(&self, x: f64, y: f64) -> Option<Slot> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let page = (x / self.screen_width).floor();
        if page < 0.0 {
            return None;
        }
        let local_x = x - page * self.screen_width;
        let col = ((local_x - self.horizontal_padding) / self.cell_width).floor();
        let row = ((y - self.top_offset) / self.cell_height).floor();
        if col < 0.0 || row < 0.0 || col >= self.columns as f64 || row >= self.rows as f64 {
            return None;
        }
        Some(Slot {
            page: page as usize,
            row: row as usize,
            col: col as usize,
        })
    }
}
