//! Paged icon-grid layout.
//!
//! [`GridLayoutManager`] owns a paged `rows × columns` occupancy grid and
//! assigns collision-free positions to items: apps cover a single cell,
//! folders cover a 2×2 block.  Pages are appended when no existing page
//! has room; within a page, placement follows a row-major first-fit scan,
//! so a given item order always produces the same layout.
//!
//! The manager also answers the reverse question a drag gesture needs:
//! which cell is under the pointer right now ([`find_drop_target`]).
//!
//! All methods are synchronous and must be called from one thread; the
//! host UI serializes calls through its event loop.  Snapshots returned
//! from queries are clones — mutating them does not touch manager state.
//!
//! [`find_drop_target`]: GridLayoutManager::find_drop_target

use crate::config::Metrics;
use crate::item::{Footprint, GridItem, GridPosition, ItemKind, ItemSpec, Slot};
use std::collections::{HashMap, HashSet};

/// Errors from grid placement.
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    /// The id is already placed; re-adding it would double-book its cells.
    #[error("item {0:?} is already placed")]
    DuplicateItem(String),
}

/// One page's worth of cells, indexed `[row][col]`.  A cell holds the id
/// of the item whose footprint covers it, or `None` when empty.
type PageCells = Vec<Vec<Option<String>>>;

/// A paged occupancy grid for launcher items.
///
/// Invariant: the occupancy grid and the item map always agree — a cell
/// holds an id exactly when that item's footprint covers the cell starting
/// at its recorded position.  Every committed placement occupies a fully
/// in-bounds, fully-empty rectangle; relocation clears the old rectangle
/// before writing the new one.
///
/// The manager is a plain owned value, not a singleton: a host may run
/// independent managers per launcher surface (e.g. an edit-mode preview
/// next to the live grid).
#[derive(Debug, Clone)]
pub struct GridLayoutManager {
    metrics: Metrics,
    /// `[page][row][col]` occupancy.  Never empty — there is always at
    /// least one page.
    pages: Vec<PageCells>,
    /// `id -> item`.  Positions here are the source the grid cells mirror.
    items: HashMap<String, GridItem>,
}

impl GridLayoutManager {
    /// Create an empty manager with exactly one page.
    ///
    /// `metrics` carries the screen width sampled by the caller; the
    /// manager never re-samples it.  A rotated or resized host constructs
    /// a new manager and replays its item list.
    pub fn new(metrics: Metrics) -> Self {
        let mut manager = Self {
            metrics,
            pages: Vec::new(),
            items: HashMap::new(),
        };
        manager.pages.push(manager.blank_page());
        manager
    }

    //  Accessors

    /// The frozen geometry this manager was built with.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Number of currently allocated pages.  Grows monotonically except
    /// across a [`reorganize`](Self::reorganize) reset.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Snapshot of one item, if present.
    pub fn item(&self, id: &str) -> Option<GridItem> {
        self.items.get(id).cloned()
    }

    /// Snapshot of every item on `page`.  No ordering guarantee.
    pub fn items_for_page(&self, page: usize) -> Vec<GridItem> {
        self.items
            .values()
            .filter(|item| item.position.page == page)
            .cloned()
            .collect()
    }

    /// Snapshot of every item.  No ordering guarantee.
    pub fn all_items(&self) -> Vec<GridItem> {
        self.items.values().cloned().collect()
    }

    /// The id occupying a cell, if any.
    pub fn occupant(&self, slot: Slot) -> Option<&str> {
        self.pages
            .get(slot.page)?
            .get(slot.row)?
            .get(slot.col)?
            .as_deref()
    }

    /// Resolve pointer coordinates to the cell under them.
    ///
    /// Pure coordinate resolution — occupancy is not checked, and the
    /// resolved page may exceed [`page_count`](Self::page_count).  Callers
    /// verify availability separately (see
    /// [`would_accept`](Self::would_accept)) before treating the result as
    /// a valid drop.
    pub fn find_drop_target(&self, x: f64, y: f64) -> Option<Slot> {
        self.metrics.slot_at(x, y)
    }

    /// Whether dropping `app_id` onto `target_id` may open the
    /// folder-creation flow.
    ///
    /// True only for two distinct, existing items that are both apps.
    /// Merging into an existing folder is a different flow and is not
    /// authorized by this check.
    pub fn can_create_folder(&self, app_id: &str, target_id: &str) -> bool {
        if app_id == target_id {
            return false;
        }
        matches!(
            (self.items.get(app_id), self.items.get(target_id)),
            (Some(a), Some(b)) if a.kind == ItemKind::App && b.kind == ItemKind::App
        )
    }

    /// Would [`move_item`](Self::move_item) to `slot` succeed for `id`?
    ///
    /// True when the item exists and its footprint rectangle at `slot` is
    /// fully in-bounds of an existing page with every covered cell either
    /// empty or occupied by `id` itself (a move clears the item's own
    /// cells first, so overlapping oneself is legal).
    pub fn would_accept(&self, id: &str, slot: Slot) -> bool {
        let Some(item) = self.items.get(id) else {
            return false;
        };
        let footprint = item.kind.footprint();
        if !self.region_in_bounds(slot, footprint) {
            return false;
        }
        self.region_cells(slot, footprint)
            .all(|cell| match self.occupant(cell) {
                Some(owner) => owner == id,
                None => true,
            })
    }

    //  Placement

    /// Place a new item and return its committed position.
    ///
    /// The footprint is derived from `kind`.  A `preferred` slot is
    /// honored iff its footprint rectangle is fully in-bounds of an
    /// existing page and fully empty; otherwise placement falls back to a
    /// row-major, page-ascending first-fit scan.  When no page has room,
    /// exactly one new page is appended and the item lands at its origin —
    /// adding never fails for lack of space.
    ///
    /// Re-adding an existing id is rejected with
    /// [`PlacementError::DuplicateItem`] and leaves the grid untouched.
    pub fn add_item(
        &mut self,
        id: &str,
        kind: ItemKind,
        preferred: Option<Slot>,
    ) -> Result<GridPosition, PlacementError> {
        if self.items.contains_key(id) {
            return Err(PlacementError::DuplicateItem(id.to_string()));
        }
        let footprint = kind.footprint();

        let slot = match preferred {
            Some(slot) if self.region_is_free(slot, footprint) => slot,
            _ => match self.first_fit(footprint) {
                Some(slot) => slot,
                None => {
                    let page = self.blank_page();
                    self.pages.push(page);
                    Slot {
                        page: self.pages.len() - 1,
                        row: 0,
                        col: 0,
                    }
                }
            },
        };

        self.fill_region(slot, footprint, Some(id));
        let position = self.position_for(slot);
        self.items.insert(
            id.to_string(),
            GridItem {
                id: id.to_string(),
                kind,
                position: position.clone(),
            },
        );
        Ok(position)
    }

    /// Remove an item, clearing every cell it occupies.
    ///
    /// Scans the whole grid rather than trusting the recorded position, so
    /// removal stays fully effective even if bookkeeping ever drifted.
    /// Silent no-op for unknown ids.
    pub fn remove_item(&mut self, id: &str) {
        for page in &mut self.pages {
            for row in page {
                for cell in row {
                    if cell.as_deref() == Some(id) {
                        *cell = None;
                    }
                }
            }
        }
        self.items.remove(id);
    }

    /// Relocate an item to the cell at `(page, row, col)`.
    ///
    /// The item's cells are cleared first, then the target rectangle
    /// (using the item's existing footprint) is checked: fully in-bounds
    /// of an *existing* page — moves never create pages — and fully empty.
    /// On success the position is committed (pixel coordinates recomputed)
    /// and `true` is returned.  On failure the previous occupancy is
    /// restored exactly and `false` is returned: a failed move is a
    /// complete no-op, and callers may rely on that.
    pub fn move_item(&mut self, id: &str, page: usize, row: usize, col: usize) -> bool {
        let (footprint, old_slot) = match self.items.get(id) {
            Some(item) => (item.kind.footprint(), item.position.slot()),
            None => return false,
        };
        let target = Slot { page, row, col };

        self.fill_region(old_slot, footprint, None);
        if !self.region_is_free(target, footprint) {
            self.fill_region(old_slot, footprint, Some(id));
            return false;
        }

        self.fill_region(target, footprint, Some(id));
        let position = self.position_for(target);
        if let Some(item) = self.items.get_mut(id) {
            item.position = position;
        }
        true
    }

    /// Rebuild the whole layout from the authoritative, externally-ordered
    /// item list.
    ///
    /// Discards all pages and items, reinitializes to one empty page, and
    /// places each entry in sequence with no preferred position — the
    /// result is a pure function of the input order and the metrics, so
    /// the same list always maps to the same layout.
    ///
    /// A duplicate id in the input is rejected up front; the existing
    /// layout is untouched when the input is invalid.
    pub fn reorganize(
        &mut self,
        items: &[ItemSpec],
    ) -> Result<HashMap<String, GridPosition>, PlacementError> {
        let mut seen = HashSet::with_capacity(items.len());
        for spec in items {
            if !seen.insert(spec.id.as_str()) {
                return Err(PlacementError::DuplicateItem(spec.id.clone()));
            }
        }

        self.items.clear();
        self.pages.clear();
        let page = self.blank_page();
        self.pages.push(page);

        let mut positions = HashMap::with_capacity(items.len());
        for spec in items {
            let position = self.add_item(&spec.id, spec.kind, None)?;
            positions.insert(spec.id.clone(), position);
        }
        Ok(positions)
    }

    //  Internal

    /// A fresh all-empty page.
    fn blank_page(&self) -> PageCells {
        vec![vec![None; self.metrics.columns()]; self.metrics.rows()]
    }

    /// Whether a footprint rectangle starting at `slot` lies fully inside
    /// an existing page.
    fn region_in_bounds(&self, slot: Slot, footprint: Footprint) -> bool {
        slot.page < self.pages.len()
            && slot.row + footprint.height <= self.metrics.rows()
            && slot.col + footprint.width <= self.metrics.columns()
    }

    /// Every cell a footprint rectangle at `slot` covers.  Only meaningful
    /// when the region is in bounds.
    fn region_cells(&self, slot: Slot, footprint: Footprint) -> impl Iterator<Item = Slot> {
        (slot.row..slot.row + footprint.height).flat_map(move |row| {
            (slot.col..slot.col + footprint.width).map(move |col| Slot {
                page: slot.page,
                row,
                col,
            })
        })
    }

    /// Whether the footprint rectangle at `slot` is fully in-bounds and
    /// fully empty.
    fn region_is_free(&self, slot: Slot, footprint: Footprint) -> bool {
        self.region_in_bounds(slot, footprint)
            && self
                .region_cells(slot, footprint)
                .all(|cell| self.occupant(cell).is_none())
    }

    /// Write `value` into every cell of the footprint rectangle at `slot`.
    fn fill_region(&mut self, slot: Slot, footprint: Footprint, value: Option<&str>) {
        for row in slot.row..slot.row + footprint.height {
            for col in slot.col..slot.col + footprint.width {
                self.pages[slot.page][row][col] = value.map(str::to_string);
            }
        }
    }

    /// First slot whose footprint rectangle is free, scanning pages in
    /// increasing order and each page row-major.
    fn first_fit(&self, footprint: Footprint) -> Option<Slot> {
        for page in 0..self.pages.len() {
            for row in 0..self.metrics.rows() {
                for col in 0..self.metrics.columns() {
                    let slot = Slot { page, row, col };
                    if self.region_is_free(slot, footprint) {
                        return Some(slot);
                    }
                }
            }
        }
        None
    }

    /// Build the committed position for `slot`, pixel origin included.
    fn position_for(&self, slot: Slot) -> GridPosition {
        let (x, y) = self.metrics.cell_origin(slot);
        GridPosition {
            page: slot.page,
            row: slot.row,
            col: slot.col,
            x,
            y,
        }
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    /// 4 columns × 6 rows on a 400px screen: cell 92×92, origin (16, 64).
    fn manager() -> GridLayoutManager {
        let metrics = Metrics::new(&GridConfig::default(), 400.0).unwrap();
        GridLayoutManager::new(metrics)
    }

    fn slot(page: usize, row: usize, col: usize) -> Slot {
        Slot { page, row, col }
    }

    /// Verify the occupancy grid and the item map agree exactly: every
    /// item's footprint covers cells holding its id, and no other cell is
    /// occupied.
    fn assert_consistent(m: &GridLayoutManager) {
        let mut expected: HashMap<Slot, &str> = HashMap::new();
        for item in m.items.values() {
            for cell in m.region_cells(item.position.slot(), item.kind.footprint()) {
                let prior = expected.insert(cell, item.id.as_str());
                assert!(prior.is_none(), "items overlap at {}", cell);
            }
        }
        for (page_idx, page) in m.pages.iter().enumerate() {
            for (row_idx, row) in page.iter().enumerate() {
                for (col_idx, cell) in row.iter().enumerate() {
                    let at = slot(page_idx, row_idx, col_idx);
                    assert_eq!(
                        cell.as_deref(),
                        expected.get(&at).copied(),
                        "grid and item map disagree at {}",
                        at
                    );
                }
            }
        }
    }

    #[test]
    fn first_item_lands_at_origin() {
        let mut m = manager();
        let pos = m.add_item("mail", ItemKind::App, None).unwrap();
        assert_eq!(pos.slot(), slot(0, 0, 0));
        assert_eq!((pos.x, pos.y), (16.0, 64.0));
        assert_consistent(&m);
    }

    #[test]
    fn first_fit_is_deterministic_for_mixed_footprints() {
        let mut m = manager();
        let a = m.add_item("a", ItemKind::App, None).unwrap();
        let b = m.add_item("b", ItemKind::Folder, None).unwrap();
        let c = m.add_item("c", ItemKind::App, None).unwrap();
        // A takes the origin; B's 2×2 block cannot start at col 0 (A is in
        // the way) so it starts at col 1; C takes the first cell left in
        // row 0, after B's block.
        assert_eq!(a.slot(), slot(0, 0, 0));
        assert_eq!(b.slot(), slot(0, 0, 1));
        assert_eq!(c.slot(), slot(0, 0, 3));
        assert_consistent(&m);
    }

    #[test]
    fn folder_occupies_four_cells() {
        let mut m = manager();
        m.add_item("stuff", ItemKind::Folder, None).unwrap();
        for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert_eq!(m.occupant(slot(0, row, col)), Some("stuff"));
        }
        assert_eq!(m.occupant(slot(0, 0, 2)), None);
    }

    #[test]
    fn full_page_grows_by_exactly_one() {
        let mut m = manager();
        for i in 0..24 {
            m.add_item(&format!("app-{i}"), ItemKind::App, None).unwrap();
        }
        assert_eq!(m.page_count(), 1);

        let pos = m.add_item("overflow", ItemKind::App, None).unwrap();
        assert_eq!(m.page_count(), 2);
        assert_eq!(pos.slot(), slot(1, 0, 0));
        assert_eq!(pos.x, 400.0 + 16.0);
        assert_consistent(&m);
    }

    #[test]
    fn folder_overflows_while_singles_still_fit() {
        let mut m = manager();
        // Fill rows 0..5 completely; only the last row (4 single cells)
        // stays free, which can never hold a 2×2 block.
        for i in 0..20 {
            m.add_item(&format!("app-{i}"), ItemKind::App, None).unwrap();
        }
        let folder = m.add_item("folder", ItemKind::Folder, None).unwrap();
        assert_eq!(folder.slot(), slot(1, 0, 0));
        assert_eq!(m.page_count(), 2);

        // A later single still lands in page 0's last row.
        let app = m.add_item("late", ItemKind::App, None).unwrap();
        assert_eq!(app.slot(), slot(0, 5, 0));
        assert_consistent(&m);
    }

    #[test]
    fn preferred_slot_is_honored_when_free() {
        let mut m = manager();
        let pos = m
            .add_item("pinned", ItemKind::App, Some(slot(0, 3, 2)))
            .unwrap();
        assert_eq!(pos.slot(), slot(0, 3, 2));
    }

    #[test]
    fn occupied_preferred_slot_falls_back_to_scan() {
        let mut m = manager();
        m.add_item("first", ItemKind::App, Some(slot(0, 3, 2))).unwrap();
        let pos = m
            .add_item("second", ItemKind::App, Some(slot(0, 3, 2)))
            .unwrap();
        assert_eq!(pos.slot(), slot(0, 0, 0));
        assert_consistent(&m);
    }

    #[test]
    fn out_of_bounds_preferred_slot_falls_back_to_scan() {
        let mut m = manager();
        // Page 7 does not exist, and col 3 cannot hold a 2×2 block.
        let pos = m
            .add_item("f1", ItemKind::Folder, Some(slot(7, 0, 0)))
            .unwrap();
        assert_eq!(pos.slot(), slot(0, 0, 0));
        let pos = m
            .add_item("f2", ItemKind::Folder, Some(slot(0, 0, 3)))
            .unwrap();
        assert_eq!(pos.slot(), slot(0, 0, 2));
        assert_consistent(&m);
    }

    #[test]
    fn duplicate_id_is_rejected_without_touching_the_grid() {
        let mut m = manager();
        m.add_item("mail", ItemKind::App, None).unwrap();
        let err = m.add_item("mail", ItemKind::App, None).unwrap_err();
        assert!(matches!(err, PlacementError::DuplicateItem(ref id) if id == "mail"));
        assert_eq!(m.all_items().len(), 1);
        assert_consistent(&m);
    }

    #[test]
    fn removal_clears_every_backing_cell() {
        let mut m = manager();
        m.add_item("stuff", ItemKind::Folder, None).unwrap();
        m.remove_item("stuff");
        for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert_eq!(m.occupant(slot(0, row, col)), None);
        }
        assert!(m.all_items().is_empty());
        assert_consistent(&m);
    }

    #[test]
    fn removing_unknown_id_is_a_noop() {
        let mut m = manager();
        m.add_item("mail", ItemKind::App, None).unwrap();
        m.remove_item("ghost");
        assert_eq!(m.all_items().len(), 1);
        assert_consistent(&m);
    }

    #[test]
    fn move_to_free_cell_updates_position_and_pixels() {
        let mut m = manager();
        m.add_item("mail", ItemKind::App, None).unwrap();
        assert!(m.move_item("mail", 0, 2, 3));
        let item = m.item("mail").unwrap();
        assert_eq!(item.position.slot(), slot(0, 2, 3));
        assert_eq!(item.position.x, 16.0 + 3.0 * 92.0);
        assert_eq!(item.position.y, 64.0 + 2.0 * 92.0);
        assert_eq!(m.occupant(slot(0, 0, 0)), None);
        assert_consistent(&m);
    }

    #[test]
    fn failed_move_is_a_complete_noop() {
        let mut m = manager();
        m.add_item("mover", ItemKind::App, None).unwrap();
        m.add_item("occupant", ItemKind::App, None).unwrap();
        let pages_before = m.pages.clone();
        let items_before = m.items.clone();

        // (0,0,1) is taken by "occupant".
        assert!(!m.move_item("mover", 0, 0, 1));

        assert_eq!(m.pages, pages_before);
        assert_eq!(m.items, items_before);
    }

    #[test]
    fn move_may_overlap_the_items_own_cells() {
        let mut m = manager();
        m.add_item("stuff", ItemKind::Folder, None).unwrap();
        // (0,0,1) overlaps the folder's current 2×2 block; clearing first
        // makes this legal.
        assert!(m.move_item("stuff", 0, 0, 1));
        assert_eq!(m.item("stuff").unwrap().position.slot(), slot(0, 0, 1));
        assert_eq!(m.occupant(slot(0, 0, 0)), None);
        assert_consistent(&m);
    }

    #[test]
    fn move_of_unknown_item_fails() {
        let mut m = manager();
        assert!(!m.move_item("ghost", 0, 0, 0));
    }

    #[test]
    fn move_never_creates_pages() {
        let mut m = manager();
        m.add_item("mail", ItemKind::App, None).unwrap();
        assert!(!m.move_item("mail", 1, 0, 0));
        assert_eq!(m.page_count(), 1);
        assert_eq!(m.item("mail").unwrap().position.slot(), slot(0, 0, 0));
        assert_consistent(&m);
    }

    #[test]
    fn move_rejects_footprint_overflowing_the_page_edge() {
        let mut m = manager();
        m.add_item("stuff", ItemKind::Folder, None).unwrap();
        // A 2×2 block starting in the last column or last row sticks out.
        assert!(!m.move_item("stuff", 0, 0, 3));
        assert!(!m.move_item("stuff", 0, 5, 0));
        assert_consistent(&m);
    }

    #[test]
    fn reorganize_is_a_pure_function_of_input_order() {
        let specs: Vec<ItemSpec> = [
            ("a", ItemKind::App),
            ("b", ItemKind::Folder),
            ("c", ItemKind::App),
            ("d", ItemKind::Folder),
            ("e", ItemKind::App),
        ]
        .into_iter()
        .map(|(id, kind)| ItemSpec {
            id: id.into(),
            kind,
        })
        .collect();

        let mut m1 = manager();
        let mut m2 = manager();
        let first = m1.reorganize(&specs).unwrap();
        let second = m2.reorganize(&specs).unwrap();
        assert_eq!(first, second);
        assert_consistent(&m1);
    }

    #[test]
    fn reorganize_resets_page_count() {
        let mut m = manager();
        for i in 0..30 {
            m.add_item(&format!("app-{i}"), ItemKind::App, None).unwrap();
        }
        assert_eq!(m.page_count(), 2);

        let specs = vec![ItemSpec {
            id: "only".into(),
            kind: ItemKind::App,
        }];
        let positions = m.reorganize(&specs).unwrap();
        assert_eq!(m.page_count(), 1);
        assert_eq!(positions["only"].slot(), slot(0, 0, 0));
        assert_eq!(m.all_items().len(), 1);
        assert_consistent(&m);
    }

    #[test]
    fn reorganize_rejects_duplicates_and_keeps_the_old_layout() {
        let mut m = manager();
        m.add_item("keep", ItemKind::App, None).unwrap();

        let specs = vec![
            ItemSpec {
                id: "x".into(),
                kind: ItemKind::App,
            },
            ItemSpec {
                id: "x".into(),
                kind: ItemKind::App,
            },
        ];
        assert!(m.reorganize(&specs).is_err());
        assert_eq!(m.all_items().len(), 1);
        assert_eq!(m.item("keep").unwrap().position.slot(), slot(0, 0, 0));
        assert_consistent(&m);
    }

    #[test]
    fn drop_target_matches_committed_positions() {
        let mut m = manager();
        let pos = m.add_item("mail", ItemKind::App, Some(slot(0, 4, 2))).unwrap();
        assert_eq!(
            m.find_drop_target(pos.x + 1.0, pos.y + 1.0),
            Some(slot(0, 4, 2))
        );
    }

    #[test]
    fn drop_target_boundaries() {
        let m = manager();
        // Above the search affordance.
        assert_eq!(m.find_drop_target(100.0, 40.0), None);
        // Past the last column's right edge (right padding strip).
        assert_eq!(m.find_drop_target(396.0, 100.0), None);
        // Inside the first cell.
        assert_eq!(m.find_drop_target(20.0, 70.0), Some(slot(0, 0, 0)));
        // Resolution ignores occupancy and page allocation alike.
        assert_eq!(m.find_drop_target(420.0, 70.0), Some(slot(1, 0, 0)));
    }

    #[test]
    fn folder_creation_requires_two_distinct_apps() {
        let mut m = manager();
        m.add_item("a", ItemKind::App, None).unwrap();
        m.add_item("b", ItemKind::App, None).unwrap();
        m.add_item("f", ItemKind::Folder, None).unwrap();

        assert!(m.can_create_folder("a", "b"));
        assert!(!m.can_create_folder("a", "f"));
        assert!(!m.can_create_folder("f", "b"));
        assert!(!m.can_create_folder("a", "a"));
        assert!(!m.can_create_folder("a", "ghost"));
        assert!(!m.can_create_folder("ghost", "b"));
    }

    #[test]
    fn would_accept_mirrors_move_semantics() {
        let mut m = manager();
        m.add_item("stuff", ItemKind::Folder, None).unwrap();
        m.add_item("mail", ItemKind::App, Some(slot(0, 3, 3))).unwrap();

        // Overlapping its own cells is fine; overlapping another item or
        // the page edge is not.
        assert!(m.would_accept("stuff", slot(0, 0, 1)));
        assert!(m.would_accept("stuff", slot(0, 2, 0)));
        assert!(!m.would_accept("stuff", slot(0, 2, 2)), "covers mail");
        assert!(!m.would_accept("stuff", slot(0, 0, 3)), "past the edge");
        assert!(!m.would_accept("stuff", slot(1, 0, 0)), "no such page");
        assert!(!m.would_accept("ghost", slot(0, 0, 0)));
    }

    #[test]
    fn occupancy_stays_consistent_through_a_mixed_sequence() {
        let mut m = manager();
        m.add_item("a", ItemKind::App, None).unwrap();
        assert_consistent(&m);
        m.add_item("f1", ItemKind::Folder, None).unwrap();
        assert_consistent(&m);
        m.add_item("b", ItemKind::App, Some(slot(0, 5, 3))).unwrap();
        assert_consistent(&m);
        assert!(m.move_item("a", 0, 4, 0));
        assert_consistent(&m);
        assert!(!m.move_item("f1", 0, 4, 0), "would cover a");
        assert_consistent(&m);
        m.remove_item("a");
        assert_consistent(&m);
        assert!(m.move_item("f1", 0, 4, 0));
        assert_consistent(&m);
        m.add_item("c", ItemKind::App, None).unwrap();
        assert_consistent(&m);
        m.remove_item("f1");
        assert_consistent(&m);
    }

    #[test]
    fn snapshots_are_copies() {
        let mut m = manager();
        m.add_item("mail", ItemKind::App, None).unwrap();
        let mut snapshot = m.all_items();
        snapshot[0].position.page = 9;
        assert_eq!(m.item("mail").unwrap().position.page, 0);

        let for_page: Vec<GridItem> = m.items_for_page(0);
        assert_eq!(for_page.len(), 1);
        assert!(m.items_for_page(3).is_empty());
    }
}
