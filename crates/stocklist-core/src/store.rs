//! # Inventory Store
//!
//! The single source of truth for inventory state.
//!
//! ## State Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory State Operations                           │
//! │                                                                         │
//! │  External Trigger         Mutation Operation       State Change         │
//! │  ────────────────         ──────────────────       ────────────         │
//! │                                                                         │
//! │  Bulk load ─────────────► initialize() ──────────► products = items    │
//! │  Add form submit ───────► add_item() ────────────► products.push       │
//! │  Edit form submit ──────► update_item() ─────────► products[i] = item  │
//! │  Row delete ────────────► delete_item() ─────────► products -= id      │
//! │                                                    selected -= id       │
//! │  Bulk delete ───────────► delete_selected() ─────► products -= sel     │
//! │                                                    selected = {}        │
//! │  Row checkbox ──────────► toggle_selection() ────► selected ^= id      │
//! │  Filter checkbox ───────► set_filter() ──────────► filters[f] ± value  │
//! │  Column header click ───► set_sort() ────────────► sort spec           │
//! │  Pager click ───────────► set_page() ────────────► current page        │
//! │                                                                         │
//! │  NOTE: Every transition is atomic and runs to completion. Derived      │
//! │        views are computed in `views`, never stored here.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `products` ids are unique (`add_item` rejects duplicates)
//! - `selected_ids` ⊆ ids(`products`) after every delete
//! - `current_page` >= 1
//! - An empty accepted-value set is never stored in `filters`: removing the
//!   last value removes the field key, so "no filter" has one representation

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::error::{CoreError, CoreResult};
use crate::types::{InventoryItem, ItemField, SortDirection};

/// Default page size for a fresh store.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Default threshold below which an item is flagged as low inventory.
pub const DEFAULT_LOW_INVENTORY_LIMIT: i64 = 5;

// =============================================================================
// Inventory State
// =============================================================================

/// The canonical mutable inventory state.
///
/// Consumers never reach in and mutate fields directly; every change goes
/// through a named operation below so the invariants hold after each
/// transition. Reads go through the accessors or the `views` module.
#[derive(Debug, Clone)]
pub struct InventoryState {
    /// All inventory records, in insertion order, unique by id.
    products: Vec<InventoryItem>,

    /// Ids of currently selected rows. Always a subset of product ids.
    selected_ids: HashSet<String>,

    /// Per-field accepted filter values. Absent field = no constraint.
    /// Within a field the values OR together; across fields they AND.
    filters: BTreeMap<ItemField, BTreeSet<String>>,

    /// Field the sort stage orders by, if any.
    sort_by: Option<ItemField>,

    /// Direction applied to the sort comparator.
    sort_direction: SortDirection,

    /// Current page, 1-based.
    current_page: usize,

    /// Page size. The pipeline tolerates 0 (empty page).
    items_per_page: usize,

    /// When true, derived views only include items with stock > 0.
    in_stock_only: bool,

    /// Presentation threshold for the low-stock flag. Never feeds the
    /// filter, sort, or pagination stages.
    low_inventory_limit: i64,

    /// Version counter over the filter/sort inputs (products, filters,
    /// sort spec, stock-only flag). The view cache recomputes the
    /// filtered+sorted sequence only when this moves. Pagination and
    /// selection reads are cheap, so they don't participate.
    revision: u64,
}

impl Default for InventoryState {
    fn default() -> Self {
        InventoryState {
            products: Vec::new(),
            selected_ids: HashSet::new(),
            filters: BTreeMap::new(),
            sort_by: None,
            sort_direction: SortDirection::Ascending,
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            in_stock_only: false,
            low_inventory_limit: DEFAULT_LOW_INVENTORY_LIMIT,
            revision: 0,
        }
    }
}

impl InventoryState {
    /// Creates an empty store with default pagination.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Read accessors
    // -------------------------------------------------------------------------

    /// All products, in insertion order.
    #[inline]
    pub fn products(&self) -> &[InventoryItem] {
        &self.products
    }

    /// Number of products in the store (unfiltered).
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the store holds no products.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Ids of the currently selected rows.
    #[inline]
    pub fn selected_ids(&self) -> &HashSet<String> {
        &self.selected_ids
    }

    /// Whether the given id is selected.
    #[inline]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    /// Active filters, keyed by field.
    #[inline]
    pub fn filters(&self) -> &BTreeMap<ItemField, BTreeSet<String>> {
        &self.filters
    }

    /// The active sort field, if any.
    #[inline]
    pub fn sort_by(&self) -> Option<ItemField> {
        self.sort_by
    }

    /// The active sort direction.
    #[inline]
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Current page (1-based).
    #[inline]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Page size.
    #[inline]
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Whether derived views are restricted to in-stock items.
    #[inline]
    pub fn in_stock_only(&self) -> bool {
        self.in_stock_only
    }

    /// Presentation threshold for the low-stock flag.
    #[inline]
    pub fn low_inventory_limit(&self) -> i64 {
        self.low_inventory_limit
    }

    /// Current derivation-input revision. Moves whenever the filtered or
    /// sorted view could have changed.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // -------------------------------------------------------------------------
    // Product mutations
    // -------------------------------------------------------------------------

    /// Replaces `products` wholesale. Intended as a one-time bulk load.
    ///
    /// Selection and filters are deliberately untouched: a reload with the
    /// same ids keeps the user's checkboxes meaningful, and stale selected
    /// ids are harmless (they simply match nothing until the next delete).
    pub fn initialize(&mut self, items: Vec<InventoryItem>) {
        self.products = items;
        self.bump_revision();
    }

    /// Appends a new item.
    ///
    /// Rejects an id already present in the store. Ids come from a UUID v4
    /// generator, so a collision here means the caller re-submitted a record.
    pub fn add_item(&mut self, item: InventoryItem) -> CoreResult<()> {
        if self.products.iter().any(|p| p.id == item.id) {
            return Err(CoreError::DuplicateId { id: item.id });
        }
        self.products.push(item);
        self.bump_revision();
        Ok(())
    }

    /// Replaces the product with a matching id in place.
    ///
    /// Silent no-op when the id is absent: the row may have been deleted
    /// between the edit form opening and submitting.
    pub fn update_item(&mut self, item: InventoryItem) {
        if let Some(existing) = self.products.iter_mut().find(|p| p.id == item.id) {
            *existing = item;
            self.bump_revision();
        }
    }

    /// Removes the product with the given id, if present.
    ///
    /// Also drops the id from the selection set, maintaining
    /// `selected_ids ⊆ ids(products)`.
    pub fn delete_item(&mut self, id: &str) {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.selected_ids.remove(id);
        if self.products.len() != before {
            self.bump_revision();
        }
    }

    /// Removes every product whose id is selected, then clears the selection.
    pub fn delete_selected(&mut self) {
        if self.selected_ids.is_empty() {
            return;
        }
        let selected = std::mem::take(&mut self.selected_ids);
        let before = self.products.len();
        self.products.retain(|p| !selected.contains(&p.id));
        if self.products.len() != before {
            self.bump_revision();
        }
    }

    // -------------------------------------------------------------------------
    // Selection mutations
    // -------------------------------------------------------------------------

    /// Flips membership of `id` in the selection set.
    ///
    /// No existence check against `products`: toggling an unknown id selects
    /// it, which is harmless and matches the checkbox contract (the UI only
    /// renders checkboxes for rows that exist).
    pub fn toggle_selection(&mut self, id: &str) {
        if !self.selected_ids.remove(id) {
            self.selected_ids.insert(id.to_string());
        }
    }

    /// Empties the selection set.
    pub fn clear_selection(&mut self) {
        self.selected_ids.clear();
    }

    // -------------------------------------------------------------------------
    // Filter mutations
    // -------------------------------------------------------------------------

    /// Adds (`checked = true`) or removes (`checked = false`) an accepted
    /// value for a field's filter.
    ///
    /// Removing the last value deletes the field key, so "no filter" and
    /// "empty filter set" are the same state.
    pub fn set_filter(&mut self, field: ItemField, value: &str, checked: bool) {
        if checked {
            self.filters
                .entry(field)
                .or_default()
                .insert(value.to_string());
        } else if let Some(values) = self.filters.get_mut(&field) {
            values.remove(value);
            if values.is_empty() {
                self.filters.remove(&field);
            }
        }
        self.bump_revision();
    }

    /// Removes every active filter.
    pub fn clear_all_filters(&mut self) {
        if !self.filters.is_empty() {
            self.filters.clear();
            self.bump_revision();
        }
    }

    // -------------------------------------------------------------------------
    // Sort mutations
    // -------------------------------------------------------------------------

    /// Sorts by `field`, toggling direction on a repeated click.
    ///
    /// A new field resets the direction to ascending. The current page is
    /// deliberately left alone, matching the table UX where re-sorting keeps
    /// the pager position (even past the end of the new ordering).
    pub fn set_sort(&mut self, field: ItemField) {
        if self.sort_by == Some(field) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_by = Some(field);
            self.sort_direction = SortDirection::Ascending;
        }
        self.bump_revision();
    }

    // -------------------------------------------------------------------------
    // Pagination mutations
    // -------------------------------------------------------------------------

    /// Sets the current page, clamped to a minimum of 1.
    ///
    /// No upper clamping: a page past the end of the filtered set is legal
    /// and yields an empty slice from the pagination stage.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Sets the page size unconditionally.
    ///
    /// Zero is tolerated here (the pipeline yields an empty page); the
    /// command surface validates against it before calling in.
    pub fn set_items_per_page(&mut self, n: usize) {
        self.items_per_page = n;
    }

    // -------------------------------------------------------------------------
    // Flag mutations
    // -------------------------------------------------------------------------

    /// Restricts (or stops restricting) derived views to in-stock items.
    pub fn set_in_stock_only(&mut self, flag: bool) {
        if self.in_stock_only != flag {
            self.in_stock_only = flag;
            self.bump_revision();
        }
    }

    /// Sets the low-inventory presentation threshold.
    ///
    /// Presentation only: no revision bump, because no derived sequence
    /// depends on it.
    pub fn set_low_inventory_limit(&mut self, limit: i64) {
        self.low_inventory_limit = limit;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
