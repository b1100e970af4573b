//! # Derived Views
//!
//! Pure projections computed from [`InventoryState`].
//!
//! ## The Derivation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Derivation Pipeline                                  │
//! │                                                                         │
//! │  products ──► Filter stage ──► Sort stage ──► Pagination stage          │
//! │     │         (AND across      (stable,       (1-based slice,          │
//! │     │          fields, OR       field-aware    empty when past          │
//! │     │          within one)      comparator)    the end)                 │
//! │     │                                                                   │
//! │     └────────► Category universe (unfiltered, first-seen order)         │
//! │                                                                         │
//! │  Deterministic: the same state value always yields the same views.     │
//! │  The cache below is a performance device, never a semantic one.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::store::InventoryState;
use crate::types::{InventoryItem, SortDirection};

// =============================================================================
// Filter Stage
// =============================================================================

/// Whether `item` passes every active field filter.
///
/// For each `(field, accepted)` entry the item's stringified field value
/// must contain at least one accepted value, case-insensitively: OR across
/// the accepted values of one field, AND across fields. No filters means
/// everything passes.
pub fn matches_filters(item: &InventoryItem, state: &InventoryState) -> bool {
    state.filters().iter().all(|(field, accepted)| {
        let haystack = field.text_of(item).to_lowercase();
        accepted
            .iter()
            .any(|value| haystack.contains(&value.to_lowercase()))
    })
}

/// Whether `item` passes the stock-only restriction.
///
/// Unconditionally true when the flag is off.
pub fn matches_stock_only(item: &InventoryItem, state: &InventoryState) -> bool {
    !state.in_stock_only() || item.is_in_stock()
}

// =============================================================================
// Filter + Sort
// =============================================================================

/// The filtered, sorted product sequence.
///
/// With no sort field set, the filter-stage order (which is the original
/// product order) is preserved. The sort is stable, so ties keep their
/// relative order from the products sequence.
pub fn filtered_sorted(state: &InventoryState) -> Vec<InventoryItem> {
    let mut result: Vec<InventoryItem> = state
        .products()
        .iter()
        .filter(|p| matches_filters(p, state) && matches_stock_only(p, state))
        .cloned()
        .collect();

    if let Some(field) = state.sort_by() {
        match state.sort_direction() {
            SortDirection::Ascending => result.sort_by(|a, b| field.compare(a, b)),
            SortDirection::Descending => result.sort_by(|a, b| field.compare(b, a)),
        }
    }

    result
}

// =============================================================================
// Pagination Stage
// =============================================================================

/// The slice of `items` belonging to the state's current page.
///
/// Out-of-range pages and a zero page size yield an empty slice, never an
/// error.
pub fn paginate<'a>(items: &'a [InventoryItem], state: &InventoryState) -> &'a [InventoryItem] {
    let per_page = state.items_per_page();
    let start = state
        .current_page()
        .saturating_sub(1)
        .saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(items.len());
    if start >= items.len() {
        &[]
    } else {
        &items[start..end]
    }
}

/// Total page count over `filtered_len` items: `ceil(filtered / per_page)`.
///
/// Zero when the filtered set is empty or the page size is zero.
pub fn total_pages(filtered_len: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    filtered_len.div_ceil(items_per_page)
}

// =============================================================================
// Category Universe
// =============================================================================

/// Distinct category values across all products (unfiltered), in first-seen
/// order. Populates the category filter selector, which must keep offering
/// a category even while a filter on it hides every matching row.
pub fn category_universe(state: &InventoryState) -> Vec<String> {
    let mut seen = Vec::new();
    for product in state.products() {
        if !seen.iter().any(|c: &String| c == &product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

// =============================================================================
// Presentation Flags
// =============================================================================

/// Whether `item` should carry the low-inventory marker.
///
/// Presentation only: the flag never feeds the filter, sort, or pagination
/// stages.
#[inline]
pub fn is_low_stock(item: &InventoryItem, state: &InventoryState) -> bool {
    item.quantity_in_stock <= state.low_inventory_limit()
}

// =============================================================================
// View Cache
// =============================================================================

/// Memoizes the filtered+sorted sequence across reads.
///
/// ## Invalidation
/// Keyed by [`InventoryState::revision`], which every mutation touching the
/// filter/sort inputs bumps. Pagination is a cheap slice over the cached
/// sequence, so page changes don't discard it; selection never feeds the
/// pipeline at all.
///
/// ## Semantics
/// Purely an optimization: readers observe exactly what a fresh
/// [`filtered_sorted`] call would return for the current state.
#[derive(Debug, Default)]
pub struct ViewCache {
    revision: Option<u64>,
    filtered_sorted: Vec<InventoryItem>,
}

impl ViewCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cached sequence is valid for `state`.
    #[inline]
    pub fn is_fresh(&self, state: &InventoryState) -> bool {
        self.revision == Some(state.revision())
    }

    /// The filtered, sorted sequence for `state`, recomputing only when the
    /// state revision has moved since the last call.
    pub fn filtered_sorted(&mut self, state: &InventoryState) -> &[InventoryItem] {
        if !self.is_fresh(state) {
            self.filtered_sorted = filtered_sorted(state);
            self.revision = Some(state.revision());
        }
        &self.filtered_sorted
    }

    /// The current page of the filtered, sorted sequence.
    pub fn paginated(&mut self, state: &InventoryState) -> &[InventoryItem] {
        // Split borrow: refresh first, then slice the cached sequence.
        self.filtered_sorted(state);
        paginate(&self.filtered_sorted, state)
    }

    /// Total pages for the current filtered set and page size.
    pub fn total_pages(&mut self, state: &InventoryState) -> usize {
        let filtered_len = self.filtered_sorted(state).len();
        total_pages(filtered_len, state.items_per_page())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemField;

    fn item(id: &str, name: &str, category: &str, price_cents: i64, stock: i64) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price_cents,
            quantity_in_stock: stock,
        }
    }

    fn seeded() -> InventoryState {
        let mut state = InventoryState::new();
        state.initialize(vec![
            item("1", "Desk", "Furniture", 25000, 4),
            item("2", "Lamp", "Furniture", 4500, 0),
            item("3", "Pen", "Stationery", 199, 80),
            item("4", "Laptop", "Electronics", 99900, 7),
            item("5", "Chair", "Furniture", 12000, 15),
        ]);
        state
    }

    fn ids(items: &[InventoryItem]) -> Vec<&str> {
        items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_no_filters_passes_everything_in_order() {
        let state = seeded();
        assert_eq!(ids(&filtered_sorted(&state)), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_filter_or_within_field() {
        let mut state = InventoryState::new();
        state.initialize(vec![
            item("1", "One", "A", 100, 1),
            item("2", "Two", "B", 100, 1),
            item("3", "Three", "C", 100, 1),
        ]);
        state.set_filter(ItemField::Category, "A", true);
        state.set_filter(ItemField::Category, "B", true);

        assert_eq!(ids(&filtered_sorted(&state)), vec!["1", "2"]);
    }

    #[test]
    fn test_filter_and_across_fields_narrows() {
        let mut state = seeded();
        state.set_filter(ItemField::Category, "Furniture", true);
        assert_eq!(ids(&filtered_sorted(&state)), vec!["1", "2", "5"]);

        // Second field filter ANDs in
        state.set_filter(ItemField::Name, "Lamp", true);
        assert_eq!(ids(&filtered_sorted(&state)), vec!["2"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut state = seeded();
        state.set_filter(ItemField::Name, "lAmP", true);
        assert_eq!(ids(&filtered_sorted(&state)), vec!["2"]);

        let mut state = seeded();
        state.set_filter(ItemField::Name, "a", true);
        // Substring: Lamp, Laptop, Chair
        assert_eq!(ids(&filtered_sorted(&state)), vec!["2", "4", "5"]);
    }

    #[test]
    fn test_filter_matches_price_rendering() {
        let mut state = seeded();
        // Lamp is 4500 cents, rendered "45.00"
        state.set_filter(ItemField::Price, "45.00", true);
        assert_eq!(ids(&filtered_sorted(&state)), vec!["2"]);
    }

    #[test]
    fn test_stock_only_restricts_to_positive_stock() {
        let mut state = seeded();
        state.set_in_stock_only(true);
        assert_eq!(ids(&filtered_sorted(&state)), vec!["1", "3", "4", "5"]);
    }

    #[test]
    fn test_sort_by_price_ascending_then_descending() {
        let mut state = seeded();
        state.set_sort(ItemField::Price);
        assert_eq!(ids(&filtered_sorted(&state)), vec!["3", "2", "5", "1", "4"]);

        state.set_sort(ItemField::Price);
        assert_eq!(ids(&filtered_sorted(&state)), vec!["4", "1", "5", "2", "3"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut state = InventoryState::new();
        state.initialize(vec![
            item("1", "A", "X", 1000, 1),
            item("2", "B", "X", 1000, 1),
            item("3", "C", "X", 500, 1),
        ]);
        state.set_sort(ItemField::Price);
        // Ties (1, 2) preserve original relative order
        assert_eq!(ids(&filtered_sorted(&state)), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_sort_by_name_is_string_ordering() {
        let mut state = seeded();
        state.set_sort(ItemField::Name);
        assert_eq!(ids(&filtered_sorted(&state)), vec!["5", "1", "2", "4", "3"]);
    }

    #[test]
    fn test_paginate_slices_current_page() {
        let mut state = seeded();
        state.set_items_per_page(2);
        let all = filtered_sorted(&state);

        state.set_page(1);
        assert_eq!(ids(paginate(&all, &state)), vec!["1", "2"]);
        state.set_page(2);
        assert_eq!(ids(paginate(&all, &state)), vec!["3", "4"]);
        state.set_page(3);
        assert_eq!(ids(paginate(&all, &state)), vec!["5"]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let mut state = seeded();
        state.set_items_per_page(2);
        state.set_page(99);
        let all = filtered_sorted(&state);
        assert!(paginate(&all, &state).is_empty());
    }

    #[test]
    fn test_paginate_zero_page_size_is_empty() {
        let mut state = seeded();
        state.set_items_per_page(0);
        let all = filtered_sorted(&state);
        assert!(paginate(&all, &state).is_empty());
        assert_eq!(total_pages(all.len(), 0), 0);
    }

    #[test]
    fn test_pagination_round_trip_count() {
        // count(paginated) == min(per_page, max(0, filtered - (page-1)*per_page))
        let mut state = seeded();
        for per_page in [1usize, 2, 3, 10] {
            state.set_items_per_page(per_page);
            for page in 1usize..=4 {
                state.set_page(page);
                let all = filtered_sorted(&state);
                let expected = per_page.min(all.len().saturating_sub((page - 1) * per_page));
                assert_eq!(paginate(&all, &state).len(), expected);
            }
        }
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(4, 2), 2);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_category_universe_first_seen_order_unfiltered() {
        let mut state = seeded();
        // A filter that hides all Furniture must not shrink the universe
        state.set_filter(ItemField::Category, "Stationery", true);
        assert_eq!(
            category_universe(&state),
            vec!["Furniture", "Stationery", "Electronics"]
        );
    }

    #[test]
    fn test_low_stock_flag_is_presentation_only() {
        let mut state = seeded();
        state.set_sort(ItemField::Price);
        let before = filtered_sorted(&state);

        state.set_low_inventory_limit(1000);
        let after = filtered_sorted(&state);
        assert_eq!(before, after);

        assert!(is_low_stock(&state.products()[0], &state)); // stock 4 <= 1000
        state.set_low_inventory_limit(3);
        assert!(!is_low_stock(&state.products()[0], &state)); // stock 4 > 3
    }

    #[test]
    fn test_cache_refreshes_on_revision_moves() {
        let mut state = seeded();
        let mut cache = ViewCache::new();

        assert!(!cache.is_fresh(&state));
        assert_eq!(cache.filtered_sorted(&state).len(), 5);
        assert!(cache.is_fresh(&state));

        // Selection doesn't invalidate
        state.toggle_selection("1");
        assert!(cache.is_fresh(&state));

        // A filter does
        state.set_filter(ItemField::Category, "Furniture", true);
        assert!(!cache.is_fresh(&state));
        assert_eq!(cache.filtered_sorted(&state).len(), 3);
        assert!(cache.is_fresh(&state));
    }

    #[test]
    fn test_cache_views_match_fresh_derivation() {
        let mut state = seeded();
        let mut cache = ViewCache::new();
        state.set_filter(ItemField::Category, "Furniture", true);
        state.set_sort(ItemField::Price);
        state.set_items_per_page(2);
        state.set_page(2);

        assert_eq!(cache.filtered_sorted(&state), &filtered_sorted(&state)[..]);
        assert_eq!(
            ids(cache.paginated(&state)),
            ids(paginate(&filtered_sorted(&state), &state))
        );
        assert_eq!(cache.total_pages(&state), 2);
    }

    #[test]
    fn test_page_change_keeps_cache_fresh() {
        let mut state = seeded();
        let mut cache = ViewCache::new();
        cache.filtered_sorted(&state);

        state.set_page(2);
        state.set_items_per_page(3);
        assert!(cache.is_fresh(&state));
        // Paginated view still tracks the new page parameters
        assert_eq!(ids(cache.paginated(&state)), vec!["4", "5"]);
    }
}
