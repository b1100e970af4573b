//! # Inventory Commands
//!
//! The mutation dispatch surface: the contract presentation layers use to
//! request state changes and read derived views.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Caller Action            Command Function         State Change         │
//! │  ─────────────            ────────────────         ────────────         │
//! │                                                                         │
//! │  Startup seed ──────────► load_inventory() ──────► initialize          │
//! │  Add modal submit ──────► add_item() ────────────► products.push       │
//! │  Edit modal submit ─────► update_item() ─────────► products[i] = item  │
//! │  Row delete ────────────► delete_item() ─────────► products -= id      │
//! │  Bulk delete button ────► delete_selected() ─────► products -= sel     │
//! │  Row checkbox ──────────► toggle_selection() ────► selected ^= id      │
//! │  Filter checkbox ───────► set_filter() ──────────► filters[f] ± value  │
//! │  Column header click ───► set_sort() ────────────► sort spec           │
//! │  Pager click ───────────► set_page() ────────────► current page        │
//! │  View table ────────────► get_page() ────────────► (read only)         │
//! │                                                                         │
//! │  NOTE: Every command acquires the inventory mutex, so each transition   │
//! │        is atomic and every read reflects the latest completed one.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutating commands return the refreshed [`PageView`] so callers can
//! re-render without a second round trip.

use serde::{Deserialize, Serialize};
use tracing::debug;

use stocklist_core::validation::{
    validate_item, validate_items_per_page, validate_page,
};
use stocklist_core::{views, InventoryItem, InventoryState, ItemField, SortDirection, ViewCache};

use crate::error::ApiError;
use crate::state::InventoryHandle;

// =============================================================================
// View DTOs
// =============================================================================

/// One table row: the item plus its per-row presentation flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRow {
    /// The inventory record itself.
    #[serde(flatten)]
    pub item: InventoryItem,

    /// Whether the row's checkbox is checked.
    pub selected: bool,

    /// Low-inventory marker (presentation only).
    pub low_stock: bool,
}

/// The current page of the derived view, with everything a table needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    /// Rows on the current page, filtered and sorted.
    pub rows: Vec<PageRow>,

    /// Current page (1-based).
    pub current_page: usize,

    /// Page size.
    pub items_per_page: usize,

    /// Total pages over the filtered set.
    pub total_pages: usize,

    /// Size of the filtered set before pagination.
    pub total_filtered: usize,

    /// Active sort field, if any.
    pub sort_by: Option<ItemField>,

    /// Active sort direction.
    pub sort_direction: SortDirection,

    /// Whether the stock-only restriction is active.
    pub in_stock_only: bool,

    /// Number of selected rows (across all pages).
    pub selected_count: usize,
}

impl PageView {
    /// Captures the current page from state, refreshing the view cache as
    /// needed.
    fn capture(state: &InventoryState, cache: &mut ViewCache) -> Self {
        let total_filtered = cache.filtered_sorted(state).len();
        let total_pages = cache.total_pages(state);
        let rows = cache
            .paginated(state)
            .iter()
            .map(|item| PageRow {
                selected: state.is_selected(&item.id),
                low_stock: views::is_low_stock(item, state),
                item: item.clone(),
            })
            .collect();

        PageView {
            rows,
            current_page: state.current_page(),
            items_per_page: state.items_per_page(),
            total_pages,
            total_filtered,
            sort_by: state.sort_by(),
            sort_direction: state.sort_direction(),
            in_stock_only: state.in_stock_only(),
            selected_count: state.selected_ids().len(),
        }
    }
}

// =============================================================================
// Read Commands
// =============================================================================

/// Reads the current page of the derived view.
pub fn get_page(handle: &InventoryHandle) -> PageView {
    debug!("get_page command");
    handle.with_inventory(PageView::capture)
}

/// Reads the category universe (all products, unfiltered, first-seen order).
pub fn get_categories(handle: &InventoryHandle) -> Vec<String> {
    debug!("get_categories command");
    handle.with_inventory(|state, _| views::category_universe(state))
}

// =============================================================================
// Product Commands
// =============================================================================

/// Bulk-loads generated records into the store, replacing any existing
/// products.
///
/// Every record is shape-validated first; one malformed record rejects the
/// whole load so corrupt data never reaches the derivation pipeline.
///
/// ## Returns
/// The number of records loaded.
pub fn load_inventory(
    handle: &InventoryHandle,
    items: Vec<InventoryItem>,
) -> Result<usize, ApiError> {
    debug!(count = items.len(), "load_inventory command");

    for item in &items {
        validate_item(item)?;
    }

    let count = items.len();
    handle.with_inventory_mut(|state, _| state.initialize(items));
    Ok(count)
}

/// Adds a single item (the add-product modal path).
///
/// Validates the record shape, then rejects duplicate ids.
pub fn add_item(handle: &InventoryHandle, item: InventoryItem) -> Result<PageView, ApiError> {
    debug!(id = %item.id, "add_item command");

    validate_item(&item)?;
    handle.with_inventory_mut(|state, cache| {
        state.add_item(item)?;
        Ok(PageView::capture(state, cache))
    })
}

/// Updates an existing item in place (the edit-product modal path).
///
/// Unknown ids are a silent no-op: the row may have been deleted while the
/// edit modal was open.
pub fn update_item(handle: &InventoryHandle, item: InventoryItem) -> Result<PageView, ApiError> {
    debug!(id = %item.id, "update_item command");

    validate_item(&item)?;
    Ok(handle.with_inventory_mut(|state, cache| {
        state.update_item(item);
        PageView::capture(state, cache)
    }))
}

/// Deletes a single item. Unknown ids no-op.
pub fn delete_item(handle: &InventoryHandle, id: &str) -> PageView {
    debug!(id = %id, "delete_item command");

    handle.with_inventory_mut(|state, cache| {
        state.delete_item(id);
        PageView::capture(state, cache)
    })
}

/// Deletes every selected item and clears the selection.
pub fn delete_selected(handle: &InventoryHandle) -> PageView {
    debug!("delete_selected command");

    handle.with_inventory_mut(|state, cache| {
        state.delete_selected();
        PageView::capture(state, cache)
    })
}

// =============================================================================
// Selection Commands
// =============================================================================

/// Flips the selection checkbox for a row.
pub fn toggle_selection(handle: &InventoryHandle, id: &str) -> PageView {
    debug!(id = %id, "toggle_selection command");

    handle.with_inventory_mut(|state, cache| {
        state.toggle_selection(id);
        PageView::capture(state, cache)
    })
}

/// Clears all selection checkboxes.
pub fn clear_selection(handle: &InventoryHandle) -> PageView {
    debug!("clear_selection command");

    handle.with_inventory_mut(|state, cache| {
        state.clear_selection();
        PageView::capture(state, cache)
    })
}

// =============================================================================
// Filter Commands
// =============================================================================

/// Checks or unchecks one accepted value in a field's filter.
pub fn set_filter(
    handle: &InventoryHandle,
    field: ItemField,
    value: &str,
    checked: bool,
) -> PageView {
    debug!(field = field.as_str(), value = %value, checked, "set_filter command");

    handle.with_inventory_mut(|state, cache| {
        state.set_filter(field, value, checked);
        PageView::capture(state, cache)
    })
}

/// Removes every active filter.
pub fn clear_all_filters(handle: &InventoryHandle) -> PageView {
    debug!("clear_all_filters command");

    handle.with_inventory_mut(|state, cache| {
        state.clear_all_filters();
        PageView::capture(state, cache)
    })
}

// =============================================================================
// Sort & Pagination Commands
// =============================================================================

/// Sorts by a field, toggling direction on a repeated call.
pub fn set_sort(handle: &InventoryHandle, field: ItemField) -> PageView {
    debug!(field = field.as_str(), "set_sort command");

    handle.with_inventory_mut(|state, cache| {
        state.set_sort(field);
        PageView::capture(state, cache)
    })
}

/// Moves to a page (1-based). Pages past the end are legal and come back
/// empty; page zero is rejected.
pub fn set_page(handle: &InventoryHandle, page: usize) -> Result<PageView, ApiError> {
    debug!(page, "set_page command");

    validate_page(page)?;
    Ok(handle.with_inventory_mut(|state, cache| {
        state.set_page(page);
        PageView::capture(state, cache)
    }))
}

/// Changes the page size. Zero is rejected at this boundary even though the
/// pipeline itself tolerates it.
pub fn set_items_per_page(handle: &InventoryHandle, n: usize) -> Result<PageView, ApiError> {
    debug!(items_per_page = n, "set_items_per_page command");

    validate_items_per_page(n)?;
    Ok(handle.with_inventory_mut(|state, cache| {
        state.set_items_per_page(n);
        PageView::capture(state, cache)
    }))
}

// =============================================================================
// Flag Commands
// =============================================================================

/// Toggles the global in-stock-only restriction.
pub fn set_in_stock_only(handle: &InventoryHandle, flag: bool) -> PageView {
    debug!(flag, "set_in_stock_only command");

    handle.with_inventory_mut(|state, cache| {
        state.set_in_stock_only(flag);
        PageView::capture(state, cache)
    })
}

/// Adjusts the low-inventory presentation threshold.
pub fn set_low_inventory_limit(handle: &InventoryHandle, limit: i64) -> PageView {
    debug!(limit, "set_low_inventory_limit command");

    handle.with_inventory_mut(|state, cache| {
        state.set_low_inventory_limit(limit);
        PageView::capture(state, cache)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, category: &str, price_cents: i64, stock: i64) -> InventoryItem {
        InventoryItem {
            id: format!("00000000-0000-4000-8000-0000000000{:02}", id.parse::<u32>().unwrap()),
            name: name.to_string(),
            category: category.to_string(),
            price_cents,
            quantity_in_stock: stock,
        }
    }

    fn id(n: u32) -> String {
        format!("00000000-0000-4000-8000-0000000000{:02}", n)
    }

    fn seeded_handle() -> InventoryHandle {
        let handle = InventoryHandle::new();
        load_inventory(
            &handle,
            vec![
                item("1", "Desk", "Furniture", 25000, 4),
                item("2", "Lamp", "Furniture", 4500, 0),
                item("3", "Pen", "Stationery", 199, 80),
                item("4", "Laptop", "Electronics", 99900, 7),
                item("5", "Chair", "Furniture", 12000, 15),
            ],
        )
        .unwrap();
        handle
    }

    #[test]
    fn test_load_inventory_counts_and_pages() {
        let handle = seeded_handle();
        let view = get_page(&handle);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.total_filtered, 5);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn test_load_inventory_rejects_malformed_record() {
        let handle = InventoryHandle::new();
        let mut bad = item("1", "Desk", "Furniture", 25000, 4);
        bad.price_cents = -5;
        assert!(load_inventory(&handle, vec![bad]).is_err());
        // Nothing loaded
        assert_eq!(get_page(&handle).total_filtered, 0);
    }

    #[test]
    fn test_add_item_rejects_duplicate() {
        let handle = seeded_handle();
        let dup = item("1", "Impostor", "Furniture", 100, 1);
        let err = add_item(&handle, dup).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_filter_sort_paginate_flow() {
        let handle = seeded_handle();
        set_filter(&handle, ItemField::Category, "Furniture", true);
        set_sort(&handle, ItemField::Price);
        set_items_per_page(&handle, 2).unwrap();

        let view = get_page(&handle);
        assert_eq!(view.total_filtered, 3);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.rows[0].item.name, "Lamp"); // cheapest first
        assert_eq!(view.rows[1].item.name, "Chair");

        let view = set_page(&handle, 2).unwrap();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].item.name, "Desk");
    }

    #[test]
    fn test_select_and_bulk_delete() {
        let handle = seeded_handle();
        toggle_selection(&handle, &id(1));
        let view = toggle_selection(&handle, &id(3));
        assert_eq!(view.selected_count, 2);

        let view = delete_selected(&handle);
        assert_eq!(view.selected_count, 0);
        assert_eq!(view.total_filtered, 3);
        assert!(view.rows.iter().all(|r| r.item.name != "Desk"));
    }

    #[test]
    fn test_page_zero_rejected_but_past_end_allowed() {
        let handle = seeded_handle();
        assert!(set_page(&handle, 0).is_err());

        let view = set_page(&handle, 99).unwrap();
        assert!(view.rows.is_empty());
        assert_eq!(view.current_page, 99);
    }

    #[test]
    fn test_items_per_page_zero_rejected() {
        let handle = seeded_handle();
        let err = set_items_per_page(&handle, 0).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);
    }

    #[test]
    fn test_in_stock_only_hides_out_of_stock_rows() {
        let handle = seeded_handle();
        let view = set_in_stock_only(&handle, true);
        assert_eq!(view.total_filtered, 4);
        assert!(view.rows.iter().all(|r| r.item.quantity_in_stock > 0));
    }

    #[test]
    fn test_low_stock_flag_changes_without_moving_rows() {
        let handle = seeded_handle();
        let before = get_page(&handle);

        let after = set_low_inventory_limit(&handle, 10);
        let row_ids = |v: &PageView| v.rows.iter().map(|r| r.item.id.clone()).collect::<Vec<_>>();
        assert_eq!(row_ids(&before), row_ids(&after));

        // Desk (stock 4) and Laptop (stock 7) now flagged, Pen (80) not
        let flag_of = |v: &PageView, name: &str| {
            v.rows.iter().find(|r| r.item.name == name).unwrap().low_stock
        };
        assert!(flag_of(&after, "Desk"));
        assert!(flag_of(&after, "Laptop"));
        assert!(!flag_of(&after, "Pen"));
    }

    #[test]
    fn test_get_categories_first_seen_order() {
        let handle = seeded_handle();
        assert_eq!(
            get_categories(&handle),
            vec!["Furniture", "Stationery", "Electronics"]
        );
    }

    #[test]
    fn test_update_item_refreshes_view() {
        let handle = seeded_handle();
        let mut edited = item("2", "Lamp", "Furniture", 4500, 0);
        edited.name = "Desk Lamp".to_string();
        edited.quantity_in_stock = 6;

        let view = update_item(&handle, edited).unwrap();
        let row = view.rows.iter().find(|r| r.item.id == id(2)).unwrap();
        assert_eq!(row.item.name, "Desk Lamp");
        assert_eq!(row.item.quantity_in_stock, 6);
    }

    #[test]
    fn test_page_row_serializes_flattened() {
        let handle = seeded_handle();
        let view = get_page(&handle);
        let json = serde_json::to_value(&view.rows[0]).unwrap();
        // Item fields sit alongside the row flags
        assert!(json["name"].is_string());
        assert!(json["selected"].is_boolean());
        assert!(json["lowStock"].is_boolean());
        assert!(json["priceCents"].is_i64());
    }
}
