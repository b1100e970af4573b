//! # stocklist-core: Pure Business Logic for Stocklist
//!
//! This crate is the **heart** of Stocklist. It contains the inventory
//! state container and its derivation pipeline as pure logic with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stocklist Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation Layer (external)                  │   │
//! │  │    Table ──► Filter checkboxes ──► Pager ──► Add/Edit modal     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ mutation calls / view reads            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Command surface (apps/console)                  │   │
//! │  │    load_inventory, set_filter, set_sort, get_page, ...          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stocklist-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   store   │  │   views   │  │ validation│   │   │
//! │  │   │   Item    │  │   State   │  │  filter   │  │   rules   │   │   │
//! │  │   │   Field   │  │ mutations │  │ sort/page │  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • DETERMINISTIC DERIVED VIEWS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (InventoryItem, ItemField, SortDirection)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`store`] - The inventory state and its mutation operations
//! - [`views`] - The derivation pipeline (filter → sort → paginate)
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every derived view is deterministic - same state
//!    value = same view
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: Prices are cents (i64) to avoid float errors
//! 4. **Total Transitions**: Unknown ids no-op and out-of-range pages
//!    yield empty slices; the only store failure is a duplicate id
//!
//! ## Example Usage
//!
//! ```rust
//! use stocklist_core::store::InventoryState;
//! use stocklist_core::types::{InventoryItem, ItemField};
//! use stocklist_core::views;
//!
//! let mut state = InventoryState::new();
//! state.initialize(vec![InventoryItem {
//!     id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
//!     name: "Office Chair".to_string(),
//!     category: "Furniture".to_string(),
//!     price_cents: 14999,
//!     quantity_in_stock: 12,
//! }]);
//!
//! state.set_filter(ItemField::Category, "Furniture", true);
//! state.set_sort(ItemField::Price);
//!
//! let visible = views::filtered_sorted(&state);
//! assert_eq!(visible.len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;
pub mod views;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stocklist_core::Money` instead of
// `use stocklist_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{InventoryState, DEFAULT_ITEMS_PER_PAGE, DEFAULT_LOW_INVENTORY_LIMIT};
pub use types::{InventoryItem, ItemField, SortDirection};
pub use views::ViewCache;
