//! # Validation Module
//!
//! Input validation utilities for Stocklist.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Command surface (apps/console)                               │
//! │  ├── THIS MODULE: shape validation of records and parameters           │
//! │  └── Rejects malformed generator output before it enters the store     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store transitions (stocklist-core::store)                    │
//! │  ├── Structural invariants only (unique ids, selection ⊆ products)     │
//! │  └── Transitions stay total; they never re-run shape validation        │
//! │                                                                         │
//! │  Defense in depth: malformed input fails loudly at the boundary,       │
//! │  never as corrupt state deep in the derivation pipeline                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use stocklist_core::validation::{validate_item_name, validate_items_per_page};
//!
//! validate_item_name("Office Chair").unwrap();
//! validate_items_per_page(10).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::InventoryItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item id.
///
/// ## Rules
/// - Must not be empty
/// - Must be a valid UUID format
///
/// ## Example
/// ```rust
/// use stocklist_core::validation::validate_item_id;
///
/// assert!(validate_item_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_item_id("not-a-uuid").is_err());
/// ```
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a category name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 100 characters
///
/// The category set itself is open-ended; only the shape is checked.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    let category = category.trim();

    if category.is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if category.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use stocklist_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (out of stock)
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantityInStock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a page size.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// The derivation pipeline tolerates a zero page size (it yields an empty
/// page), but the command surface rejects it up front so a misconfigured
/// caller hears about the mistake instead of staring at a blank table.
pub fn validate_items_per_page(n: usize) -> ValidationResult<()> {
    if n == 0 {
        return Err(ValidationError::MustBePositive {
            field: "itemsPerPage".to_string(),
        });
    }

    Ok(())
}

/// Validates a page number.
///
/// ## Rules
/// - Must be >= 1 (pages are 1-based)
///
/// No upper bound: pages past the end of the filtered set are legal and
/// yield an empty slice.
pub fn validate_page(page: usize) -> ValidationResult<()> {
    if page == 0 {
        return Err(ValidationError::MustBePositive {
            field: "page".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validator
// =============================================================================

/// Validates a whole inventory record.
///
/// Composes the field validators. This is the boundary check applied to
/// generator output and to add/update payloads before they reach the store.
pub fn validate_item(item: &InventoryItem) -> ValidationResult<()> {
    validate_item_id(&item.id)?;
    validate_item_name(&item.name)?;
    validate_category(&item.category)?;
    validate_price_cents(item.price_cents)?;
    validate_stock_quantity(item.quantity_in_stock)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_item() -> InventoryItem {
        InventoryItem {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            name: "Office Chair".to_string(),
            category: "Furniture".to_string(),
            price_cents: 14999,
            quantity_in_stock: 12,
        }
    }

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_item_id("").is_err());
        assert!(validate_item_id("   ").is_err());
        assert!(validate_item_id("not-a-uuid").is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Office Chair").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category("Electronics").is_ok());
        assert!(validate_category("").is_err());
        assert!(validate_category(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_stock_quantity() {
        assert!(validate_stock_quantity(0).is_ok());
        assert!(validate_stock_quantity(100).is_ok());
        assert!(validate_stock_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_items_per_page() {
        assert!(validate_items_per_page(1).is_ok());
        assert!(validate_items_per_page(50).is_ok());
        assert!(validate_items_per_page(0).is_err());
    }

    #[test]
    fn test_validate_page() {
        assert!(validate_page(1).is_ok());
        assert!(validate_page(9999).is_ok()); // past-the-end pages are legal
        assert!(validate_page(0).is_err());
    }

    #[test]
    fn test_validate_item_composes_field_checks() {
        assert!(validate_item(&valid_item()).is_ok());

        let mut bad = valid_item();
        bad.id = "nope".to_string();
        assert!(validate_item(&bad).is_err());

        let mut bad = valid_item();
        bad.price_cents = -1;
        assert!(validate_item(&bad).is_err());

        let mut bad = valid_item();
        bad.name = String::new();
        assert!(validate_item(&bad).is_err());
    }
}
