//! # Domain Types
//!
//! Core domain types used throughout Stocklist.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  InventoryItem  │   │    ItemField    │   │  SortDirection  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  Id             │   │  Ascending      │       │
//! │  │  name           │   │  Name           │   │  Descending     │       │
//! │  │  category       │   │  Category       │   └─────────────────┘       │
//! │  │  price (Money)  │   │  Price          │                             │
//! │  │  stock (i64)    │   │  QuantityInStock│                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ItemField` is the typed handle the filter and sort stages use to reach
//! into an item: it knows how to stringify a field for substring matching
//! and how to compare two items for ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Inventory Item
// =============================================================================

/// One record in the inventory.
///
/// ## Identity
/// `id` is a UUID v4 string, immutable after creation. Every other field is
/// mutable via `InventoryState::update_item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Unique identifier (UUID v4). Immutable identity.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Category, drawn from an open-ended set of strings.
    pub category: String,

    /// Price in cents (smallest currency unit). Non-negative after validation.
    pub price_cents: i64,

    /// Units currently in stock. Non-negative after validation.
    pub quantity_in_stock: i64,
}

impl InventoryItem {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the item counts as in stock.
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.quantity_in_stock > 0
    }
}

// =============================================================================
// Item Field
// =============================================================================

/// The filterable and sortable fields of an [`InventoryItem`].
///
/// Filters are keyed by field, and the sort spec names one field. Using an
/// enum instead of raw field-name strings means an unknown field cannot
/// reach the pipeline at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemField {
    Id,
    Name,
    Category,
    Price,
    QuantityInStock,
}

impl ItemField {
    /// All fields, in table-column order.
    pub const ALL: [ItemField; 5] = [
        ItemField::Id,
        ItemField::Name,
        ItemField::Category,
        ItemField::Price,
        ItemField::QuantityInStock,
    ];

    /// The wire/display name of the field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ItemField::Id => "id",
            ItemField::Name => "name",
            ItemField::Category => "category",
            ItemField::Price => "price",
            ItemField::QuantityInStock => "quantityInStock",
        }
    }

    /// Whether the field compares numerically when sorting.
    pub const fn is_numeric(&self) -> bool {
        matches!(self, ItemField::Price | ItemField::QuantityInStock)
    }

    /// Canonical stringification of the field's value on `item`.
    ///
    /// The filter stage case-folds this and runs substring matching against
    /// the accepted values. Prices render through [`Money`] ("10.99"), so
    /// filter values like "0.99" behave the way they read.
    pub fn text_of(&self, item: &InventoryItem) -> String {
        match self {
            ItemField::Id => item.id.clone(),
            ItemField::Name => item.name.clone(),
            ItemField::Category => item.category.clone(),
            ItemField::Price => item.price().to_string(),
            ItemField::QuantityInStock => item.quantity_in_stock.to_string(),
        }
    }

    /// Compares two items by this field in ascending order.
    ///
    /// Numeric fields compare numerically; the rest compare as strings.
    /// The caller reverses the result for descending order.
    pub fn compare(&self, a: &InventoryItem, b: &InventoryItem) -> Ordering {
        match self {
            ItemField::Id => a.id.cmp(&b.id),
            ItemField::Name => a.name.cmp(&b.name),
            ItemField::Category => a.category.cmp(&b.category),
            ItemField::Price => a.price_cents.cmp(&b.price_cents),
            ItemField::QuantityInStock => a.quantity_in_stock.cmp(&b.quantity_in_stock),
        }
    }
}

// =============================================================================
// Sort Direction
// =============================================================================

/// Direction applied to the sort stage's comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[inline]
    pub const fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
