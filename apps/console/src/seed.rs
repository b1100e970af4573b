//! # Seed Data Generator
//!
//! Produces synthetic inventory records for seeding the store.
//!
//! ## Generated Records
//! Each record has:
//! - Unique id: UUID v4
//! - Category: one of five fixed categories
//! - Name: `{category} Product {n}`
//! - Random price: 10.00 - 1009.99
//! - Random stock: 0 - 99
//!
//! ## Randomness Source
//! Every record already carries 122 random bits in its UUID v4, so the
//! category, price, and stock derive from those bytes instead of pulling in
//! an RNG dependency. The shape is deterministic; the values are not.

use stocklist_core::InventoryItem;
use uuid::Uuid;

/// Categories for generated records.
const CATEGORIES: &[&str] = &[
    "Electronics",
    "Furniture",
    "Groceries",
    "Clothing",
    "Stationery",
];

/// Price floor in cents (10.00).
const PRICE_BASE_CENTS: i64 = 1_000;

/// Width of the random price band in cents (up to 1009.99).
const PRICE_SPAN_CENTS: u128 = 100_000;

/// Exclusive upper bound for generated stock quantities.
const STOCK_SPAN: u128 = 100;

/// Generates `count` synthetic inventory records.
///
/// Pure with respect to its input: `count` records of a fixed shape come
/// back every time, only the random values differ. Output always passes
/// `stocklist_core::validation::validate_item`.
pub fn generate(count: usize) -> Vec<InventoryItem> {
    (0..count).map(generate_item).collect()
}

/// Generates a single record, numbered for a readable name.
fn generate_item(index: usize) -> InventoryItem {
    let id = Uuid::new_v4();

    // Fold the UUID's random bytes into an entropy word and carve fields
    // out of disjoint bit ranges.
    let entropy = u128::from_le_bytes(*id.as_bytes());
    let category = CATEGORIES[(entropy % CATEGORIES.len() as u128) as usize];
    let price_cents = PRICE_BASE_CENTS + ((entropy >> 16) % PRICE_SPAN_CENTS) as i64;
    let quantity_in_stock = ((entropy >> 48) % STOCK_SPAN) as i64;

    InventoryItem {
        id: id.to_string(),
        name: format!("{} Product {}", category, index + 1),
        category: category.to_string(),
        price_cents,
        quantity_in_stock,
    }
}
