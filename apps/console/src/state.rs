//! # Inventory Handle
//!
//! Shared ownership of the inventory state for the command surface.
//!
//! ## Thread Safety
//! The state is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple command calls may access/modify the inventory
//! 2. Only one transition may run at a time (the store's atomicity contract)
//! 3. Future embeddings may call commands from concurrent contexts
//!
//! ## Why Not RwLock?
//! Even "read" paths take the lock mutably: reading a derived view may
//! refresh the memoized filtered+sorted sequence. Transitions and reads are
//! both quick, so a single Mutex keeps the model simple.

use std::sync::{Arc, Mutex};

use stocklist_core::{InventoryState, ViewCache};

/// The inventory state plus its view cache, guarded as one unit.
///
/// The cache lives under the same lock as the state so a reader can never
/// observe a view computed from a state it no longer holds.
#[derive(Debug, Default)]
struct Inventory {
    state: InventoryState,
    cache: ViewCache,
}

/// Shared, mutex-guarded inventory state.
///
/// Constructed once at startup and handed to every command call site
/// (dependency injection, not ambient globals).
#[derive(Debug, Clone, Default)]
pub struct InventoryHandle {
    inner: Arc<Mutex<Inventory>>,
}

impl InventoryHandle {
    /// Creates a handle around an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the state.
    ///
    /// The view cache is passed mutably because reading a derived view may
    /// refresh it; the state itself cannot change here.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let pages = handle.with_inventory(|state, cache| cache.total_pages(state));
    /// ```
    pub fn with_inventory<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InventoryState, &mut ViewCache) -> R,
    {
        let mut inventory = self.inner.lock().expect("Inventory mutex poisoned");
        let Inventory { state, cache } = &mut *inventory;
        f(state, cache)
    }

    /// Executes a function with write access to the state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// handle.with_inventory_mut(|state, _| state.clear_selection());
    /// ```
    pub fn with_inventory_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InventoryState, &mut ViewCache) -> R,
    {
        let mut inventory = self.inner.lock().expect("Inventory mutex poisoned");
        let Inventory { state, cache } = &mut *inventory;
        f(state, cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocklist_core::InventoryItem;

    #[test]
    fn test_reads_see_latest_completed_mutation() {
        let handle = InventoryHandle::new();
        handle.with_inventory_mut(|state, _| {
            state.initialize(vec![InventoryItem {
                id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
                name: "Desk".to_string(),
                category: "Furniture".to_string(),
                price_cents: 25000,
                quantity_in_stock: 4,
            }]);
        });

        let len = handle.with_inventory(|state, cache| cache.filtered_sorted(state).len());
        assert_eq!(len, 1);
    }

    #[test]
    fn test_clones_share_the_same_state() {
        let handle = InventoryHandle::new();
        let other = handle.clone();
        handle.with_inventory_mut(|state, _| state.set_page(7));
        assert_eq!(other.with_inventory(|state, _| state.current_page()), 7);
    }
}
