//! Reactive View State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: the summary
//! footer only tracks `items`, so changing the sort does not re-render it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Item, SortBy};

/// Read-only mirror of the packing list for the views
#[derive(Clone, Debug, Default, Store)]
pub struct PackingState {
    /// Items in insertion order
    pub items: Vec<Item>,
    /// Selected display order
    pub sort_by: SortBy,
}

/// Type alias for the store
pub type PackingStore = Store<PackingState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the mirrored items
pub fn store_set_items(store: &PackingStore, items: Vec<Item>) {
    *store.items().write() = items;
}

/// Replace the mirrored sort preference
pub fn store_set_sort(store: &PackingStore, sort_by: SortBy) {
    *store.sort_by().write() = sort_by;
}
