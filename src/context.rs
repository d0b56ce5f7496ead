//! Application Context
//!
//! Shared state provided via Leptos Context API. Views read the reactive
//! mirror and send every change through here; only this type touches the
//! `ListStore` and, through it, browser storage.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::CLEAR_CONFIRM_MESSAGE;
use crate::ids::ClockIds;
use crate::models::{ItemId, Quantity, SortBy};
use crate::packing_list::ListStore;
use crate::storage::{BrowserStorage, StorageResult};
use crate::store::{store_set_items, store_set_sort, PackingState, PackingStore};

/// The list as persisted in the browser
pub type BrowserList = ListStore<BrowserStorage, ClockIds>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct ListContext {
    /// Authoritative list, owns storage
    list: StoredValue<BrowserList>,
    /// Mirror for rendering - read
    pub state: PackingStore,
}

impl ListContext {
    pub fn new(list: BrowserList) -> Self {
        let state = Store::new(PackingState {
            items: list.items().to_vec(),
            sort_by: list.sort_by(),
        });
        Self {
            list: StoredValue::new(list),
            state,
        }
    }

    pub fn add(&self, description: &str, quantity: Quantity) {
        self.apply("add", |list| list.add(description, quantity));
    }

    pub fn remove(&self, id: ItemId) {
        self.apply("remove", |list| list.remove(id));
    }

    pub fn toggle(&self, id: ItemId) {
        self.apply("toggle", |list| list.toggle(id));
    }

    /// Clear everything after a browser confirm dialog
    pub fn clear(&self) {
        self.apply("clear", |list| {
            list.clear(|| {
                web_sys::window()
                    .and_then(|w| w.confirm_with_message(CLEAR_CONFIRM_MESSAGE).ok())
                    .unwrap_or(false)
            })
        });
    }

    pub fn set_sort(&self, sort_by: SortBy) {
        self.apply("sort", |list| list.set_sort(sort_by));
        store_set_sort(&self.state, sort_by);
    }

    /// Run `op` on the list, then refresh the mirror
    ///
    /// The in-memory change stands even when the storage write fails.
    fn apply<U>(&self, action: &str, op: impl FnOnce(&mut BrowserList) -> StorageResult<U>) {
        let Some(result) = self.list.try_update_value(op) else {
            log::error!(target: "app", "{}: list store disposed", action);
            return;
        };
        if let Err(e) = result {
            log::error!(target: "app", "{}: {}", action, e);
        }
        if let Some(items) = self.list.try_with_value(|list| list.items().to_vec()) {
            store_set_items(&self.state, items);
        }
    }
}

/// Get the list context
pub fn use_list_context() -> ListContext {
    expect_context::<ListContext>()
}
