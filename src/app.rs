//! Far Away App
//!
//! Main application component: header, entry form, list and summary.

use leptos::prelude::*;

use crate::components::{EntryForm, Logo, PackingListView, SummaryFooter};
use crate::context::ListContext;
use crate::ids::ClockIds;
use crate::packing_list::ListStore;
use crate::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    // Restore from localStorage, provide to all children
    let list = ListStore::load(BrowserStorage, ClockIds::new());
    log::info!(target: "app", "restored {} items", list.items().len());
    provide_context(ListContext::new(list));

    view! {
        <div class="app">
            <Logo />
            <EntryForm />
            <PackingListView />
            <SummaryFooter />
        </div>
    }
}
