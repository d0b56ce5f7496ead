//! Packing List View Component
//!
//! Displays items in the selected order, plus the list-wide actions.

use leptos::prelude::*;

use crate::components::{ClearListButton, PackingItemRow, SortSelector};
use crate::context::use_list_context;
use crate::sorting::sorted_items;
use crate::store::PackingStateStoreFields;

/// List of items with sort and clear controls
#[component]
pub fn PackingListView() -> impl IntoView {
    let ctx = use_list_context();

    let shown_items = move || sorted_items(&ctx.state.items().get(), ctx.state.sort_by().get());

    view! {
        <div class="list">
            <ul>
                <For
                    each=shown_items
                    // packed is part of the key so a toggled row re-renders
                    key=|item| (item.id, item.packed)
                    children=move |item| view! { <PackingItemRow item=item /> }
                />
            </ul>

            <div class="actions">
                <SortSelector />
                <ClearListButton />
            </div>
        </div>
    }
}
