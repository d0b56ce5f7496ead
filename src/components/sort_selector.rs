//! Sort Selector Component

use leptos::prelude::*;

use crate::context::use_list_context;
use crate::models::SortBy;
use crate::store::PackingStateStoreFields;

/// Dropdown choosing the display order
#[component]
pub fn SortSelector() -> impl IntoView {
    let ctx = use_list_context();

    view! {
        <select
            on:change=move |ev| {
                if let Some(sort) = SortBy::parse(&event_target_value(&ev)) {
                    ctx.set_sort(sort);
                }
            }
        >
            {SortBy::ALL.into_iter().map(|sort| view! {
                <option
                    value=sort.as_str()
                    prop:selected=move || ctx.state.sort_by().get() == sort
                >{sort.label()}</option>
            }).collect_view()}
        </select>
    }
}
