//! Summary Footer Component
//!
//! Packing progress derived from the current items.

use leptos::prelude::*;

use crate::context::use_list_context;
use crate::stats::Summary;
use crate::store::PackingStateStoreFields;

#[component]
pub fn SummaryFooter() -> impl IntoView {
    let ctx = use_list_context();

    let summary = move || Summary::of(&ctx.state.items().get());

    view! {
        <footer class="stats">
            <em>{move || summary().message()}</em>
        </footer>
    }
}
