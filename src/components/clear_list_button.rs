//! Clear List Button Component

use leptos::prelude::*;

use crate::config::CLEAR_BUTTON_LABEL;
use crate::context::use_list_context;

/// Removes every item after the user confirms
#[component]
pub fn ClearListButton() -> impl IntoView {
    let ctx = use_list_context();

    view! {
        <button class="clear-btn" on:click=move |_| ctx.clear()>{CLEAR_BUTTON_LABEL}</button>
    }
}
