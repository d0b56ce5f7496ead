//! Packing Item Row Component
//!
//! Individual item in the list view.

use leptos::prelude::*;

use crate::context::use_list_context;
use crate::models::Item;

/// A single item row
#[component]
pub fn PackingItemRow(item: Item) -> impl IntoView {
    let ctx = use_list_context();

    let id = item.id;
    let packed = item.packed;

    view! {
        <li class=if packed { "item packed" } else { "item" }>
            // Checkbox
            <input
                type="checkbox"
                prop:checked=packed
                on:change=move |_| ctx.toggle(id)
            />

            <span style=if packed { "text-decoration: line-through;" } else { "" }>
                {item.quantity.get()} " " {item.description}
            </span>

            // Delete button
            <button class="delete-btn" on:click=move |_| ctx.remove(id)>"❌"</button>
        </li>
    }
}
