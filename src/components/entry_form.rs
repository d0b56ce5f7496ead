//! Entry Form Component
//!
//! Form for adding new items with a quantity selector.

use leptos::prelude::*;

use crate::config::{DESCRIPTION_PLACEHOLDER, FORM_HEADING};
use crate::context::use_list_context;
use crate::form::take_submission;
use crate::models::Quantity;

/// Form for adding items to the list
#[component]
pub fn EntryForm() -> impl IntoView {
    let ctx = use_list_context();

    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(Quantity::default());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut text = description.get();
        let mut amount = quantity.get();
        let Some((entry, entry_quantity)) = take_submission(&mut text, &mut amount) else { return; };

        ctx.add(&entry, entry_quantity);
        set_description.set(text);
        set_quantity.set(amount);
    };

    view! {
        <form class="add-form" on:submit=add_item>
            <h3>{FORM_HEADING}</h3>
            <select
                on:change=move |ev| {
                    if let Some(q) = event_target_value(&ev).parse().ok().and_then(Quantity::new) {
                        set_quantity.set(q);
                    }
                }
            >
                {Quantity::choices().map(|q| view! {
                    <option value=q.to_string() prop:selected=move || quantity.get() == q>{q.get()}</option>
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder=DESCRIPTION_PLACEHOLDER
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
