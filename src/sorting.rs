//! Display Ordering
//!
//! Sorted projections of the item list. The stored order is never touched.

use std::cmp::Ordering;

use crate::models::{Item, SortBy};

/// Copy of `items` in the order `sort_by` asks for
///
/// Uses a stable sort, so equal keys keep their insertion order.
pub fn sorted_items(items: &[Item], sort_by: SortBy) -> Vec<Item> {
    let mut sorted = items.to_vec();
    match sort_by {
        SortBy::Input => {}
        SortBy::Description => sorted.sort_by(|a, b| locale_compare(&a.description, &b.description)),
        SortBy::Packed => sorted.sort_by_key(|item| item.packed as u8),
    }
    sorted
}

/// `String.prototype.localeCompare` with the browser's default locale
#[cfg(target_arch = "wasm32")]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let result = js_sys::JsString::from(a).locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new());
    result.cmp(&0)
}

/// Case-insensitive comparison, used outside the browser
#[cfg(not(target_arch = "wasm32"))]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
