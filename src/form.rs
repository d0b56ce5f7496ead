//! Entry Form State
//!
//! Submit rule for the transient form fields, kept out of the component so
//! it can run without a DOM.

use crate::models::Quantity;

/// Take the pending entry out of the form fields
///
/// An empty description yields `None` and leaves both fields as they are.
/// Otherwise returns the entry and resets the fields to their defaults.
pub fn take_submission(description: &mut String, quantity: &mut Quantity) -> Option<(String, Quantity)> {
    if description.is_empty() {
        return None;
    }
    Some((std::mem::take(description), std::mem::take(quantity)))
}
