//! UI Components
//!
//! Leptos components for the packing list page.

mod logo;
mod entry_form;
mod packing_list_view;
mod packing_item_row;
mod sort_selector;
mod clear_list_button;
mod summary_footer;

pub use logo::Logo;
pub use entry_form::EntryForm;
pub use packing_list_view::PackingListView;
pub use packing_item_row::PackingItemRow;
pub use sort_selector::SortSelector;
pub use clear_list_button::ClearListButton;
pub use summary_footer::SummaryFooter;
