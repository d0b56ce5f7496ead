//! App Configuration
//!
//! Storage keys, input bounds and user-facing text.

use log::LevelFilter;

/// Storage key for the serialized item array
pub const ITEMS_KEY: &str = "items";
/// Storage key for the serialized sort preference
pub const SORT_KEY: &str = "sort";

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 20;
pub const DEFAULT_QUANTITY: u32 = 1;

pub const APP_TITLE: &str = "🌴 Far Away 👜";
pub const FORM_HEADING: &str = "What'd you like to pack? 😊";
pub const DESCRIPTION_PLACEHOLDER: &str = "Item...";
pub const CLEAR_CONFIRM_MESSAGE: &str = "Are you sure you want to delete all of your lists";
pub const EMPTY_LIST_MESSAGE: &str = "Start adding some items to your packing list 🚀";
pub const CLEAR_BUTTON_LABEL: &str = "ClearList";
pub const COMPLETE_MESSAGE: &str = "You've got everything you need. Ready to go ✈️";

#[cfg(debug_assertions)]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
