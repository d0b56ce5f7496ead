//! Frontend Models
//!
//! Packing list entries and the display ordering options.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_QUANTITY, MAX_QUANTITY, MIN_QUANTITY};

/// Item identifier (creation-time millisecond timestamp in the browser)
pub type ItemId = u64;

/// Number of units to pack, always within `MIN_QUANTITY..=MAX_QUANTITY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Returns `None` when `value` is outside the selectable range
    pub fn new(value: u32) -> Option<Self> {
        (MIN_QUANTITY..=MAX_QUANTITY)
            .contains(&value)
            .then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Every value the quantity selector offers, in ascending order
    pub fn choices() -> impl Iterator<Item = Quantity> {
        (MIN_QUANTITY..=MAX_QUANTITY).map(Quantity)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(DEFAULT_QUANTITY)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Quantity::new(value).ok_or_else(|| {
            format!("quantity {} outside {}..={}", value, MIN_QUANTITY, MAX_QUANTITY)
        })
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> u32 {
        quantity.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single packing list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: Quantity,
    pub packed: bool,
}

impl Item {
    pub fn new(id: ItemId, description: String, quantity: Quantity) -> Self {
        Self {
            id,
            description,
            quantity,
            packed: false,
        }
    }
}

/// Display ordering of the list. Never changes the stored order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Input,
    Description,
    Packed,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Input, SortBy::Description, SortBy::Packed];

    /// Value used by the `<select>` options
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Input => "input",
            SortBy::Description => "description",
            SortBy::Packed => "packed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::Input => "Sort By Input",
            SortBy::Description => "Sort By Description",
            SortBy::Packed => "Sort By Packed",
        }
    }

    pub fn parse(value: &str) -> Option<SortBy> {
        SortBy::ALL.into_iter().find(|sort| sort.as_str() == value)
    }
}
