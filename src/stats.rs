//! Packing Progress
//!
//! Aggregate statistics shown in the footer.

use crate::config::{COMPLETE_MESSAGE, EMPTY_LIST_MESSAGE};
use crate::models::Item;

/// What the footer should say about the current list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// Nothing on the list yet
    Empty,
    Progress {
        total: usize,
        packed: usize,
        percentage: u32,
    },
    /// Every item is packed (percentage rounds to 100)
    Complete,
}

impl Summary {
    pub fn of(items: &[Item]) -> Self {
        let total = items.len();
        if total == 0 {
            return Summary::Empty;
        }
        let packed = items.iter().filter(|item| item.packed).count();
        let percentage = percent_rounded(packed, total);
        if percentage == 100 {
            Summary::Complete
        } else {
            Summary::Progress {
                total,
                packed,
                percentage,
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            Summary::Empty => EMPTY_LIST_MESSAGE.to_string(),
            Summary::Complete => COMPLETE_MESSAGE.to_string(),
            Summary::Progress {
                total,
                packed,
                percentage,
            } => format!(
                "💼 You have {} items on your list, and you already packed {} ({}%)",
                total, packed, percentage
            ),
        }
    }
}

/// `part / whole * 100`, rounded half up. `whole` must be non-zero.
fn percent_rounded(part: usize, whole: usize) -> u32 {
    ((part * 200 + whole) / (whole * 2)) as u32
}
