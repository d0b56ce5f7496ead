//! Item Id Generation

use crate::models::ItemId;

/// Source of fresh item ids
pub trait IdGenerator {
    /// Next id. Never returns the same value twice for one generator.
    fn next_id(&mut self) -> ItemId;
}

/// Millisecond wall-clock timestamps, bumped when two ids land in the same millisecond
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockIds {
    last: ItemId,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> ItemId {
    js_sys::Date::now() as ItemId
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> ItemId {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as ItemId)
        .unwrap_or(0)
}

impl IdGenerator for ClockIds {
    fn next_id(&mut self) -> ItemId {
        self.last = now_millis().max(self.last + 1);
        self.last
    }
}

/// Deterministic ids `start, start + 1, ...`, used by tests
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct SequentialIds {
    next: ItemId,
}

#[cfg(test)]
impl SequentialIds {
    pub fn starting_at(start: ItemId) -> Self {
        Self { next: start }
    }
}

#[cfg(test)]
impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[cfg(test)]
impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        let id = self.next;
        self.next += 1;
        id
    }
}
