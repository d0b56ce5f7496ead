//! Packing List Store
//!
//! Owns the canonical item sequence and the sort preference, and writes
//! every change through to durable storage.
//!
//! Items are kept in insertion order; sorting for display happens on a copy
//! (see `sorting`). Items and sort preference live under separate storage
//! keys so each is written independently.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{ITEMS_KEY, SORT_KEY};
use crate::ids::IdGenerator;
use crate::models::{Item, ItemId, Quantity, SortBy};
use crate::storage::{KeyValueStorage, StorageError, StorageResult};

/// Outcome of reading a persisted value
#[derive(Debug, Clone, PartialEq)]
pub enum Restored<T> {
    Present(T),
    Absent,
    /// Content existed but did not parse; carries the parse error
    Malformed(String),
}

impl<T: Default> Restored<T> {
    /// The stored value, or `T::default()` when absent or malformed
    pub fn or_default(self) -> T {
        match self {
            Restored::Present(value) => value,
            Restored::Absent | Restored::Malformed(_) => T::default(),
        }
    }
}

/// Parse persisted JSON without ever failing the caller
pub fn try_deserialize<T: DeserializeOwned>(raw: Option<&str>) -> Restored<T> {
    match raw {
        None => Restored::Absent,
        Some(text) => match serde_json::from_str(text) {
            Ok(value) => Restored::Present(value),
            Err(e) => Restored::Malformed(e.to_string()),
        },
    }
}

fn read_key<S: KeyValueStorage, T: DeserializeOwned + Default>(storage: &S, key: &str) -> T {
    let raw = match storage.get(key) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!(target: "store", "reading {:?} failed, using default: {}", key, e);
            None
        }
    };
    match try_deserialize(raw.as_deref()) {
        Restored::Malformed(e) => {
            log::warn!(target: "store", "ignoring malformed {:?}: {}", key, e);
            T::default()
        }
        restored => restored.or_default(),
    }
}

fn write_key<S: KeyValueStorage, T: Serialize + ?Sized>(
    storage: &mut S,
    key: &str,
    value: &T,
) -> StorageResult<()> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::Write(e.to_string()))?;
    storage.set(key, &json)
}

/// Drop restored items that break the list invariants: empty descriptions,
/// and any repeat of an id already seen (first occurrence wins)
fn retain_valid(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::new();
    let before = items.len();
    let kept: Vec<Item> = items
        .into_iter()
        .filter(|item| !item.description.is_empty() && seen.insert(item.id))
        .collect();
    if kept.len() != before {
        log::warn!(target: "store", "dropped {} invalid stored items", before - kept.len());
    }
    kept
}

/// The packing list state plus its storage and id source
#[derive(Debug)]
pub struct ListStore<S, G> {
    items: Vec<Item>,
    sort_by: SortBy,
    storage: S,
    ids: G,
}

impl<S: KeyValueStorage, G: IdGenerator> ListStore<S, G> {
    /// Restore state from `storage`, falling back to an empty list and input order
    pub fn load(storage: S, ids: G) -> Self {
        let items: Vec<Item> = retain_valid(read_key(&storage, ITEMS_KEY));
        let sort_by: SortBy = read_key(&storage, SORT_KEY);
        log::debug!(target: "store", "loaded {} items, sort={:?}", items.len(), sort_by);
        Self {
            items,
            sort_by,
            storage,
            ids,
        }
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a new unpacked item
    ///
    /// Returns the new id, or `None` (and changes nothing) when
    /// `description` is empty.
    pub fn add(&mut self, description: &str, quantity: Quantity) -> StorageResult<Option<ItemId>> {
        if description.is_empty() {
            return Ok(None);
        }
        let id = self.fresh_id();
        self.items.push(Item::new(id, description.to_string(), quantity));
        log::debug!(target: "store", "added #{} {:?} x{}", id, description, quantity);
        self.persist_items()?;
        Ok(Some(id))
    }

    /// Remove the item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: ItemId) -> StorageResult<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        log::debug!(target: "store", "removed #{}", id);
        self.persist_items()?;
        Ok(true)
    }

    /// Flip `packed` on the item with `id`. Returns whether the item existed.
    pub fn toggle(&mut self, id: ItemId) -> StorageResult<bool> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return Ok(false);
        };
        item.packed = !item.packed;
        log::debug!(target: "store", "toggled #{} packed={}", id, item.packed);
        self.persist_items()?;
        Ok(true)
    }

    /// Empty the list once `confirm` agrees
    ///
    /// `confirm` is not called at all when the list is already empty.
    /// Returns whether the list was cleared.
    pub fn clear(&mut self, confirm: impl FnOnce() -> bool) -> StorageResult<bool> {
        if self.is_empty() || !confirm() {
            return Ok(false);
        }
        log::debug!(target: "store", "cleared {} items", self.items.len());
        self.items.clear();
        self.persist_items()?;
        Ok(true)
    }

    /// Change the display order; persisted under its own key
    pub fn set_sort(&mut self, sort_by: SortBy) -> StorageResult<()> {
        if self.sort_by == sort_by {
            return Ok(());
        }
        self.sort_by = sort_by;
        write_key(&mut self.storage, SORT_KEY, &self.sort_by)
    }

    fn fresh_id(&mut self) -> ItemId {
        loop {
            let id = self.ids.next_id();
            if !self.items.iter().any(|item| item.id == id) {
                return id;
            }
        }
    }

    fn persist_items(&mut self) -> StorageResult<()> {
        write_key(&mut self.storage, ITEMS_KEY, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::sorting::sorted_items;
    use crate::storage::MemoryStorage;

    type TestStore = ListStore<MemoryStorage, SequentialIds>;

    fn empty_store() -> TestStore {
        ListStore::load(MemoryStorage::new(), SequentialIds::default())
    }

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    fn descriptions(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.description.as_str()).collect()
    }

    /// Storage whose writes always fail
    struct FullStorage;

    impl KeyValueStorage for FullStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }
        fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Write("QuotaExceededError".to_string()))
        }
    }

    #[test]
    fn test_add_appends_unpacked_item() {
        let mut store = empty_store();
        let id = store.add("Socks", qty(3)).unwrap().unwrap();

        assert_eq!(
            store.items(),
            &[Item {
                id,
                description: "Socks".to_string(),
                quantity: qty(3),
                packed: false,
            }]
        );
    }

    #[test]
    fn test_add_empty_description_is_noop() {
        let mut store = empty_store();
        store.add("Hat", qty(1)).unwrap();
        for n in Quantity::choices() {
            assert_eq!(store.add("", n).unwrap(), None);
        }
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.storage().get(ITEMS_KEY).unwrap().map(|s| s.contains("Hat")), Some(true));
    }

    #[test]
    fn test_whitespace_description_is_accepted() {
        let mut store = empty_store();
        assert!(store.add(" ", qty(1)).unwrap().is_some());
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_ids_stay_unique() {
        let mut store = empty_store();
        let a = store.add("A", qty(1)).unwrap().unwrap();
        let b = store.add("B", qty(1)).unwrap().unwrap();
        store.remove(a).unwrap();
        store.toggle(b).unwrap();
        store.add("C", qty(2)).unwrap();
        store.add("D", qty(2)).unwrap();
        store.remove(b).unwrap();
        store.add("E", qty(2)).unwrap();

        let ids: HashSet<_> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), store.items().len());
        assert_eq!(descriptions(store.items()), vec!["C", "D", "E"]);
    }

    /// xorshift64, fixed seeds keep runs reproducible
    fn next_rand(state: &mut u64) -> u64 {
        *state ^= *state << 13;
        *state ^= *state >> 7;
        *state ^= *state << 17;
        *state
    }

    #[test]
    fn test_ids_unique_across_generated_sequences() {
        for seed in 1..=20u64 {
            let mut rng = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
            let mut store = empty_store();
            for step in 0..200 {
                let existing: Vec<ItemId> = store.items().iter().map(|i| i.id).collect();
                let pick = |r: u64| existing.get(r as usize % existing.len().max(1)).copied();
                match next_rand(&mut rng) % 4 {
                    0 | 1 => {
                        let n = (next_rand(&mut rng) % 20) as u32 + 1;
                        store.add(&format!("item {}", step), qty(n)).unwrap();
                    }
                    2 => {
                        if let Some(id) = pick(next_rand(&mut rng)) {
                            assert!(store.remove(id).unwrap());
                        }
                    }
                    _ => {
                        if let Some(id) = pick(next_rand(&mut rng)) {
                            assert!(store.toggle(id).unwrap());
                        }
                    }
                }
                let ids: HashSet<_> = store.items().iter().map(|i| i.id).collect();
                assert_eq!(ids.len(), store.items().len(), "seed {} step {}", seed, step);
            }
        }
    }

    #[test]
    fn test_fresh_ids_skip_loaded_ids() {
        let storage = MemoryStorage::with_entries([(
            ITEMS_KEY,
            r#"[{"id":1,"description":"Map","quantity":1,"packed":false},
                {"id":2,"description":"Tent","quantity":1,"packed":false}]"#,
        )]);
        let mut store = ListStore::load(storage, SequentialIds::default());

        let id = store.add("Stove", qty(1)).unwrap().unwrap();
        assert_eq!(id, 3);
    }

    #[test]
    fn test_remove_and_toggle_unknown_id_are_noops() {
        let mut store = empty_store();
        store.add("Socks", qty(1)).unwrap();
        let before = store.items().to_vec();

        assert!(!store.remove(999).unwrap());
        assert!(!store.toggle(999).unwrap());
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut store = empty_store();
        let id = store.add("Socks", qty(1)).unwrap().unwrap();

        assert!(store.toggle(id).unwrap());
        assert!(store.items()[0].packed);
        assert!(store.toggle(id).unwrap());
        assert!(!store.items()[0].packed);
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut store = empty_store();
        store.add("Socks", qty(1)).unwrap();
        store.add("Passport", qty(1)).unwrap();

        assert!(!store.clear(|| false).unwrap());
        assert_eq!(store.items().len(), 2);

        assert!(store.clear(|| true).unwrap());
        assert!(store.is_empty());
        assert_eq!(store.storage().get(ITEMS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_clear_on_empty_list_never_asks() {
        let mut store = empty_store();
        let mut asked = false;
        assert!(!store.clear(|| {
            asked = true;
            true
        })
        .unwrap());
        assert!(!asked);
    }

    #[test]
    fn test_state_roundtrips_through_storage() {
        let mut store = empty_store();
        let socks = store.add("Socks", qty(3)).unwrap().unwrap();
        store.add("Passport", qty(1)).unwrap();
        store.toggle(socks).unwrap();
        store.set_sort(SortBy::Description).unwrap();

        let expected_items = store.items().to_vec();
        let storage = store.storage().clone();
        let reloaded = ListStore::load(storage, SequentialIds::default());

        assert_eq!(reloaded.items(), expected_items.as_slice());
        assert_eq!(reloaded.sort_by(), SortBy::Description);
    }

    #[test]
    fn test_sort_persisted_as_json_string() {
        let mut store = empty_store();
        store.set_sort(SortBy::Packed).unwrap();
        assert_eq!(store.storage().get(SORT_KEY).unwrap().as_deref(), Some(r#""packed""#));
        // items untouched by a sort change
        assert_eq!(store.storage().get(ITEMS_KEY).unwrap(), None);
    }

    #[test]
    fn test_malformed_storage_falls_back_to_defaults() {
        let storage = MemoryStorage::with_entries([
            (ITEMS_KEY, "{not json"),
            (SORT_KEY, r#""by-size""#),
        ]);
        let store = ListStore::load(storage, SequentialIds::default());
        assert!(store.is_empty());
        assert_eq!(store.sort_by(), SortBy::Input);
    }

    #[test]
    fn test_malformed_items_keep_valid_sort() {
        let storage = MemoryStorage::with_entries([
            (ITEMS_KEY, r#"[{"id":1,"description":"Tent","quantity":99,"packed":false}]"#),
            (SORT_KEY, r#""packed""#),
        ]);
        let store = ListStore::load(storage, SequentialIds::default());
        assert!(store.is_empty());
        assert_eq!(store.sort_by(), SortBy::Packed);
    }

    #[test]
    fn test_duplicate_loaded_ids_keep_first() {
        let storage = MemoryStorage::with_entries([(
            ITEMS_KEY,
            r#"[{"id":7,"description":"Map","quantity":1,"packed":false},
                {"id":7,"description":"Copy","quantity":2,"packed":true}]"#,
        )]);
        let store = ListStore::load(storage, SequentialIds::default());
        assert_eq!(descriptions(store.items()), vec!["Map"]);
    }

    #[test]
    fn test_empty_stored_descriptions_dropped() {
        let storage = MemoryStorage::with_entries([(
            ITEMS_KEY,
            r#"[{"id":1,"description":"","quantity":1,"packed":false},
                {"id":2,"description":"Map","quantity":2,"packed":true}]"#,
        )]);
        let store = ListStore::load(storage, SequentialIds::default());
        assert_eq!(descriptions(store.items()), vec!["Map"]);
        assert!(store.items()[0].packed);
    }

    #[test]
    fn test_try_deserialize_outcomes() {
        assert_eq!(try_deserialize::<SortBy>(None), Restored::Absent);
        assert_eq!(
            try_deserialize::<SortBy>(Some(r#""packed""#)),
            Restored::Present(SortBy::Packed)
        );
        assert!(matches!(
            try_deserialize::<SortBy>(Some("null")),
            Restored::Malformed(_)
        ));
        assert_eq!(try_deserialize::<Vec<Item>>(Some("oops")).or_default(), Vec::new());
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut store = ListStore::load(FullStorage, SequentialIds::default());
        let err = store.add("Socks", qty(1)).unwrap_err();
        assert_eq!(err, StorageError::Write("QuotaExceededError".to_string()));
    }

    #[test]
    fn test_packing_scenario() {
        let mut store = empty_store();
        let socks = store.add("Socks", qty(3)).unwrap().unwrap();
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity.get(), 3);
        assert!(!store.items()[0].packed);

        store.toggle(socks).unwrap();
        assert!(store.items()[0].packed);

        store.add("Passport", qty(1)).unwrap();
        assert_eq!(store.items().len(), 2);

        store.set_sort(SortBy::Packed).unwrap();
        let shown = sorted_items(store.items(), store.sort_by());
        assert_eq!(descriptions(&shown), vec!["Passport", "Socks"]);

        store.set_sort(SortBy::Input).unwrap();
        let shown = sorted_items(store.items(), store.sort_by());
        assert_eq!(descriptions(&shown), vec!["Socks", "Passport"]);
    }
}
