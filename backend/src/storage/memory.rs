use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::traits::KeyValueStore;

/// In-memory key-value store.
///
/// Clones share the same underlying map, so a test can keep a handle while the
/// ledger owns another and observe every write (or simulate a reload by
/// hydrating a second ledger from the same data).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with raw blobs
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        store
    }

    /// Number of `set` calls made through any clone of this store
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Raw blob for inspection in tests
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("sellingHistory").unwrap(), None);
    }

    #[test]
    fn test_clones_share_data_and_write_count() {
        let observer = MemoryStore::new();
        let mut writer = observer.clone();

        writer.set("sellingTypeOptions", "[\"Colouring Book\"]").unwrap();

        assert_eq!(
            observer.raw("sellingTypeOptions").as_deref(),
            Some("[\"Colouring Book\"]")
        );
        assert_eq!(observer.write_count(), 1);
    }

    #[test]
    fn test_with_entries() {
        let store = MemoryStore::with_entries([("a", "1"), ("b", "2")]);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
        assert_eq!(store.write_count(), 0);
    }
}
