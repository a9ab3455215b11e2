use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{StateStore, StoreError};

/// In-memory store. Clones share the same map, so a test can keep a handle
/// and inspect what the dashboard wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            inner: Arc::new(Mutex::new(map)),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // a poisoned map is still a valid map
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_reads_none() {
        let store = MemoryStateStore::new();
        assert_eq!(store.load("users").unwrap(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let store = MemoryStateStore::new();
        store.save("searchTerm", "ann").unwrap();
        store.save("searchTerm", "bob").unwrap();
        assert_eq!(store.load("searchTerm").unwrap().as_deref(), Some("bob"));
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStateStore::with_entries([("currentPage", "2")]);
        let handle = store.clone();
        store.save("roleFilter", "admin").unwrap();

        assert_eq!(handle.get("currentPage").as_deref(), Some("2"));
        assert_eq!(handle.get("roleFilter").as_deref(), Some("admin"));
    }
}
