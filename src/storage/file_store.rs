use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{StateStore, StoreError};

/// Stores every key in one JSON object at `<config_dir>/userdash/state.json`.
///
/// On Linux: `~/.config/userdash/state.json`
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Platform default, honouring `XDG_CONFIG_HOME`.
    /// Falls back to `./userdash/state.json` if no home can be found.
    pub fn default_path() -> PathBuf {
        let base = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| std::env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
            .unwrap_or_else(|_| PathBuf::from("."));

        base.join("userdash").join("state.json")
    }

    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

impl StateStore for FileStateStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StoreError::Corrupt { reason, .. }) => {
                tracing::warn!(path = %self.path.display(), %reason, "Replacing corrupt state file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStateStore::new(dir.path().join("state.json"));

        assert_eq!(store.load("users").unwrap(), None);
    }

    #[test]
    fn test_save_creates_parent_dirs_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("userdash").join("state.json");
        let store = FileStateStore::new(path.clone());

        store.save("searchTerm", "jane").unwrap();
        store.save("currentPage", "3").unwrap();

        assert!(path.exists());
        let reopened = FileStateStore::new(path);
        assert_eq!(reopened.load("searchTerm").unwrap().as_deref(), Some("jane"));
        assert_eq!(reopened.load("currentPage").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_corrupt_file_is_an_error_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = FileStateStore::new(path);

        assert!(matches!(
            store.load("users"),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_save_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let store = FileStateStore::new(path);

        store.save("roleFilter", "editor").unwrap();
        assert_eq!(store.load("roleFilter").unwrap().as_deref(), Some("editor"));
    }
}
