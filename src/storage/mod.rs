//! Persistent view-state: a plain key/value store of strings.
//!
//! Production writes a JSON object to disk; tests use [`MemoryStateStore`].
//! No transactions, last write wins, a key never written reads as `None`.

mod file_store;
mod memory_store;

pub use file_store::FileStateStore;
pub use memory_store::MemoryStateStore;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("state store I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("state store at {} is corrupt: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },
    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Pluggable key/value back-end for the dashboard.
pub trait StateStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
