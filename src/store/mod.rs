//! Persistence of the explorer forest into a string key-value store.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::tree::FileNode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Key the forest is written under unless the caller picks another one
pub const FILE_TREE_KEY: &str = "fileTree";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to (de)serialize file tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("store file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Synchronous string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Write the forest under [`FILE_TREE_KEY`]. Storage faults are returned as-is.
pub fn save_forest<S: KeyValueStore + ?Sized>(store: &mut S, forest: &[FileNode]) -> Result<()> {
    save_forest_as(store, FILE_TREE_KEY, forest)
}

pub fn save_forest_as<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    forest: &[FileNode],
) -> Result<()> {
    let serialized = serde_json::to_string(forest)?;
    debug!(key, bytes = serialized.len(), "saving file tree");
    store.set(key, &serialized)
}

/// Read the forest stored under [`FILE_TREE_KEY`]; an absent key is an empty forest
pub fn load_forest<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<FileNode>> {
    load_forest_from(store, FILE_TREE_KEY)
}

pub fn load_forest_from<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<Vec<FileNode>> {
    match store.get(key)? {
        Some(serialized) => Ok(serde_json::from_str(&serialized)?),
        None => {
            debug!(key, "no stored file tree, starting empty");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{insert_directory, structure_paths};

    #[test]
    fn test_save_then_load_round_trip() {
        let mut store = MemoryStore::new();
        let forest = insert_directory("a", &structure_paths(["a/b.txt", "c.txt"]), "empty");

        save_forest(&mut store, &forest).unwrap();
        assert_eq!(load_forest(&store).unwrap(), forest);
    }

    #[test]
    fn test_saved_under_fixed_key() {
        let mut store = MemoryStore::new();
        save_forest(&mut store, &structure_paths(["x.txt"])).unwrap();

        assert_eq!(
            store.get(FILE_TREE_KEY).unwrap().as_deref(),
            Some(r#"[{"type":"file","name":"x.txt"}]"#)
        );
    }

    #[test]
    fn test_load_absent_key_is_empty() {
        let store = MemoryStore::new();
        assert!(load_forest(&store).unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_value_is_error() {
        let mut store = MemoryStore::new();
        store.set(FILE_TREE_KEY, "{not json").unwrap();
        assert!(matches!(load_forest(&store), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_save_propagates_storage_fault() {
        let mut store = MemoryStore::with_quota(8);
        let err = save_forest(&mut store, &structure_paths(["a/b/c.txt"])).unwrap_err();

        assert!(matches!(err, StoreError::QuotaExceeded { quota: 8, .. }));
        assert!(store.get(FILE_TREE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_custom_key() {
        let mut store = MemoryStore::new();
        let forest = structure_paths(["k.txt"]);
        save_forest_as(&mut store, "other", &forest).unwrap();

        assert!(load_forest(&store).unwrap().is_empty());
        assert_eq!(load_forest_from(&store, "other").unwrap(), forest);
    }
}
