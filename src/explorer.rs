use crate::store::{self, KeyValueStore, StoreError};
use crate::tree::{self, FileNode};
use tracing::{debug, info};

/// Owner of the current forest.
///
/// Edits never touch the held forest in place: each one builds a new forest
/// and swaps it in. Earlier clones stay valid but go stale.
#[derive(Debug, Default, Clone)]
pub struct Explorer {
    forest: Vec<FileNode>,
    revision: u64,
}

impl Explorer {
    pub fn new(forest: Vec<FileNode>) -> Self {
        Self { forest, revision: 0 }
    }

    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(tree::structure_paths(paths))
    }

    pub fn forest(&self) -> &[FileNode] {
        &self.forest
    }

    /// Bumped on every replacement of the forest
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Swap in a new forest, reporting whether it differs from the old one
    fn replace(&mut self, forest: Vec<FileNode>) -> bool {
        let changed = forest != self.forest;
        self.forest = forest;
        self.revision += 1;
        changed
    }

    pub fn add_folder(&mut self, target_path: &str, name: &str) -> bool {
        let next = tree::insert_directory(target_path, &self.forest, name);
        let changed = self.replace(next);
        debug!(target_path, name, changed, "add folder");
        changed
    }

    pub fn add_file(&mut self, target_path: &str, name: &str) -> bool {
        let next = tree::insert_file(target_path, &self.forest, name);
        let changed = self.replace(next);
        debug!(target_path, name, changed, "add file");
        changed
    }

    pub fn delete(&mut self, path: &str) -> bool {
        let next = tree::delete_node(&self.forest, path);
        let changed = self.replace(next);
        debug!(path, changed, "delete");
        changed
    }

    pub fn contains(&self, path: &str) -> bool {
        tree::contains_path(&self.forest, path)
    }

    /// Drop everything, as when a new tree is about to be loaded
    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S, key: &str) -> Result<(), StoreError> {
        store::save_forest_as(store, key, &self.forest)?;
        info!(key, nodes = self.node_count(), "file tree saved");
        Ok(())
    }

    /// Replace the forest with the one stored under `key`
    pub fn load<S: KeyValueStore + ?Sized>(&mut self, store: &S, key: &str) -> Result<(), StoreError> {
        let forest = store::load_forest_from(store, key)?;
        self.replace(forest);
        info!(key, nodes = self.node_count(), "file tree loaded");
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.forest.iter().map(FileNode::count).sum()
    }
}
