//! # Output Store
//!
//! Boundary for persisting the rendered document. The pipeline renders
//! fully in memory before calling [`OutputStore::write`], so a failed
//! pass never leaves a partial file behind.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Destination for exactly one document write per successful pass
pub trait OutputStore {
    fn write(&self, name: &str, contents: &str) -> io::Result<()>;
}

/// Store that writes into a directory on disk.
///
/// The write is a single `fs::write` of the complete document: open,
/// write fully, close.
#[derive(Debug)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl OutputStore for DirStore {
    fn write(&self, name: &str, contents: &str) -> io::Result<()> {
        std::fs::write(self.root.join(name), contents)
    }
}

/// In-memory store for tests, tracking every write
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.files.borrow().get(name).cloned()
    }

    /// Total number of write calls, including overwrites
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl OutputStore for MemoryStore {
    fn write(&self, name: &str, contents: &str) -> io::Result<()> {
        let _ = self
            .files
            .borrow_mut()
            .insert(name.to_string(), contents.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_tracks_writes() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.write_count(), 0);

        store.write("riftmod.json", "{}\n").expect("write failed");
        assert_eq!(store.get("riftmod.json").as_deref(), Some("{}\n"));
        assert_eq!(store.write_count(), 1);
        assert_eq!(store.get("other.json"), None);
    }
}
