//! In-memory snapshot store.

use super::{SnapshotStore, StorageError, StorageResult};
use crate::snapshot::PickerSnapshot;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshots: RwLock<HashMap<String, PickerSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Other(format!("Lock error: {}", e))
}

impl SnapshotStore for MemoryStore {
    fn save(&self, id: &str, snapshot: &PickerSnapshot) -> StorageResult<()> {
        let mut snapshots = self.snapshots.write().map_err(lock_error)?;
        snapshots.insert(id.to_string(), snapshot.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> StorageResult<PickerSnapshot> {
        let snapshots = self.snapshots.read().map_err(lock_error)?;
        snapshots
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    fn delete(&self, id: &str) -> StorageResult<()> {
        let mut snapshots = self.snapshots.write().map_err(lock_error)?;
        snapshots.remove(id);
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let snapshots = self.snapshots.read().map_err(lock_error)?;
        Ok(snapshots.keys().cloned().collect())
    }

    fn exists(&self, id: &str) -> StorageResult<bool> {
        let snapshots = self.snapshots.read().map_err(lock_error)?;
        Ok(snapshots.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;
    use crate::picker::ColorPicker;

    fn snapshot() -> PickerSnapshot {
        ColorPicker::new(&PickerConfig::default()).snapshot()
    }

    #[test]
    fn test_save_and_load() {
        let store = MemoryStore::new();
        let saved = snapshot();
        store.save("test", &saved).unwrap();
        assert_eq!(store.load("test").unwrap(), saved);
    }

    #[test]
    fn test_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(store.load("nonexistent"), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_exists_and_delete() {
        let store = MemoryStore::new();
        assert!(!store.exists("test").unwrap());
        store.save("test", &snapshot()).unwrap();
        assert!(store.exists("test").unwrap());
        store.delete("test").unwrap();
        assert!(!store.exists("test").unwrap());
        store.delete("test").unwrap();
    }

    #[test]
    fn test_list() {
        let store = MemoryStore::new();
        store.save("a", &snapshot()).unwrap();
        store.save("b", &snapshot()).unwrap();
        let mut ids = store.list().unwrap();
        ids.sort();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }
}
