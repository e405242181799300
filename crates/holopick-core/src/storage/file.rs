//! JSON-file snapshot store.

use super::{SnapshotStore, StorageError, StorageResult};
use crate::snapshot::PickerSnapshot;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores each snapshot as `<id>.json` in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Use `base_path`, creating it if needed.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create {}: {}", base_path.display(), e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// `<data-local-dir>/holopick/state/`, falling back to the home directory.
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;
        Self::new(base.join("holopick").join("state"))
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn snapshot_path(&self, id: &str) -> PathBuf {
        let safe_id: String = id
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{}.json", safe_id))
    }
}

impl SnapshotStore for FileStore {
    fn save(&self, id: &str, snapshot: &PickerSnapshot) -> StorageResult<()> {
        let path = self.snapshot_path(id);
        let json = snapshot
            .to_json()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&path, json)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
        log::debug!("Saved snapshot to {}", path.display());
        Ok(())
    }

    fn load(&self, id: &str) -> StorageResult<PickerSnapshot> {
        let path = self.snapshot_path(id);
        if !path.exists() {
            return Err(StorageError::NotFound(id.to_string()));
        }
        let json = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        PickerSnapshot::from_json(&json).map_err(|e| {
            StorageError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn delete(&self, id: &str) -> StorageResult<()> {
        let path = self.snapshot_path(id);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                StorageError::Io(format!("Failed to delete {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let entries = fs::read_dir(&self.base_path)
            .map_err(|e| StorageError::Io(format!("Failed to read directory: {}", e)))?;
        let ids = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect();
        Ok(ids)
    }

    fn exists(&self, id: &str) -> StorageResult<bool> {
        Ok(self.snapshot_path(id).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Argb;
    use crate::config::PickerConfig;
    use crate::picker::ColorPicker;
    use tempfile::tempdir;

    #[test]
    fn test_save_load() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        let mut picker = ColorPicker::new(&PickerConfig::default());
        picker.set_color(Argb(0xFF33_6699));
        let saved = picker.snapshot();

        store.save("session", &saved).unwrap();
        let loaded = store.load("session").unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_not_found() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        assert!(matches!(store.load("nonexistent"), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        fs::write(dir.path().join("broken.json"), "{ \"color\": 3 }").unwrap();
        assert!(matches!(store.load("broken"), Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_sanitized_ids_and_list() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested")).unwrap();
        let snapshot = ColorPicker::new(&PickerConfig::default()).snapshot();

        store.save("../escape", &snapshot).unwrap();
        store.save("plain", &snapshot).unwrap();
        fs::write(store.base_path().join("notes.txt"), "ignored").unwrap();

        assert!(store.base_path().join("___escape.json").exists());
        let mut ids = store.list().unwrap();
        ids.sort();
        assert_eq!(ids, vec!["___escape".to_string(), "plain".to_string()]);

        store.delete("plain").unwrap();
        assert!(!store.exists("plain").unwrap());
    }
}
