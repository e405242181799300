//! Snapshot persistence.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::snapshot::PickerSnapshot;
use thiserror::Error;

/// Key the app saves its session under.
pub const LAST_SNAPSHOT_KEY: &str = "last";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Snapshot not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A place to keep picker snapshots by id.
pub trait SnapshotStore: Send + Sync {
    fn save(&self, id: &str, snapshot: &PickerSnapshot) -> StorageResult<()>;

    fn load(&self, id: &str) -> StorageResult<PickerSnapshot>;

    /// Delete a snapshot. Deleting a missing id is not an error.
    fn delete(&self, id: &str) -> StorageResult<()>;

    fn list(&self) -> StorageResult<Vec<String>>;

    fn exists(&self, id: &str) -> StorageResult<bool>;
}
