//! In-memory Q-table repository for testing.
//!
//! Tables are serialized exactly as the file adapter does, but the bytes
//! stay in a shared map keyed by path.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use crate::{
    Result,
    error::Error,
    ports::QTableRepository,
    sarsa::{QTable, SavedQTable},
};

/// In-memory repository for testing.
///
/// # Examples
///
/// ```
/// use ataxx::adapters::InMemoryRepository;
/// use ataxx::ports::QTableRepository;
/// use ataxx::sarsa::QTable;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// repo.save(&QTable::new(), Path::new("table"))?;
/// assert!(repo.contains(Path::new("table")));
///
/// let loaded = repo.load(Path::new("table"))?;
/// assert!(loaded.is_empty());
/// # Ok::<(), ataxx::Error>(())
/// ```
///
/// # Thread Safety
///
/// All clones share the same underlying storage.
#[derive(Clone)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of tables currently stored.
    pub fn count(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    pub fn clear(&self) {
        self.storage.lock().unwrap().clear();
    }

    pub fn contains(&self, path: &Path) -> bool {
        let key = path.to_string_lossy().to_string();
        self.storage.lock().unwrap().contains_key(&key)
    }

    /// Store raw bytes under `path`, bypassing serialization.
    pub fn insert_raw(&self, path: &Path, bytes: Vec<u8>) {
        let key = path.to_string_lossy().to_string();
        self.storage.lock().unwrap().insert(key, bytes);
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl QTableRepository for InMemoryRepository {
    fn save(&self, table: &QTable, path: &Path) -> Result<()> {
        let key = path.to_string_lossy().to_string();

        let bytes = rmp_serde::to_vec(&SavedQTable::new(table.clone())).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize Q-table for in-memory storage".to_string(),
                message: e.to_string(),
            }
        })?;

        self.storage.lock().unwrap().insert(key, bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<QTable> {
        let key = path.to_string_lossy().to_string();
        let storage = self.storage.lock().unwrap();

        let bytes = storage.get(&key).ok_or_else(|| Error::Io {
            operation: format!("load Q-table from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        let saved: SavedQTable =
            rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
                operation: "deserialize Q-table from in-memory storage".to_string(),
                message: e.to_string(),
            })?;

        saved.into_table()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Move;

    fn sample_table() -> QTable {
        let mut table = QTable::new();
        table.set("s", Move::new('a', '1', 'a', '2'), 0.5);
        table
    }

    #[test]
    fn test_in_memory_save_and_load() {
        let repo = InMemoryRepository::new();
        let path = Path::new("table");

        assert_eq!(repo.count(), 0);
        assert!(!repo.contains(path));

        repo.save(&sample_table(), path).unwrap();
        assert_eq!(repo.count(), 1);
        assert!(repo.contains(path));

        assert_eq!(repo.load(path).unwrap(), sample_table());
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let repo = InMemoryRepository::new();
        assert!(repo.load(Path::new("nonexistent")).is_err());
    }

    #[test]
    fn test_wrong_version_returns_error() {
        let repo = InMemoryRepository::new();
        let stale = SavedQTable {
            version: 0,
            table: sample_table(),
        };
        repo.insert_raw(Path::new("old"), rmp_serde::to_vec(&stale).unwrap());
        assert!(matches!(
            repo.load(Path::new("old")),
            Err(Error::UnsupportedVersion { found: 0, .. })
        ));
    }

    #[test]
    fn test_clone_shares_storage() {
        let repo1 = InMemoryRepository::new();
        let repo2 = repo1.clone();

        repo1.save(&sample_table(), Path::new("shared")).unwrap();
        assert_eq!(repo2.load(Path::new("shared")).unwrap(), sample_table());
        assert_eq!(repo2.count(), 1);

        repo2.clear();
        assert_eq!(repo1.count(), 0);
    }
}
