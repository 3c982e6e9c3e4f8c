//! Repository port for Q-table persistence.

use std::path::Path;

use crate::{Result, sarsa::QTable};

/// Port for persisting and loading learned Q-tables.
///
/// This trait keeps the storage format out of the learning code, so the
/// SARSA engine can be backed by a file or by memory in tests.
///
/// # Examples
///
/// ```no_run
/// use ataxx::ports::QTableRepository;
/// use ataxx::sarsa::QTable;
/// use std::path::Path;
///
/// fn snapshot<R: QTableRepository>(repo: &R, table: &QTable) -> ataxx::Result<()> {
///     repo.save(table, Path::new("ataxx_q.msgpack"))
/// }
/// ```
pub trait QTableRepository {
    /// Save the whole table, replacing any previous snapshot at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be written or
    /// serialization fails.
    fn save(&self, table: &QTable, path: &Path) -> Result<()>;

    /// Load a table previously written by [`QTableRepository::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Nothing is stored at `path`
    /// - The data is corrupt or was written by another format version
    fn load(&self, path: &Path) -> Result<QTable>;
}
