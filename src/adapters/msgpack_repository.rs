//! MessagePack implementation of the Q-table repository.
//!
//! Tables are written inside a [`SavedQTable`] envelope using rmp_serde.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    Result,
    error::Error,
    ports::QTableRepository,
    sarsa::{QTable, SavedQTable},
};

/// File-backed Q-table repository.
///
/// # Examples
///
/// ```no_run
/// use ataxx::adapters::MsgPackRepository;
/// use ataxx::ports::QTableRepository;
/// use ataxx::sarsa::QTable;
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// repo.save(&QTable::new(), Path::new("ataxx_q.msgpack"))?;
/// let loaded = repo.load(Path::new("ataxx_q.msgpack"))?;
/// assert!(loaded.is_empty());
/// # Ok::<(), ataxx::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    pub fn new() -> Self {
        Self
    }
}

impl QTableRepository for MsgPackRepository {
    fn save(&self, table: &QTable, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        let saved = SavedQTable::new(table.clone());
        rmp_serde::encode::write(&mut writer, &saved).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize Q-table to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;

        writer.flush().map_err(|source| Error::Io {
            operation: format!("write file {path:?}"),
            source,
        })
    }

    fn load(&self, path: &Path) -> Result<QTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let saved: SavedQTable =
            rmp_serde::decode::from_read(&file).map_err(|e| Error::SerializationContext {
                operation: "deserialize Q-table from MessagePack".to_string(),
                message: e.to_string(),
            })?;

        saved.into_table()
    }
}
