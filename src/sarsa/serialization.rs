//! Versioned envelope for persisted Q-tables.

use std::{fs::File, io::BufWriter, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{error::Error, sarsa::q_table::QTable};

/// What repositories actually write: the table plus a format version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedQTable {
    pub version: u32,
    pub table: QTable,
}

impl SavedQTable {
    pub const VERSION: u32 = 1;

    pub fn new(table: QTable) -> Self {
        Self {
            version: Self::VERSION,
            table,
        }
    }

    /// Unwrap the table, rejecting envelopes from other format versions.
    pub fn into_table(self) -> crate::Result<QTable> {
        if self.version != Self::VERSION {
            return Err(Error::UnsupportedVersion {
                found: self.version,
                expected: Self::VERSION,
            });
        }
        Ok(self.table)
    }

    /// Write the bare table as pretty-printed JSON.
    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create file: {}", path.as_ref().display()))?;
        let writer = BufWriter::new(file);

        serde_json::to_writer_pretty(writer, &self.table)
            .context("Failed to serialize Q-table as JSON")?;

        Ok(())
    }
}
