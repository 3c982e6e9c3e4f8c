//! CLI command implementations

pub mod best_move;
pub mod play;
pub mod table;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::app::AppConfig;

/// Load the config file if one was given, then apply command-line
/// overrides for the seed and the Q-table path.
pub(crate) fn resolve_config(
    path: Option<&Path>,
    seed: Option<u64>,
    table: Option<PathBuf>,
) -> Result<AppConfig> {
    let mut config = match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    if let Some(table) = table {
        config.sarsa.table_path = table;
    }
    Ok(config)
}
