//! Configuration types for player creation.

use std::{fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    error::Error,
    mcts::MctsConfig,
    minimax::{MAX_DEPTH, MinimaxConfig},
    sarsa::SarsaConfig,
};

/// Which engine drives a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    Minimax,
    Mcts,
    Sarsa,
    Random,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineKind::Minimax => "minimax",
            EngineKind::Mcts => "mcts",
            EngineKind::Sarsa => "sarsa",
            EngineKind::Random => "random",
        };
        f.write_str(name)
    }
}

impl FromStr for EngineKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" | "alphabeta" => Ok(EngineKind::Minimax),
            "mcts" | "uct" => Ok(EngineKind::Mcts),
            "sarsa" | "q" => Ok(EngineKind::Sarsa),
            "random" => Ok(EngineKind::Random),
            _ => Err(Error::InvalidConfiguration {
                message: format!("unknown engine '{s}' (expected minimax, mcts, sarsa or random)"),
            }),
        }
    }
}

/// Per-engine settings plus an optional seed.
///
/// Missing sections in a config file fall back to their defaults.
///
/// # Examples
///
/// ```
/// use ataxx::app::AppConfig;
///
/// let config: AppConfig = serde_json::from_str(r#"{ "minimax": { "depth": 2 }, "seed": 7 }"#)?;
/// assert_eq!(config.minimax.depth, 2);
/// assert_eq!(config.mcts.iterations, 1000);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub minimax: MinimaxConfig,
    pub mcts: MctsConfig,
    pub sarsa: SarsaConfig,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {path:?}"),
            source,
        })?;
        let config: AppConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.minimax.depth > MAX_DEPTH {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "minimax.depth must be at most {MAX_DEPTH}, got {}",
                    self.minimax.depth
                ),
            });
        }
        if self.mcts.exploration < 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "mcts.exploration must be non-negative, got {}",
                    self.mcts.exploration
                ),
            });
        }
        self.sarsa.validate()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_minimax(mut self, minimax: MinimaxConfig) -> Self {
        self.minimax = minimax;
        self
    }

    pub fn with_mcts(mut self, mcts: MctsConfig) -> Self {
        self.mcts = mcts;
        self
    }

    pub fn with_sarsa(mut self, sarsa: SarsaConfig) -> Self {
        self.sarsa = sarsa;
        self
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_engine_kind_parsing() {
        assert_eq!("MCTS".parse::<EngineKind>().unwrap(), EngineKind::Mcts);
        assert_eq!("minimax".parse::<EngineKind>().unwrap(), EngineKind::Minimax);
        assert!("human".parse::<EngineKind>().is_err());
        assert_eq!(EngineKind::Sarsa.to_string(), "sarsa");
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ataxx.json");
        fs::write(&path, r#"{ "sarsa": { "epsilon": 0.0, "table_path": "t.msgpack" } }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.sarsa.epsilon, 0.0);
        assert_eq!(config.sarsa.learning_rate, 0.5);
        assert_eq!(config.sarsa.table_path, Path::new("t.msgpack"));
        assert_eq!(config.minimax, MinimaxConfig::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_load_rejects_bad_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ataxx.json");
        fs::write(&path, r#"{ "sarsa": { "epsilon": 1.5 } }"#).unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_validate_bounds_search_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ataxx.json");
        fs::write(&path, r#"{ "minimax": { "depth": 21 } }"#).unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(Error::InvalidConfiguration { .. })
        ));

        let negative =
            AppConfig::default().with_mcts(MctsConfig::default().with_exploration(-1.0));
        assert!(negative.validate().is_err());

        let deepest =
            AppConfig::default().with_minimax(MinimaxConfig::default().with_depth(MAX_DEPTH));
        assert!(deepest.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let result = AppConfig::load(Path::new("/nonexistent/ataxx.json"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
