//! Dependency injection container for the Ataxx application.
//!
//! The container owns the Q-table repository and the default seed, and
//! turns an [`EngineKind`] plus an [`AppConfig`] into a ready-to-play
//! boxed [`Player`].

use std::{path::Path, sync::Arc};

use super::config::{AppConfig, EngineKind};
use crate::{
    Result,
    adapters::MsgPackRepository,
    game::PieceState,
    mcts::MctsEngine,
    minimax::MinimaxEngine,
    ports::{Player, QTableRepository},
    random_player::RandomPlayer,
    sarsa::{QTable, SarsaEngine},
};

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```no_run
/// use ataxx::app::{App, AppConfig, EngineKind};
/// use ataxx::game::PieceState;
///
/// let app = App::new();
/// let player = app.create_player(EngineKind::Sarsa, PieceState::Red, &AppConfig::default());
/// assert_eq!(player.name(), "sarsa");
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use ataxx::app::App;
/// use ataxx::adapters::InMemoryRepository;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build();
/// ```
pub struct App {
    /// Repository for Q-table persistence
    table_repository: Arc<dyn QTableRepository + Send + Sync>,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app with production defaults: `MsgPackRepository` and
    /// no default seed.
    pub fn new() -> Self {
        Self {
            table_repository: Arc::new(MsgPackRepository::new()),
            default_seed: None,
        }
    }

    /// Create a builder for constructing app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn table_repository(&self) -> Arc<dyn QTableRepository + Send + Sync> {
        Arc::clone(&self.table_repository)
    }

    /// Build a player of the given kind for `color`.
    ///
    /// The seed in `config` wins over the container default. SARSA players
    /// load their table through the container's repository.
    pub fn create_player(
        &self,
        kind: EngineKind,
        color: PieceState,
        config: &AppConfig,
    ) -> Box<dyn Player> {
        let seed = config.seed.or(self.default_seed);
        match kind {
            EngineKind::Minimax => Box::new(MinimaxEngine::new(color, config.minimax)),
            EngineKind::Mcts => {
                let engine = MctsEngine::new(color, config.mcts);
                Box::new(match seed {
                    Some(seed) => engine.with_seed(seed),
                    None => engine,
                })
            }
            EngineKind::Sarsa => {
                let engine =
                    SarsaEngine::new(color, config.sarsa.clone(), self.table_repository());
                Box::new(match seed {
                    Some(seed) => engine.with_seed(seed),
                    None => engine,
                })
            }
            EngineKind::Random => Box::new(match seed {
                Some(seed) => RandomPlayer::with_seed(color, seed),
                None => RandomPlayer::new(color),
            }),
        }
    }

    /// Load a Q-table through the configured repository.
    pub fn load_table(&self, path: &Path) -> Result<QTable> {
        self.table_repository.load(path)
    }

    pub fn save_table(&self, table: &QTable, path: &Path) -> Result<()> {
        self.table_repository.save(table, path)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing app with custom dependencies.
///
/// Primarily used for testing to inject in-memory repositories and control
/// randomness.
pub struct AppBuilder {
    table_repository: Option<Arc<dyn QTableRepository + Send + Sync>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            table_repository: None,
            default_seed: None,
        }
    }

    pub fn with_repository<R: QTableRepository + Send + Sync + 'static>(mut self, repo: R) -> Self {
        self.table_repository = Some(Arc::new(repo));
        self
    }

    /// Set a default random seed for all players created by this container.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app. Without a repository, uses `MsgPackRepository`.
    pub fn build(self) -> App {
        App {
            table_repository: self
                .table_repository
                .unwrap_or_else(|| Arc::new(MsgPackRepository::new())),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
