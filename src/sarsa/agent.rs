//! ε-greedy tabular agent with a one-step TD update on every decision.

use std::{fmt, sync::Arc};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tracing::{debug, error, info, warn};

use crate::{
    Result,
    game::{Board, Move, PieceState, enumerate},
    ports::{Player, QTableRepository},
    sarsa::{
        config::SarsaConfig,
        q_table::{QTable, fingerprint},
    },
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Learning player backed by a persisted [`QTable`].
///
/// The table is loaded when the engine is built and written back through
/// the repository whenever one of its own moves ends the game.
pub struct SarsaEngine {
    color: PieceState,
    config: SarsaConfig,
    table: QTable,
    repository: Arc<dyn QTableRepository + Send + Sync>,
    rng: StdRng,
}

impl SarsaEngine {
    /// Create an engine and load its table from `config.table_path`.
    ///
    /// A missing or unreadable table is logged and replaced by an empty one.
    pub fn new(
        color: PieceState,
        config: SarsaConfig,
        repository: Arc<dyn QTableRepository + Send + Sync>,
    ) -> Self {
        let mut engine = Self {
            color,
            config,
            table: QTable::new(),
            repository,
            rng: build_rng(None),
        };
        engine.load_table();
        engine
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn config(&self) -> &SarsaConfig {
        &self.config
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }

    /// Replace the in-memory table with the stored one, or with an empty
    /// table if loading fails. Returns whether a stored table was found.
    pub fn load_table(&mut self) -> bool {
        let path = &self.config.table_path;
        match self.repository.load(path) {
            Ok(table) => {
                info!(
                    path = %path.display(),
                    states = table.len(),
                    values = table.size(),
                    "loaded Q-table"
                );
                self.table = table;
                true
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not load Q-table, starting empty");
                self.table = QTable::new();
                false
            }
        }
    }

    /// Write the whole table, replacing the previous snapshot.
    pub fn save_table(&self) -> Result<()> {
        self.repository.save(&self.table, &self.config.table_path)?;
        info!(
            path = %self.config.table_path.display(),
            states = self.table.len(),
            values = self.table.size(),
            "saved Q-table"
        );
        Ok(())
    }

    /// +1 if `board` is won by this engine, -1 if won by the opponent,
    /// 0 otherwise.
    fn reward(&self, board: &Board) -> f64 {
        match board.winner() {
            Some(winner) if winner == self.color => 1.0,
            Some(winner) if Some(winner) == self.color.opposite() => -1.0,
            _ => 0.0,
        }
    }

    fn select_action(&mut self, state: &str, legal: &[Move]) -> Option<Move> {
        if self.rng.random::<f64>() < self.config.epsilon {
            legal.choose(&mut self.rng).copied()
        } else {
            self.table.greedy_action(state, legal)
        }
    }

    /// Back up the value of `action` in `board` from the position it leads
    /// to. Returns the resulting position.
    fn learn(&mut self, board: &Board, state: &str, action: Move) -> Board {
        let mut next = *board;
        next.create_move(action);

        let next_state = fingerprint(&next);
        let next_legal = enumerate(&next, next.next_move());
        self.table.ensure_row(&next_state, &next_legal);

        let reward = self.reward(&next);
        let old = self.table.get(state, action).unwrap_or(0.0);
        let new = self.table.q_learning_update(
            state,
            action,
            reward,
            &next_state,
            self.config.learning_rate,
            self.config.discount_factor,
        );
        debug!(color = %self.color, mv = %action, reward, old, new, "updated Q-value");

        next
    }
}

impl fmt::Debug for SarsaEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SarsaEngine")
            .field("color", &self.color)
            .field("config", &self.config)
            .field("states", &self.table.len())
            .finish_non_exhaustive()
    }
}

impl Player for SarsaEngine {
    fn color(&self) -> PieceState {
        self.color
    }

    fn name(&self) -> &str {
        "sarsa"
    }

    fn choose_move(&mut self, board: &Board) -> Move {
        let legal = enumerate(board, board.next_move());
        if legal.is_empty() {
            return Move::Pass;
        }

        let state = fingerprint(board);
        self.table.ensure_row(&state, &legal);
        let Some(action) = self.select_action(&state, &legal) else {
            return Move::Pass;
        };

        let next = self.learn(board, &state, action);
        if next.winner().is_some() {
            if let Err(err) = self.save_table() {
                error!(
                    path = %self.config.table_path.display(),
                    error = %err,
                    "failed to save Q-table"
                );
            }
        }

        action
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
