//! Depth-limited minimax search with alpha-beta pruning
//!
//! Positions are scored from red's point of view: red maximises, blue
//! minimises. Decided positions score `±(WINNING_VALUE + depth)` so that a
//! quicker win is preferred over a slower one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    game::{Board, Move, PieceState, enumerate},
    ports::Player,
};

/// Magnitude of a won position (before the depth bonus).
pub const WINNING_VALUE: i32 = i32::MAX - 20;

/// Bound larger than any score.
pub const INFTY: i32 = i32::MAX;

/// Deepest search whose win scores stay below [`INFTY`].
pub const MAX_DEPTH: u32 = 20;

/// Minimax search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimaxConfig {
    /// Plies searched before falling back to the static evaluator
    pub depth: u32,
    /// Multiplier applied to the piece-count difference
    pub material_weight: i32,
    /// Disable to run the exhaustive full-width search
    pub pruning: bool,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            material_weight: 1,
            pruning: true,
        }
    }
}

impl MinimaxConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_material_weight(mut self, weight: i32) -> Self {
        self.material_weight = weight;
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}

/// Result of one root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Chosen move, `Pass` if nothing was found
    pub best_move: Move,
    /// Value of the root position (red-positive)
    pub score: i32,
    /// Positions visited, including the root
    pub nodes: u64,
}

/// Alpha-beta minimax player.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    color: PieceState,
    config: MinimaxConfig,
}

impl MinimaxEngine {
    pub fn new(color: PieceState, config: MinimaxConfig) -> Self {
        Self { color, config }
    }

    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Search `board` for the side to move.
    pub fn search(&self, board: &Board) -> SearchOutcome {
        let mut search = Search {
            config: &self.config,
            found: None,
            nodes: 0,
        };
        let sense = if board.next_move() == PieceState::Red {
            1
        } else {
            -1
        };
        let score = search.min_max(board, self.config.depth, true, sense, -INFTY, INFTY);
        SearchOutcome {
            best_move: search.found.unwrap_or(Move::Pass),
            score,
            nodes: search.nodes,
        }
    }
}

struct Search<'a> {
    config: &'a MinimaxConfig,
    found: Option<Move>,
    nodes: u64,
}

impl Search<'_> {
    /// Static value of `board`: a depth-biased win score when decided,
    /// otherwise the weighted material balance.
    fn static_score(&self, board: &Board, depth: u32) -> i32 {
        let winning = WINNING_VALUE.saturating_add(depth as i32);
        match board.winner() {
            Some(PieceState::Red) => winning,
            Some(PieceState::Blue) => -winning,
            Some(_) => 0,
            None => {
                let red = board.color_count(PieceState::Red) as i32;
                let blue = board.color_count(PieceState::Blue) as i32;
                (red - blue).saturating_mul(self.config.material_weight)
            }
        }
    }

    /// Value of `board` searched `depth` plies deep. Records the best root
    /// move in `found` iff `save_move`; the first move stands in until one
    /// beats the starting bound.
    fn min_max(
        &mut self,
        board: &Board,
        depth: u32,
        save_move: bool,
        sense: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 || board.winner().is_some() {
            return self.static_score(board, depth);
        }

        let moves = enumerate(board, board.next_move());
        if moves.is_empty() {
            return self.static_score(board, depth);
        }

        let mut best = if sense == 1 { -INFTY } else { INFTY };
        for mv in moves {
            let mut child = *board;
            child.create_move(mv);
            let value = self.min_max(&child, depth - 1, false, -sense, alpha, beta);

            let first = save_move && self.found.is_none();
            if sense == 1 {
                if value > best || first {
                    best = value;
                    if save_move {
                        self.found = Some(mv);
                    }
                }
                alpha = alpha.max(best);
            } else {
                if value < best || first {
                    best = value;
                    if save_move {
                        self.found = Some(mv);
                    }
                }
                beta = beta.min(best);
            }

            if self.config.pruning && beta <= alpha {
                break;
            }
        }
        best
    }
}

impl Player for MinimaxEngine {
    fn color(&self) -> PieceState {
        self.color
    }

    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, board: &Board) -> Move {
        let outcome = self.search(board);
        debug!(
            color = %self.color,
            depth = self.config.depth,
            score = outcome.score,
            nodes = outcome.nodes,
            mv = %outcome.best_move,
            "minimax search finished"
        );
        outcome.best_move
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
