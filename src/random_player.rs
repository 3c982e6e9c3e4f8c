//! Uniform random baseline player

use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};

use crate::{
    game::{Board, Move, PieceState, enumerate},
    ports::Player,
};

/// Plays a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    color: PieceState,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(color: PieceState) -> Self {
        Self {
            color,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random player with a deterministic seed
    pub fn with_seed(color: PieceState, seed: u64) -> Self {
        Self {
            color,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn color(&self) -> PieceState {
        self.color
    }

    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board) -> Move {
        enumerate(board, board.next_move())
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Move::Pass)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
