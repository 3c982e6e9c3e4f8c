//! Ataxx decision engines
//!
//! This crate provides:
//! - The 7×7 Ataxx rules: board, moves, legal-move enumeration and a
//!   single-game loop
//! - A depth-limited minimax engine with alpha-beta pruning
//! - A Monte Carlo Tree Search engine with UCT selection
//! - A tabular SARSA-style learner with a persisted Q-table
//! - A uniform random baseline, a DI container and a command-line front end

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod game;
pub mod mcts;
pub mod minimax;
pub mod ports;
pub mod random_player;
pub mod sarsa;

pub use error::{Error, Result};
pub use game::{Board, Game, GameRecord, Move, PieceState};
pub use mcts::MctsEngine;
pub use minimax::MinimaxEngine;
pub use ports::{GameContext, Player};
pub use random_player::RandomPlayer;
pub use sarsa::SarsaEngine;
