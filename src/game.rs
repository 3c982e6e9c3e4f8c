//! Ataxx rules and the single-game loop

pub mod board;
pub mod movegen;
pub mod moves;
pub mod piece;
pub mod session;

pub use board::{Board, CELLS, SIDE};
pub use movegen::enumerate;
pub use moves::{Coord, Move};
pub use piece::PieceState;
pub use session::{Game, GameRecord};
