//! Ports (trait boundaries) for external collaborators.
//!
//! These traits are owned by the engine layer and implemented by the game
//! loop and by storage adapters.

pub mod player;
pub mod repository;

pub use player::{GameContext, Player};
pub use repository::QTableRepository;
