//! Tabular temporal difference learning for Ataxx
//!
//! The SARSA engine keeps a Q-table mapping a position fingerprint to a
//! value per move. Every decision is ε-greedy over the legal moves and is
//! followed by a one-step backup:
//!
//! ```text
//! Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
//! ```
//!
//! where `s'` is the position the move leads to and `r` is +1/-1 only when
//! that position is won/lost. The backup uses the best successor value
//! rather than the value of the move actually played next.
//!
//! ## Usage Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use ataxx::{
//!     adapters::MsgPackRepository,
//!     game::{Board, PieceState},
//!     ports::Player,
//!     sarsa::{SarsaConfig, SarsaEngine},
//! };
//!
//! let mut engine = SarsaEngine::new(
//!     PieceState::Red,
//!     SarsaConfig::default().with_epsilon(0.05),
//!     Arc::new(MsgPackRepository::new()),
//! );
//! let mv = engine.choose_move(&Board::new());
//! println!("{mv}");
//! ```

pub mod agent;
pub mod config;
pub mod q_table;
pub mod serialization;

pub use agent::SarsaEngine;
pub use config::{DEFAULT_TABLE_PATH, SarsaConfig};
pub use q_table::{QTable, fingerprint};
pub use serialization::SavedQTable;
