//! Application layer with dependency injection container.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  App (container)                         │
//! │    owns ──▶ QTableRepository adapter     │
//! │    builds ─▶ Box<dyn Player>             │
//! │               (minimax, mcts, sarsa,     │
//! │                random) from AppConfig    │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use ataxx::app::{App, AppConfig, EngineKind};
//! use ataxx::game::{Board, Game, PieceState};
//!
//! let app = App::new();
//! let config = AppConfig::default().with_seed(42);
//! let mut red = app.create_player(EngineKind::Random, PieceState::Red, &config);
//! let mut blue = app.create_player(EngineKind::Random, PieceState::Blue, &config);
//!
//! let record = Game::new(Board::new()).play(red.as_mut(), blue.as_mut())?;
//! assert!(record.red_count + record.blue_count > 0);
//! # Ok::<(), ataxx::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::{AppConfig, EngineKind};
pub use container::{App, AppBuilder};
