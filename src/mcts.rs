//! Monte Carlo Tree Search with UCT selection
//!
//! The tree lives in an arena ([`MctsTree`]) built for one decision. The
//! engine ([`MctsEngine`]) drives a fixed number of iterations and then
//! plays the root child with the best UCT score.

pub mod config;
pub mod node;
pub mod search;
pub mod tree;

pub use config::MctsConfig;
pub use node::{MctsNode, NodeId};
pub use search::MctsEngine;
pub use tree::{MctsTree, TreeStats};
