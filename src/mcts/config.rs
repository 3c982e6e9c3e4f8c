//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Number of select/expand/simulate/backpropagate rounds per move.
    pub iterations: u32,

    /// Constant inside the exploration term:
    /// `wins/visits + sqrt(exploration * ln(parent_visits) / visits)`.
    pub exploration: f64,

    /// Random playouts longer than this are scored as undecided.
    pub max_rollout_plies: usize,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            exploration: 2.0,
            max_rollout_plies: 2000,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            iterations: 100,
            ..Self::default()
        }
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_exploration(mut self, exploration: f64) -> Self {
        self.exploration = exploration;
        self
    }

    pub fn with_max_rollout_plies(mut self, plies: usize) -> Self {
        self.max_rollout_plies = plies;
        self
    }
}
