//! SARSA engine parameters.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the persisted Q-table.
pub const DEFAULT_TABLE_PATH: &str = "ataxx_q.msgpack";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SarsaConfig {
    /// α in the update rule
    pub learning_rate: f64,
    /// γ in the update rule
    pub discount_factor: f64,
    /// Probability of playing a uniformly random legal move
    pub epsilon: f64,
    /// Where the table is loaded from and saved to
    pub table_path: PathBuf,
}

impl Default for SarsaConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            discount_factor: 0.9,
            epsilon: 0.1,
            table_path: PathBuf::from(DEFAULT_TABLE_PATH),
        }
    }
}

impl SarsaConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_table_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.table_path = path.into();
        self
    }

    /// Reject parameters outside `[0, 1]`.
    pub fn validate(&self) -> crate::Result<()> {
        let checks = [
            ("learning_rate", self.learning_rate),
            ("discount_factor", self.discount_factor),
            ("epsilon", self.epsilon),
        ];
        for (name, value) in checks {
            if !(0.0..=1.0).contains(&value) {
                return Err(crate::Error::InvalidConfiguration {
                    message: format!("{name} must be in [0, 1], got {value}"),
                });
            }
        }
        Ok(())
    }
}
