//! Q-table for the SARSA engine

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::game::{Board, Move};

/// Canonical key for a position: the ordinal digit of every cell in index
/// order (a1, b1, ..., g1, a2, ..., g7).
///
/// The side to move is not part of the key.
pub fn fingerprint(board: &Board) -> String {
    board
        .cells()
        .iter()
        .map(|cell| char::from(b'0' + cell.ordinal()))
        .collect()
}

/// Q-values keyed by position fingerprint, then by move.
///
/// Rows are created lazily the first time a position is queried, holding
/// the legal moves of that position at 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QTable {
    rows: HashMap<String, HashMap<Move, f64>>,
}

impl QTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `state` has a row and that every move in `legal` has an
    /// entry in it. Existing values are left alone.
    pub fn ensure_row(&mut self, state: &str, legal: &[Move]) {
        let row = self.rows.entry(state.to_string()).or_default();
        for &mv in legal {
            row.entry(mv).or_insert(0.0);
        }
    }

    /// Stored value for `(state, action)`, if any
    pub fn get(&self, state: &str, action: Move) -> Option<f64> {
        self.rows.get(state).and_then(|row| row.get(&action)).copied()
    }

    pub fn set(&mut self, state: &str, action: Move, value: f64) {
        self.rows
            .entry(state.to_string())
            .or_default()
            .insert(action, value);
    }

    pub fn row(&self, state: &str) -> Option<&HashMap<Move, f64>> {
        self.rows.get(state)
    }

    /// Largest value stored for `state`, or 0 when the row is missing or
    /// empty.
    pub fn max_q(&self, state: &str) -> f64 {
        self.rows
            .get(state)
            .and_then(|row| row.values().copied().reduce(f64::max))
            .unwrap_or(0.0)
    }

    /// Legal move with the highest value; ties go to the earliest move in
    /// `legal`. Moves without an entry count as 0.
    pub fn greedy_action(&self, state: &str, legal: &[Move]) -> Option<Move> {
        let mut best: Option<(Move, f64)> = None;
        for &mv in legal {
            let value = self.get(state, mv).unwrap_or(0.0);
            if best.is_none_or(|(_, top)| value > top) {
                best = Some((mv, value));
            }
        }
        best.map(|(mv, _)| mv)
    }

    /// One-step backup toward the best value of the successor:
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// Returns the new value of `(state, action)`.
    pub fn q_learning_update(
        &mut self,
        state: &str,
        action: Move,
        reward: f64,
        next_state: &str,
        learning_rate: f64,
        discount_factor: f64,
    ) -> f64 {
        let current_q = self.get(state, action).unwrap_or(0.0);
        let td_target = reward + discount_factor * self.max_q(next_state);
        let new_q = current_q + learning_rate * (td_target - current_q);
        self.set(state, action, new_q);
        new_q
    }

    /// Number of positions with a row
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of (position, move) values stored
    pub fn size(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &HashMap<Move, f64>)> {
        self.rows.iter().map(|(state, row)| (state.as_str(), row))
    }
}
