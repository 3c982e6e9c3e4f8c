//! MCTS tree node representation.
//!
//! Each node holds the position reached by playing `mv` from its parent,
//! plus the visit and win counters used for UCT selection.

use crate::game::{Board, Move, PieceState};

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode {
    /// Position at this node
    pub board: Board,

    /// Move that led here from the parent (`None` for the root)
    pub mv: Option<Move>,

    /// Parent node (`None` for the root)
    pub parent: Option<NodeId>,

    /// Children in expansion order
    pub children: Vec<NodeId>,

    /// Number of playouts that passed through this node
    pub visits: u32,

    /// Playouts won by the side to move at this node
    pub wins: u32,

    /// Side to move when the node was created
    pub to_move: PieceState,
}

impl MctsNode {
    pub fn new_root(board: Board) -> Self {
        Self {
            board,
            mv: None,
            parent: None,
            children: Vec::new(),
            visits: 0,
            wins: 0,
            to_move: board.next_move(),
        }
    }

    pub fn new_child(parent: NodeId, mv: Move, board: Board) -> Self {
        Self {
            board,
            mv: Some(mv),
            parent: Some(parent),
            children: Vec::new(),
            visits: 0,
            wins: 0,
            to_move: board.next_move(),
        }
    }

    /// UCT score seen from a parent with `parent_visits` visits.
    ///
    /// `None` for an unvisited node: its score is undefined and selection
    /// treats it separately.
    #[inline]
    pub fn uct(&self, parent_visits: u32, exploration: f64) -> Option<f64> {
        if self.visits == 0 {
            return None;
        }
        let visits = self.visits as f64;
        let exploit = self.wins as f64 / visits;
        let explore = (exploration * (parent_visits as f64).ln() / visits).sqrt();
        Some(exploit + explore)
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_root() {
        let node = MctsNode::new_root(Board::new());
        assert!(node.parent.is_none());
        assert!(node.mv.is_none());
        assert_eq!(node.to_move, PieceState::Red);
        assert!(!node.is_expanded());
    }

    #[test]
    fn test_child_records_side_to_move() {
        let mut board = Board::new();
        let mv = Move::new('a', '1', 'b', '2');
        board.create_move(mv);
        let node = MctsNode::new_child(NodeId(0), mv, board);
        assert_eq!(node.parent, Some(NodeId(0)));
        assert_eq!(node.mv, Some(mv));
        assert_eq!(node.to_move, PieceState::Blue);
    }

    #[test]
    fn test_uct_score() {
        let mut node = MctsNode::new_root(Board::new());
        assert_eq!(node.uct(10, 2.0), None);

        node.visits = 4;
        node.wins = 2;
        // 2/4 + sqrt(2 * ln(16) / 4)
        let expected = 0.5 + (2.0 * 16f64.ln() / 4.0).sqrt();
        let score = node.uct(16, 2.0).unwrap();
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_uct_single_parent_visit_is_pure_win_rate() {
        let mut node = MctsNode::new_root(Board::new());
        node.visits = 1;
        node.wins = 1;
        assert_eq!(node.uct(1, 2.0), Some(1.0));
    }
}
