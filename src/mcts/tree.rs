//! MCTS tree structure with arena allocation.
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`]: children
//! by a list of ids, the parent by a single id used only while
//! backpropagating. The tree is built for one decision and then dropped.

use super::node::{MctsNode, NodeId};
use crate::game::{Board, Move, PieceState};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree {
    nodes: Vec<MctsNode>,
    root: NodeId,
}

impl MctsTree {
    /// Create a tree holding only a root for `board`.
    pub fn new(board: Board) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(board)],
            root: NodeId(0),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a child of `parent` reached by `mv`, producing `board`.
    pub fn add_child(&mut self, parent: NodeId, mv: Move, board: Board) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(MctsNode::new_child(parent, mv, board));
        self.get_mut(parent).children.push(id);
        id
    }

    pub fn has_child_with_move(&self, node: NodeId, mv: Move) -> bool {
        self.get(node)
            .children
            .iter()
            .any(|&child| self.get(child).mv == Some(mv))
    }

    /// Credit a playout won by `winner` to `leaf` and all of its ancestors.
    ///
    /// Every node on the path gains a visit; a node gains a win only when
    /// `winner` is the side to move at that node.
    pub fn backpropagate(&mut self, leaf: NodeId, winner: PieceState) {
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.visits += 1;
            if node.to_move == winner {
                node.wins += 1;
            }
            current = node.parent;
        }
    }

    /// Visited child of `node` with the highest UCT score.
    pub fn best_child(&self, node: NodeId, exploration: f64) -> Option<NodeId> {
        let parent = self.get(node);
        let mut best: Option<(NodeId, f64)> = None;
        for &child in &parent.children {
            if let Some(score) = self.get(child).uct(parent.visits, exploration) {
                if best.is_none_or(|(_, top)| score > top) {
                    best = Some((child, score));
                }
            }
        }
        best.map(|(id, _)| id)
    }

    /// Move to play from the root: the move of [`MctsTree::best_child`],
    /// or a pass when the root has no visited child.
    pub fn best_move(&self, exploration: f64) -> Move {
        self.best_child(self.root, exploration)
            .and_then(|id| self.get(id).mv)
            .unwrap_or(Move::Pass)
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visits,
            root_children: root.children.len(),
            child_visits: root.children.iter().map(|&id| self.get(id).visits).sum(),
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        self.get(node_id)
            .children
            .iter()
            .map(|&id| self.compute_max_depth(id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_children: usize,
    /// Sum of the root children's visit counts
    pub child_visits: u32,
    pub max_depth: u32,
}
