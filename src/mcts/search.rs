//! MCTS search implementation.
//!
//! Each iteration runs the four classic phases:
//! 1. Selection: descend by UCT until a childless node
//! 2. Expansion: add a child for every legal move not yet in the tree
//! 3. Simulation: random playout from the selected node
//! 4. Backpropagation: update visits and wins back to the root

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tracing::{debug, trace};

use super::{config::MctsConfig, node::NodeId, tree::MctsTree};
use crate::{
    game::{Board, Move, PieceState, enumerate},
    ports::Player,
};

/// Monte Carlo Tree Search player.
#[derive(Debug, Clone)]
pub struct MctsEngine {
    color: PieceState,
    config: MctsConfig,
    rng: StdRng,
}

impl MctsEngine {
    pub fn new(color: PieceState, config: MctsConfig) -> Self {
        Self {
            color,
            config,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Build a search tree for `board` using the configured iteration count.
    pub fn search(&mut self, board: &Board) -> MctsTree {
        let mut tree = MctsTree::new(*board);
        for _ in 0..self.config.iterations {
            self.iterate(&mut tree);
        }
        tree
    }

    /// Run a single select -> expand -> simulate -> backpropagate round.
    fn iterate(&mut self, tree: &mut MctsTree) {
        let node = self.select(tree);

        if tree.get(node).board.winner().is_none() {
            self.expand(tree, node);
        }

        let winner = self.simulate(&tree.get(node).board);
        tree.backpropagate(node, winner);

        trace!(node = node.0, %winner, "MCTS iteration complete");
    }

    /// Descend from the root until reaching a node without children.
    fn select(&mut self, tree: &MctsTree) -> NodeId {
        let mut current = tree.root();
        while tree.get(current).is_expanded() {
            current = self.select_child(tree, current);
        }
        current
    }

    /// Child of an expanded node to descend into: the first unvisited child
    /// if any, else the UCT maximum, else a uniformly random child.
    fn select_child(&mut self, tree: &MctsTree, node_id: NodeId) -> NodeId {
        let node = tree.get(node_id);
        let mut selected = None;
        let mut best = f64::NEG_INFINITY;

        for &child in &node.children {
            match tree.get(child).uct(node.visits, self.config.exploration) {
                None => return child,
                Some(score) if score > best => {
                    best = score;
                    selected = Some(child);
                }
                Some(_) => {}
            }
        }

        selected.unwrap_or_else(|| node.children[self.rng.random_range(0..node.children.len())])
    }

    /// Add one child per legal move that is not represented yet.
    fn expand(&mut self, tree: &mut MctsTree, node_id: NodeId) {
        let board = tree.get(node_id).board;
        for mv in enumerate(&board, board.next_move()) {
            if !tree.has_child_with_move(node_id, mv) {
                let mut child = board;
                child.create_move(mv);
                tree.add_child(node_id, mv, child);
            }
        }
    }

    /// Play uniformly random legal moves until the game is decided.
    ///
    /// Returns the winner, or `Empty` for a tie, a position with no legal
    /// move, or a playout cut off by `max_rollout_plies`.
    fn simulate(&mut self, start: &Board) -> PieceState {
        let mut board = *start;
        let mut plies = 0;

        while board.winner().is_none() {
            if plies >= self.config.max_rollout_plies {
                return PieceState::Empty;
            }
            let moves = enumerate(&board, board.next_move());
            let Some(&mv) = moves.choose(&mut self.rng) else {
                break;
            };
            board.create_move(mv);
            plies += 1;
        }

        board.winner().unwrap_or(PieceState::Empty)
    }
}

impl Player for MctsEngine {
    fn color(&self) -> PieceState {
        self.color
    }

    fn name(&self) -> &str {
        "mcts"
    }

    fn choose_move(&mut self, board: &Board) -> Move {
        let tree = self.search(board);
        let mv = tree.best_move(self.config.exploration);
        let stats = tree.stats();
        debug!(
            color = %self.color,
            iterations = self.config.iterations,
            nodes = stats.total_nodes,
            root_children = stats.root_children,
            max_depth = stats.max_depth,
            %mv,
            "MCTS search finished"
        );
        mv
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
