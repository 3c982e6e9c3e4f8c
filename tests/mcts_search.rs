mod common;

use ataxx::{
    Board, Move, PieceState, Player,
    game::enumerate,
    mcts::{MctsConfig, MctsEngine},
};
use common::{late_game, middle_game, red_wins_next};

fn engine(iterations: u32, seed: u64) -> MctsEngine {
    MctsEngine::new(
        PieceState::Red,
        MctsConfig::default().with_iterations(iterations),
    )
    .with_seed(seed)
}

#[test]
fn root_visits_match_iterations() {
    for iterations in [1, 2, 17, 200] {
        let tree = engine(iterations, 3).search(&Board::new());
        let stats = tree.stats();
        assert_eq!(stats.root_visits, iterations);
        assert_eq!(stats.root_children, 16);
        // The first iteration stops at the unexpanded root.
        assert_eq!(stats.child_visits, iterations - 1);
    }
}

#[test]
fn root_children_follow_enumeration_order() {
    let board = middle_game(PieceState::Red);
    let tree = engine(5, 1).search(&board);
    let root = tree.get(tree.root());
    let moves: Vec<_> = root
        .children
        .iter()
        .map(|&id| tree.get(id).mv.unwrap())
        .collect();
    assert_eq!(moves, enumerate(&board, PieceState::Red));
}

#[test]
fn same_seed_gives_same_move() {
    let board = late_game(PieceState::Red);
    let a = engine(150, 42).choose_move(&board);
    let b = engine(150, 42).choose_move(&board);
    assert_eq!(a, b);
    assert!(board.move_legal(&a));
}

#[test]
fn tree_grows_below_the_root() {
    let tree = engine(300, 8).search(&Board::new());
    let stats = tree.stats();
    assert!(stats.max_depth >= 2);
    assert!(stats.total_nodes > 17);
}

#[test]
fn wins_are_credited_to_the_side_to_move_at_each_node() {
    let board = red_wins_next(PieceState::Red);
    let tree = engine(400, 5).search(&board);
    let root = tree.get(tree.root());

    let winning: Move = "a1-a2".parse().unwrap();
    let child = root
        .children
        .iter()
        .map(|&id| tree.get(id))
        .find(|node| node.mv == Some(winning))
        .unwrap();

    // Every playout through a1-a2 is a red win, but blue is to move there.
    assert!(child.visits > 0);
    assert_eq!(child.wins, 0);
    assert!(!child.is_expanded());

    // Red is to move at the root and collects at least one win per
    // capturing child: a2, b2, c1 and c2.
    assert!(root.wins >= 4);
}
