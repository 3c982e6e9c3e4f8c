//! Properties every engine must satisfy, whatever its strategy.

mod common;

use std::sync::Arc;

use ataxx::{
    MctsEngine, MinimaxEngine, Move, PieceState, Player, RandomPlayer, SarsaEngine,
    adapters::InMemoryRepository,
    mcts::MctsConfig,
    minimax::MinimaxConfig,
    sarsa::SarsaConfig,
};
use common::{board, decided, undecided_positions};

fn engines(color: PieceState) -> Vec<Box<dyn Player>> {
    vec![
        Box::new(MinimaxEngine::new(
            color,
            MinimaxConfig::default().with_depth(2),
        )),
        Box::new(MctsEngine::new(color, MctsConfig::default().with_iterations(60)).with_seed(11)),
        Box::new(
            SarsaEngine::new(
                color,
                SarsaConfig::default().with_table_path("props"),
                Arc::new(InMemoryRepository::new()),
            )
            .with_seed(11),
        ),
        Box::new(RandomPlayer::with_seed(color, 11)),
    ]
}

#[test]
fn every_engine_plays_a_legal_move() {
    for position in undecided_positions() {
        for mut engine in engines(position.next_move()) {
            let mv = engine.choose_move(&position);
            assert!(
                position.move_legal(&mv),
                "{} chose illegal {mv} in\n{position}",
                engine.name()
            );
            assert!(!mv.is_pass());
        }
    }
}

#[test]
fn every_engine_passes_without_legal_moves() {
    // Blue's corner piece is buried two cells deep in red.
    let walled = board(
        "\
        brr----
        rrr----
        rrr----
        -------
        -------
        -------
        -------",
        PieceState::Blue,
    );
    assert!(!walled.can_move(PieceState::Blue));

    for position in [decided(), walled] {
        for mut engine in engines(position.next_move()) {
            assert_eq!(
                engine.choose_move(&position),
                Move::Pass,
                "{} should pass",
                engine.name()
            );
        }
    }
}

#[test]
fn every_engine_is_automatic() {
    for engine in engines(PieceState::Red) {
        assert!(engine.is_auto());
    }
}
