//! Common test utilities for the ataxx test suite.
//!
//! Positions shared by several integration tests.

#![allow(dead_code)]

use ataxx::{Board, PieceState};

/// Parse a seven-row layout, top row first.
pub fn board(layout: &str, to_move: PieceState) -> Board {
    Board::from_layout(layout, to_move).expect("test layout should parse")
}

/// A crowded middle game with pieces of both colours in contact.
pub fn middle_game(to_move: PieceState) -> Board {
    board(
        "\
        b-b---r
        -bb--r-
        --rbb--
        -r-r---
        --b-rr-
        -r-----
        r-b---b",
        to_move,
    )
}

/// A position with blocked cells and few empty squares left.
pub fn late_game(to_move: PieceState) -> Board {
    board(
        "\
        bbrrb-r
        brrXrbb
        rrbbr-b
        XrbbbbX
        rbrrbr-
        bbrXrbr
        rr-bbbb",
        to_move,
    )
}

/// Red holds a1 and can capture the only blue piece on b1.
pub fn red_wins_next(to_move: PieceState) -> Board {
    board(
        "\
        -------
        -------
        -------
        -------
        -------
        -------
        rb-----",
        to_move,
    )
}

/// Only red pieces remain, so the game is already decided.
pub fn decided() -> Board {
    board(
        "\
        -------
        -------
        -------
        -------
        -------
        -------
        r------",
        PieceState::Red,
    )
}

/// Every position used by the engine-wide property tests.
pub fn undecided_positions() -> Vec<Board> {
    vec![
        Board::new(),
        middle_game(PieceState::Red),
        middle_game(PieceState::Blue),
        late_game(PieceState::Red),
        late_game(PieceState::Blue),
        red_wins_next(PieceState::Red),
    ]
}
