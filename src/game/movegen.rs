//! Legal move enumeration shared by every engine

use super::{
    board::{Board, SIDE},
    moves::{Coord, Move},
    piece::PieceState,
};

/// All legal moves for `color` on `board`, in a fixed order.
///
/// Pieces are scanned from row 7 down to row 1 and from column a to g
/// within a row. For each piece the 24 offsets within distance 2 are tried
/// column offset first (-2..=2), then row offset (-2..=2). The order is
/// what engines use to break ties.
///
/// An empty result means `color` has no legal move: it is not on move, or
/// the game is already decided.
pub fn enumerate(board: &Board, color: PieceState) -> Vec<Move> {
    let mut moves = Vec::new();
    if color != board.next_move() || board.winner().is_some() {
        return moves;
    }

    for row in (0..SIDE as i8).rev() {
        for col in 0..SIDE as i8 {
            let from = Coord::new(col, row);
            if board.content_at(from) != color {
                continue;
            }
            for dcol in -2..=2 {
                for drow in -2..=2 {
                    if (dcol, drow) == (0, 0) {
                        continue;
                    }
                    let mv = Move::step(from, from.offset(dcol, drow));
                    if board.step_legal(&mv) {
                        moves.push(mv);
                    }
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_moves() {
        let board = Board::new();
        let moves = enumerate(&board, PieceState::Red);
        // Each corner piece has 3 clones and 5 jumps.
        assert_eq!(moves.len(), 16);
        // g7 is scanned before a1.
        assert_eq!(moves[0].from().unwrap().to_string(), "g7");
        assert_eq!(moves[8].from().unwrap().to_string(), "a1");
        assert!(moves.iter().all(|mv| board.move_legal(mv)));
    }

    #[test]
    fn test_offset_order_within_piece() {
        let board = Board::new();
        let moves = enumerate(&board, PieceState::Red);
        let from_a1: Vec<String> = moves[8..].iter().map(|mv| mv.to_string()).collect();
        assert_eq!(
            from_a1,
            vec![
                "a1-a2", "a1-a3", "a1-b1", "a1-b2", "a1-b3", "a1-c1", "a1-c2", "a1-c3"
            ]
        );
    }

    #[test]
    fn test_side_not_to_move_has_no_moves() {
        let board = Board::new();
        assert!(enumerate(&board, PieceState::Blue).is_empty());
        assert!(enumerate(&board, PieceState::Empty).is_empty());
    }

    #[test]
    fn test_decided_board_has_no_moves() {
        let layout = "\
            -------
            -------
            -------
            -------
            -------
            -------
            r------";
        let board = Board::from_layout(layout, PieceState::Red).unwrap();
        assert!(board.winner().is_some());
        assert!(enumerate(&board, PieceState::Red).is_empty());
    }
}
