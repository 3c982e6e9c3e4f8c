//! Single-game loop

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{board::Board, moves::Move, piece::PieceState};
use crate::ports::{GameContext, Player};

/// Default guard against games that never finish.
pub const DEFAULT_MAX_PLIES: usize = 10_000;

/// Summary of a finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    /// Winning colour, or `Empty` for a tie
    pub winner: PieceState,
    pub red_count: usize,
    pub blue_count: usize,
}

/// One game between two players, holding the authoritative board.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    moves: Vec<Move>,
    reported: Option<(Move, PieceState)>,
    max_plies: usize,
}

impl Game {
    /// Start a game from `board`.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            moves: Vec::new(),
            reported: None,
            max_plies: DEFAULT_MAX_PLIES,
        }
    }

    /// Set the ply limit after which [`Game::play`] gives up.
    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The most recent move reported by a player, with its colour.
    pub fn last_report(&self) -> Option<(Move, PieceState)> {
        self.reported
    }

    /// Ask `player` for one move and apply it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if the player is not on move,
    /// returns text that does not parse, returns a move other than the one
    /// it reported, or picks a move the board rejects.
    pub fn step(&mut self, player: &mut dyn Player) -> crate::Result<Move> {
        let color = self.board.next_move();
        let illegal = |mv: String, reason: &str| crate::Error::IllegalMove {
            mv,
            color: color.to_string(),
            reason: reason.to_string(),
        };

        if player.color() != color {
            return Err(illegal(
                String::new(),
                &format!("{} plays {} but it is not their turn", player.name(), player.color()),
            ));
        }

        self.reported = None;
        let text = player.get_move(self);
        let mv: Move = text
            .parse()
            .map_err(|_| illegal(text.clone(), "unparseable move text"))?;

        match self.reported {
            Some((reported, reported_color)) if reported == mv && reported_color == color => {}
            _ => return Err(illegal(text, "returned move differs from the reported one")),
        }
        if !self.board.move_legal(&mv) {
            return Err(illegal(text, "rejected by board rules"));
        }

        self.board.create_move(mv);
        self.moves.push(mv);
        debug!(player = player.name(), %color, %mv, ply = self.moves.len(), "move applied");
        Ok(mv)
    }

    /// Play until the game is decided.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Game::step`] and returns
    /// [`crate::Error::PlyLimit`] if no winner emerges in time.
    pub fn play(
        &mut self,
        red: &mut dyn Player,
        blue: &mut dyn Player,
    ) -> crate::Result<GameRecord> {
        loop {
            if let Some(winner) = self.board.winner() {
                let record = GameRecord {
                    moves: self.moves.clone(),
                    winner,
                    red_count: self.board.color_count(PieceState::Red),
                    blue_count: self.board.color_count(PieceState::Blue),
                };
                info!(
                    %winner,
                    red = record.red_count,
                    blue = record.blue_count,
                    plies = record.moves.len(),
                    "game over"
                );
                return Ok(record);
            }
            if self.moves.len() >= self.max_plies {
                return Err(crate::Error::PlyLimit {
                    limit: self.max_plies,
                });
            }

            if self.board.next_move() == PieceState::Red {
                self.step(red)?;
            } else {
                self.step(blue)?;
            }
        }
    }
}

impl GameContext for Game {
    fn board(&self) -> &Board {
        &self.board
    }

    fn report_move(&mut self, mv: Move, color: PieceState) {
        self.reported = Some((mv, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plays a fixed script, reporting each move honestly.
    struct Scripted {
        color: PieceState,
        script: Vec<Move>,
    }

    impl Player for Scripted {
        fn color(&self) -> PieceState {
            self.color
        }

        fn name(&self) -> &str {
            "scripted"
        }

        fn choose_move(&mut self, _board: &Board) -> Move {
            self.script.remove(0)
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    /// Reports one move but returns another.
    struct Liar;

    impl Player for Liar {
        fn color(&self) -> PieceState {
            PieceState::Red
        }

        fn name(&self) -> &str {
            "liar"
        }

        fn choose_move(&mut self, _board: &Board) -> Move {
            Move::new('a', '1', 'a', '2')
        }

        fn get_move(&mut self, game: &mut dyn GameContext) -> String {
            game.report_move(Move::new('a', '1', 'b', '2'), PieceState::Red);
            "a1-a2".to_string()
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    /// Answers with text that is not a move.
    struct Garbled;

    impl Player for Garbled {
        fn color(&self) -> PieceState {
            PieceState::Red
        }

        fn name(&self) -> &str {
            "garbled"
        }

        fn choose_move(&mut self, _board: &Board) -> Move {
            Move::Pass
        }

        fn get_move(&mut self, _game: &mut dyn GameContext) -> String {
            "a1-z9".to_string()
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    #[test]
    fn test_step_applies_reported_move() {
        let mut game = Game::new(Board::new());
        let mut red = Scripted {
            color: PieceState::Red,
            script: vec![Move::new('a', '1', 'b', '2')],
        };
        let mv = game.step(&mut red).unwrap();
        assert_eq!(mv.to_string(), "a1-b2");
        assert_eq!(game.board().next_move(), PieceState::Blue);
        assert_eq!(game.moves(), &[mv]);
        assert_eq!(game.last_report(), Some((mv, PieceState::Red)));
    }

    #[test]
    fn test_step_rejects_illegal_move() {
        let mut game = Game::new(Board::new());
        let mut red = Scripted {
            color: PieceState::Red,
            script: vec![Move::new('a', '1', 'a', '5')],
        };
        assert!(matches!(
            game.step(&mut red),
            Err(crate::Error::IllegalMove { .. })
        ));
        assert!(game.moves().is_empty());
    }

    #[test]
    fn test_step_rejects_wrong_side() {
        let mut game = Game::new(Board::new());
        let mut blue = Scripted {
            color: PieceState::Blue,
            script: vec![Move::new('a', '7', 'a', '6')],
        };
        assert!(game.step(&mut blue).is_err());
    }

    #[test]
    fn test_step_rejects_mismatched_report() {
        let mut game = Game::new(Board::new());
        assert!(game.step(&mut Liar).is_err());
    }

    #[test]
    fn test_step_rejects_unparseable_text() {
        let mut game = Game::new(Board::new());
        let err = game.step(&mut Garbled).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::IllegalMove { ref mv, .. } if mv == "a1-z9"
        ));
        assert!(game.moves().is_empty());
    }

    #[test]
    fn test_ply_limit() {
        let mut game = Game::new(Board::new()).with_max_plies(0);
        let mut red = Scripted {
            color: PieceState::Red,
            script: Vec::new(),
        };
        let mut blue = Scripted {
            color: PieceState::Blue,
            script: Vec::new(),
        };
        assert!(matches!(
            game.play(&mut red, &mut blue),
            Err(crate::Error::PlyLimit { limit: 0 })
        ));
    }
}
