//! Player port - the boundary between engines and the game loop
//!
//! The game loop only knows about [`Player`]; minimax, MCTS, SARSA and the
//! random baseline all plug in behind it.

use crate::game::{Board, Move, PieceState};

/// What a player sees of the game it is taking part in.
///
/// Implemented by the game loop. A player reads the authoritative board
/// through it and reports the move it settled on.
pub trait GameContext {
    /// The current authoritative position.
    fn board(&self) -> &Board;

    /// Record the move `color` has chosen.
    fn report_move(&mut self, mv: Move, color: PieceState);
}

/// A participant in an Ataxx game.
///
/// # Examples
///
/// ```
/// use ataxx::{
///     game::{Board, Game, PieceState},
///     minimax::{MinimaxConfig, MinimaxEngine},
///     ports::Player,
/// };
///
/// let mut game = Game::new(Board::new());
/// let mut red = MinimaxEngine::new(PieceState::Red, MinimaxConfig::default().with_depth(1));
/// let text = red.get_move(&mut game);
/// assert_eq!(game.last_report().map(|(mv, _)| mv.to_string()), Some(text));
/// ```
pub trait Player: Send {
    /// The colour this player controls.
    fn color(&self) -> PieceState;

    /// Name used in logs and CLI output.
    fn name(&self) -> &str;

    /// Whether moves are computed without outside input. True for every
    /// engine in this crate.
    fn is_auto(&self) -> bool {
        true
    }

    /// Pick a move for the side to move on `board`.
    ///
    /// Engines work on a private copy; `board` is never mutated. Returns
    /// [`Move::Pass`] when no legal move exists.
    fn choose_move(&mut self, board: &Board) -> Move;

    /// Choose a move for the game's current position, report it, and
    /// return its text form.
    fn get_move(&mut self, game: &mut dyn GameContext) -> String {
        let board = *game.board();
        let mv = self.choose_move(&board);
        game.report_move(mv, self.color());
        mv.to_string()
    }

    /// Enable downcasting to concrete engine types.
    fn as_any(&self) -> &dyn std::any::Any;
}
