//! Board state representation and rules

use std::fmt;

use super::{
    moves::{Coord, Move},
    piece::PieceState,
};

/// Number of rows and columns.
pub const SIDE: usize = 7;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Offsets reachable by a clone (distance 1).
const NEIGHBOURS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Complete Ataxx position: 49 cells plus the colour to move.
///
/// `Board` is `Copy`; every search branch works on its own snapshot and the
/// game's authoritative board is never touched by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [PieceState; CELLS],
    to_move: PieceState,
}

impl Board {
    /// Standard starting position: red on a1 and g7, blue on a7 and g1,
    /// red to move.
    pub fn new() -> Self {
        let mut board = Self::empty(PieceState::Red);
        board.put(Coord::from_chars('a', '1'), PieceState::Red);
        board.put(Coord::from_chars('g', '7'), PieceState::Red);
        board.put(Coord::from_chars('a', '7'), PieceState::Blue);
        board.put(Coord::from_chars('g', '1'), PieceState::Blue);
        board
    }

    /// A board with no pieces at all.
    pub fn empty(to_move: PieceState) -> Self {
        Self {
            cells: [PieceState::Empty; CELLS],
            to_move: if to_move.is_color() {
                to_move
            } else {
                PieceState::Red
            },
        }
    }

    /// Parse a layout of seven rows, top row (7) first.
    ///
    /// Cells use `r`, `b`, `-` (or `.`) and `X` for blocked; whitespace
    /// inside a row is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardLayout`] if the layout does not
    /// have exactly seven rows of seven recognised cells.
    pub fn from_layout(layout: &str, to_move: PieceState) -> crate::Result<Self> {
        if !to_move.is_color() {
            return Err(crate::Error::InvalidBoardLayout {
                reason: format!("side to move must be red or blue, got {to_move}"),
            });
        }

        let rows: Vec<Vec<char>> = layout
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != SIDE {
            return Err(crate::Error::InvalidBoardLayout {
                reason: format!("expected {SIDE} rows, got {}", rows.len()),
            });
        }

        let mut board = Self::empty(to_move);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != SIDE {
                return Err(crate::Error::InvalidBoardLayout {
                    reason: format!("row {} has {} cells, expected {SIDE}", SIDE - i, row.len()),
                });
            }
            for (col, &c) in row.iter().enumerate() {
                let piece =
                    PieceState::from_char(c).ok_or_else(|| crate::Error::InvalidBoardLayout {
                        reason: format!("unknown cell character '{c}' in row {}", SIDE - i),
                    })?;
                board.put(Coord::new(col as i8, (SIDE - 1 - i) as i8), piece);
            }
        }
        Ok(board)
    }

    /// Flat index of the cell at column `col` (`'a'..='g'`) and row `row`
    /// (`'1'..='7'`), or `None` off the grid.
    pub fn index(col: char, row: char) -> Option<usize> {
        Coord::from_chars(col, row).index()
    }

    /// Content of the cell at a flat index. Indices past the grid read as
    /// blocked.
    pub fn content(&self, index: usize) -> PieceState {
        self.cells.get(index).copied().unwrap_or(PieceState::Blocked)
    }

    /// Content of a cell. Off-grid coordinates read as blocked.
    pub fn content_at(&self, coord: Coord) -> PieceState {
        coord
            .index()
            .map_or(PieceState::Blocked, |index| self.cells[index])
    }

    /// All cells in index order (a1, b1, ..., g7).
    pub fn cells(&self) -> &[PieceState; CELLS] {
        &self.cells
    }

    /// Place a piece during setup. Off-grid coordinates are ignored.
    pub fn put(&mut self, coord: Coord, piece: PieceState) {
        if let Some(index) = coord.index() {
            self.cells[index] = piece;
        }
    }

    /// Block a cell together with its mirror images across both axes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardLayout`] if any of the mirrored
    /// cells is already occupied.
    pub fn set_block(&mut self, coord: Coord) -> crate::Result<()> {
        let last = SIDE as i8 - 1;
        let mirrors = [
            coord,
            Coord::new(last - coord.col(), coord.row()),
            Coord::new(coord.col(), last - coord.row()),
            Coord::new(last - coord.col(), last - coord.row()),
        ];
        for cell in mirrors {
            match self.content_at(cell) {
                PieceState::Empty | PieceState::Blocked if cell.is_on_board() => {}
                other => {
                    return Err(crate::Error::InvalidBoardLayout {
                        reason: format!("cannot block {cell}: it holds {other}"),
                    });
                }
            }
        }
        for cell in mirrors {
            self.put(cell, PieceState::Blocked);
        }
        Ok(())
    }

    /// The colour whose turn it is.
    pub fn next_move(&self) -> PieceState {
        self.to_move
    }

    /// Override the side to move (setup only). Non-colours are ignored.
    pub fn set_next_move(&mut self, color: PieceState) {
        if color.is_color() {
            self.to_move = color;
        }
    }

    /// Number of cells holding `color`.
    pub fn color_count(&self, color: PieceState) -> usize {
        self.cells.iter().filter(|&&cell| cell == color).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&PieceState::Empty)
    }

    /// Whether `color` has any clone or jump available, ignoring whose turn
    /// it is.
    pub fn can_move(&self, color: PieceState) -> bool {
        if !color.is_color() {
            return false;
        }
        self.cells.iter().enumerate().any(|(index, &cell)| {
            cell == color && {
                let from = Coord::from_index(index);
                (-2..=2).any(|dc| {
                    (-2..=2).any(|dr| {
                        (dc, dr) != (0, 0)
                            && self.content_at(from.offset(dc, dr)) == PieceState::Empty
                    })
                })
            }
        })
    }

    /// The game result, if decided.
    ///
    /// The game is over once the board is full or either side has no move
    /// left. The side with more pieces wins; `Some(Empty)` is a tie and
    /// `None` means the game continues.
    pub fn winner(&self) -> Option<PieceState> {
        if !self.is_full() && self.can_move(PieceState::Red) && self.can_move(PieceState::Blue) {
            return None;
        }
        let red = self.color_count(PieceState::Red);
        let blue = self.color_count(PieceState::Blue);
        Some(match red.cmp(&blue) {
            std::cmp::Ordering::Greater => PieceState::Red,
            std::cmp::Ordering::Less => PieceState::Blue,
            std::cmp::Ordering::Equal => PieceState::Empty,
        })
    }

    /// Whether `mv` may be played by the side to move.
    ///
    /// Once the game is decided only a pass is legal; while it is undecided
    /// both sides can move, so a pass never is.
    pub fn move_legal(&self, mv: &Move) -> bool {
        match mv {
            Move::Pass => self.winner().is_some() || !self.can_move(self.to_move),
            Move::Step { .. } => self.step_legal(mv) && self.winner().is_none(),
        }
    }

    /// Shape check for a step: source holds the mover's piece, destination
    /// is an empty cell one or two away. Does not look at the game result.
    pub fn step_legal(&self, mv: &Move) -> bool {
        match *mv {
            Move::Pass => false,
            Move::Step { from, to } => {
                from.is_on_board()
                    && to.is_on_board()
                    && self.content_at(from) == self.to_move
                    && self.content_at(to) == PieceState::Empty
                    && (1..=2).contains(&from.distance(to))
            }
        }
    }

    /// Apply `mv` for the side to move and hand the turn over.
    ///
    /// The caller is responsible for legality; see [`Board::play`] for the
    /// checked variant.
    pub fn create_move(&mut self, mv: Move) {
        let mover = self.to_move;
        let opponent = mover.opposite().unwrap_or(PieceState::Empty);

        if let Move::Step { from, to } = mv {
            if let (Some(source), Some(target)) = (from.index(), to.index()) {
                if from.distance(to) == 2 {
                    self.cells[source] = PieceState::Empty;
                }
                self.cells[target] = mover;
                for (dc, dr) in NEIGHBOURS {
                    if let Some(index) = to.offset(dc, dr).index() {
                        if self.cells[index] == opponent {
                            self.cells[index] = mover;
                        }
                    }
                }
            }
        }

        self.to_move = opponent;
    }

    /// Apply `mv` after checking it with [`Board::move_legal`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if the move is not legal here.
    pub fn play(&mut self, mv: Move) -> crate::Result<()> {
        if !self.move_legal(&mv) {
            return Err(crate::Error::IllegalMove {
                mv: mv.to_string(),
                color: self.to_move.to_string(),
                reason: "rejected by board rules".to_string(),
            });
        }
        self.create_move(mv);
        Ok(())
    }

    /// Seven lines of cell characters, row 7 first.
    pub fn layout(&self) -> String {
        (0..SIDE)
            .rev()
            .map(|row| {
                (0..SIDE)
                    .map(|col| self.cells[row * SIDE + col].to_char())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIDE).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..SIDE {
                write!(f, " {}", self.cells[row * SIDE + col].to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g")
    }
}
