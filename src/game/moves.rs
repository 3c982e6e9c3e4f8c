//! Coordinates and moves

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::board::SIDE;

/// A cell address, zero-based: column `a` is 0, row `1` is 0.
///
/// Coordinates may lie outside the grid so that malformed moves can be
/// represented and then rejected by [`crate::game::Board::move_legal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    col: i8,
    row: i8,
}

impl Coord {
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// Build a coordinate from its letter and digit, e.g. `('c', '4')`.
    pub fn from_chars(col: char, row: char) -> Self {
        let clamp = |v: i32| v.clamp(i8::MIN as i32, i8::MAX as i32) as i8;
        Self {
            col: clamp(col as i32 - 'a' as i32),
            row: clamp(row as i32 - '1' as i32),
        }
    }

    pub fn col(self) -> i8 {
        self.col
    }

    pub fn row(self) -> i8 {
        self.row
    }

    pub fn is_on_board(self) -> bool {
        (0..SIDE as i8).contains(&self.col) && (0..SIDE as i8).contains(&self.row)
    }

    /// Flat cell index (`a1` = 0, `g1` = 6, `a2` = 7, ..., `g7` = 48).
    pub fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.row as usize * SIDE + self.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Coord::index`].
    pub fn from_index(index: usize) -> Self {
        Self {
            col: (index % SIDE) as i8,
            row: (index / SIDE) as i8,
        }
    }

    pub fn offset(self, dcol: i8, drow: i8) -> Self {
        Self {
            col: self.col.saturating_add(dcol),
            row: self.row.saturating_add(drow),
        }
    }

    /// Chebyshev distance between two cells.
    pub fn distance(self, other: Coord) -> i8 {
        let dc = (self.col as i16 - other.col as i16).abs();
        let dr = (self.row as i16 - other.row as i16).abs();
        dc.max(dr).min(i8::MAX as i16) as i8
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(
                f,
                "{}{}",
                (b'a' + self.col as u8) as char,
                (b'1' + self.row as u8) as char
            )
        } else {
            write!(f, "({},{})", self.col, self.row)
        }
    }
}

impl FromStr for Coord {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(col), Some(row), None) => {
                let coord = Coord::from_chars(col.to_ascii_lowercase(), row);
                if coord.is_on_board() {
                    Ok(coord)
                } else {
                    Err(crate::Error::InvalidCoordinate {
                        text: s.to_string(),
                    })
                }
            }
            _ => Err(crate::Error::InvalidCoordinate {
                text: s.to_string(),
            }),
        }
    }
}

/// A move: a clone or jump from one cell to another, or a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Pass,
    Step { from: Coord, to: Coord },
}

impl Move {
    pub const fn pass() -> Self {
        Move::Pass
    }

    pub const fn step(from: Coord, to: Coord) -> Self {
        Move::Step { from, to }
    }

    /// Build a step from column/row characters, e.g. `Move::new('a', '1', 'b', '2')`.
    pub fn new(col0: char, row0: char, col1: char, row1: char) -> Self {
        Move::Step {
            from: Coord::from_chars(col0, row0),
            to: Coord::from_chars(col1, row1),
        }
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }

    pub fn from(self) -> Option<Coord> {
        match self {
            Move::Pass => None,
            Move::Step { from, .. } => Some(from),
        }
    }

    pub fn to(self) -> Option<Coord> {
        match self {
            Move::Pass => None,
            Move::Step { to, .. } => Some(to),
        }
    }

    /// True for a distance-2 move, which vacates its source cell.
    pub fn is_jump(self) -> bool {
        match self {
            Move::Pass => false,
            Move::Step { from, to } => from.distance(to) == 2,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Pass => f.write_str("-"),
            Move::Step { from, to } => write!(f, "{from}-{to}"),
        }
    }
}

impl FromStr for Move {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text == "-" {
            return Ok(Move::Pass);
        }
        let invalid = || crate::Error::InvalidMoveText {
            text: s.to_string(),
        };
        let (from, to) = text.split_once('-').ok_or_else(invalid)?;
        let from = from.parse::<Coord>().map_err(|_| invalid())?;
        let to = to.parse::<Coord>().map_err(|_| invalid())?;
        Ok(Move::Step { from, to })
    }
}

// Moves are stored as their text form so they can key maps in both
// MessagePack and JSON.
impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
