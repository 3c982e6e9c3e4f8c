//! Cell contents

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The content of one board cell.
///
/// The declaration order fixes the ordinals used in state fingerprints:
/// `Empty = 0`, `Red = 1`, `Blue = 2`, `Blocked = 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceState {
    Empty,
    Red,
    Blue,
    Blocked,
}

impl PieceState {
    /// The other side for a playing colour. Empty and blocked cells have none.
    pub fn opposite(self) -> Option<PieceState> {
        match self {
            PieceState::Red => Some(PieceState::Blue),
            PieceState::Blue => Some(PieceState::Red),
            PieceState::Empty | PieceState::Blocked => None,
        }
    }

    /// Whether this is one of the two playing colours.
    pub fn is_color(self) -> bool {
        matches!(self, PieceState::Red | PieceState::Blue)
    }

    pub fn ordinal(self) -> u8 {
        match self {
            PieceState::Empty => 0,
            PieceState::Red => 1,
            PieceState::Blue => 2,
            PieceState::Blocked => 3,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PieceState::Empty => '-',
            PieceState::Red => 'r',
            PieceState::Blue => 'b',
            PieceState::Blocked => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<PieceState> {
        match c {
            '-' | '.' => Some(PieceState::Empty),
            'r' | 'R' => Some(PieceState::Red),
            'b' | 'B' => Some(PieceState::Blue),
            'X' | 'x' => Some(PieceState::Blocked),
            _ => None,
        }
    }
}

impl fmt::Display for PieceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceState::Empty => "empty",
            PieceState::Red => "red",
            PieceState::Blue => "blue",
            PieceState::Blocked => "blocked",
        };
        f.write_str(name)
    }
}

impl FromStr for PieceState {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(PieceState::Red),
            "blue" | "b" => Ok(PieceState::Blue),
            "empty" => Ok(PieceState::Empty),
            "blocked" => Ok(PieceState::Blocked),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!("unknown piece '{other}' (expected 'red' or 'blue')"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_only_for_colors() {
        assert_eq!(PieceState::Red.opposite(), Some(PieceState::Blue));
        assert_eq!(PieceState::Blue.opposite(), Some(PieceState::Red));
        assert_eq!(PieceState::Empty.opposite(), None);
        assert_eq!(PieceState::Blocked.opposite(), None);
    }

    #[test]
    fn test_ordinals_follow_declaration_order() {
        let ordinals: Vec<u8> = [
            PieceState::Empty,
            PieceState::Red,
            PieceState::Blue,
            PieceState::Blocked,
        ]
        .iter()
        .map(|p| p.ordinal())
        .collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_char_roundtrip() {
        for piece in [
            PieceState::Empty,
            PieceState::Red,
            PieceState::Blue,
            PieceState::Blocked,
        ] {
            assert_eq!(PieceState::from_char(piece.to_char()), Some(piece));
        }
        assert_eq!(PieceState::from_char('?'), None);
    }

    #[test]
    fn test_parse_color_names() {
        assert_eq!("Red".parse::<PieceState>().unwrap(), PieceState::Red);
        assert_eq!(" b ".parse::<PieceState>().unwrap(), PieceState::Blue);
        assert!("green".parse::<PieceState>().is_err());
    }
}
