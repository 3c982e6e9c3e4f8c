//! Error types for the Ataxx crate

use thiserror::Error;

/// Main error type for the Ataxx crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid coordinate '{text}' (expected a column a-g followed by a row 1-7)")]
    InvalidCoordinate { text: String },

    #[error("invalid move '{text}' (expected 'c3-d4' or '-' for pass)")]
    InvalidMoveText { text: String },

    #[error("invalid board layout: {reason}")]
    InvalidBoardLayout { reason: String },

    #[error("illegal move '{mv}' for {color}: {reason}")]
    IllegalMove {
        mv: String,
        color: String,
        reason: String,
    },

    #[error("game exceeded {limit} plies without a winner")]
    PlyLimit { limit: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("unsupported q-table format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
