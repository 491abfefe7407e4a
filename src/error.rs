//! Error types for the tictactoe crate

use thiserror::Error;

/// Main error type for the tictactoe crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action ({row}, {col}): {reason}")]
    InvalidAction { row: i64, col: i64, reason: String },

    #[error("game already over")]
    GameOver,

    #[error("invalid board length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn out_of_range(row: i64, col: i64) -> Self {
        Error::InvalidAction {
            row,
            col,
            reason: "coordinates must be within 0..=2".to_string(),
        }
    }

    pub(crate) fn off_board(row: usize, col: usize) -> Self {
        Self::out_of_range(saturating_i64(row), saturating_i64(col))
    }

    pub(crate) fn occupied(row: usize, col: usize) -> Self {
        Error::InvalidAction {
            row: saturating_i64(row),
            col: saturating_i64(col),
            reason: "cell is already occupied".to_string(),
        }
    }
}

fn saturating_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
