//////////////////////////
// error.rs
//////////////////////////

use thiserror::Error;

use crate::types::{Color, PieceType};

/// Why `GameState::try_move` refused a move. The board is untouched in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Move is out of bounds")]
    OutOfBounds,

    #[error("No piece at starting square")]
    NoPieceAtSource,

    #[error("That's not your piece")]
    WrongColor,

    #[error("Cannot capture your own piece")]
    FriendlyCapture,

    #[error("Illegal move for {0}")]
    IllegalForPiece(PieceType),

    #[error("The game is already over")]
    GameOver,
}

#[derive(Error, Debug)]
pub enum PositionError {
    #[error("{color} must have exactly one king, found {count}")]
    KingCount { color: Color, count: usize },

    #[error("Expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("Row {row} has {len} squares, expected 8")]
    RowLength { row: usize, len: usize },

    #[error("Unknown glyph '{glyph}' in row {row}")]
    UnknownGlyph { row: usize, glyph: char },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Expected two squares, e.g. 'e2 e4'")]
    TokenCount,

    #[error("Invalid square '{0}'")]
    InvalidSquare(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Terminal IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Position(#[from] PositionError),
}
