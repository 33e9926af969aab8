//////////////////////////
// position.rs
//////////////////////////
//
// Custom starting positions as JSON:
//
//   { "side_to_move": "Black",
//     "rows": ["....k...", "........", ..., "....K..."] }
//
// rows[0] is rank 8. Upper case is White, lower case is Black, '.' is empty.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::PositionError;
use crate::game::GameState;
use crate::render::glyph;
use crate::types::*;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PositionDocument {
    pub side_to_move: Color,
    pub rows: Vec<String>,
}

pub fn piece_from_glyph(c: char) -> Option<Piece> {
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let piece_type = match c.to_ascii_lowercase() {
        'p' => PieceType::Pawn,
        'r' => PieceType::Rook,
        'n' => PieceType::Knight,
        'b' => PieceType::Bishop,
        'q' => PieceType::Queen,
        'k' => PieceType::King,
        _ => return None,
    };
    Some(Piece::new(piece_type, color))
}

/// Parses eight rows of glyphs into a board. King counts are not checked here.
pub fn board_from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Board, PositionError> {
    if rows.len() != BOARD_SIZE {
        return Err(PositionError::RowCount(rows.len()));
    }

    let mut board: Board = [[None; BOARD_SIZE]; BOARD_SIZE];
    for (row, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        let len = line.chars().count();
        if len != BOARD_SIZE {
            return Err(PositionError::RowLength { row, len });
        }
        for (col, c) in line.chars().enumerate() {
            board[row][col] = match c {
                '.' => None,
                _ => Some(piece_from_glyph(c).ok_or(PositionError::UnknownGlyph { row, glyph: c })?),
            };
        }
    }
    Ok(board)
}

pub fn load_from_rows<S: AsRef<str>>(
    rows: &[S],
    side_to_move: Color,
) -> Result<GameState, PositionError> {
    GameState::from_board(board_from_rows(rows)?, side_to_move)
}

pub fn load_from_str(json: &str) -> Result<GameState, PositionError> {
    let doc: PositionDocument = serde_json::from_str(json)?;
    load_from_rows(&doc.rows, doc.side_to_move)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<GameState, PositionError> {
    let json = fs::read_to_string(path)?;
    load_from_str(&json)
}

pub fn to_document(game: &GameState) -> PositionDocument {
    let rows = game
        .board()
        .iter()
        .map(|row| row.iter().map(|&sq| glyph(sq)).collect::<String>())
        .collect();
    PositionDocument {
        side_to_move: game.side_to_move(),
        rows,
    }
}

pub fn to_json(game: &GameState) -> Result<String, PositionError> {
    Ok(serde_json::to_string_pretty(&to_document(game))?)
}
