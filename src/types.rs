//////////////////////////
// types.rs
//////////////////////////

use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: usize = 8;

/// Row-major grid, `board[row][col]`. Row 0 is Black's back rank.
pub type Board = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Piece { piece_type, color }
    }
}

impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step.
    pub fn pawn_direction(&self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn pawn_start_row(&self) -> i32 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceType::Pawn => "Pawn",
            PieceType::Rook => "Rook",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// The only kinds a pawn may become. Keeping this separate from `PieceType`
/// means the engine can never be handed a pawn or king promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionChoice {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionChoice {
    pub fn piece_type(&self) -> PieceType {
        match self {
            PromotionChoice::Queen => PieceType::Queen,
            PromotionChoice::Rook => PieceType::Rook,
            PromotionChoice::Bishop => PieceType::Bishop,
            PromotionChoice::Knight => PieceType::Knight,
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved {
        captured: Option<Piece>,
        promoted: Option<PieceType>,
    },
    /// The mover took the opposing king. The game is over.
    KingCaptured { winner: Color },
}

impl MoveOutcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            MoveOutcome::KingCaptured { winner } => Some(*winner),
            MoveOutcome::Moved { .. } => None,
        }
    }
}

/// Two squares as produced by the input adapter. Values are not range checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: (i32, i32),
    pub to: (i32, i32),
}
