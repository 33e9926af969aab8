//////////////////////////
// game.rs
//////////////////////////

use tracing::{debug, info};

use crate::error::{MoveError, PositionError};
use crate::types::*;

const BACK_RANK: [PieceType; BOARD_SIZE] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Supplies the replacement kind when a pawn reaches an edge rank.
///
/// The adapter owns any re-prompting; the engine only ever sees one of the
/// four `PromotionChoice` values.
pub trait PromotionSource {
    fn choose_promotion(&mut self, color: Color) -> PromotionChoice;
}

impl<F> PromotionSource for F
where
    F: FnMut(Color) -> PromotionChoice,
{
    fn choose_promotion(&mut self, color: Color) -> PromotionChoice {
        self(color)
    }
}

/// Always promotes to the same kind.
impl PromotionSource for PromotionChoice {
    fn choose_promotion(&mut self, _color: Color) -> PromotionChoice {
        *self
    }
}

/// Board plus side to move. Mutated only through `try_move` / `attempt_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_turn: Color,
    winner: Option<Color>,
    move_count: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        let mut new_state = GameState {
            board: [[None; BOARD_SIZE]; BOARD_SIZE],
            current_turn: Color::White,
            winner: None,
            move_count: 0,
        };
        new_state.setup_initial_position();
        new_state
    }

    /// Builds a game from an arbitrary board. Each side needs exactly one king.
    pub fn from_board(board: Board, side_to_move: Color) -> Result<Self, PositionError> {
        validate_board(&board)?;
        Ok(GameState {
            board,
            current_turn: side_to_move,
            winner: None,
            move_count: 0,
        })
    }

    fn setup_initial_position(&mut self) {
        self.board = [[None; BOARD_SIZE]; BOARD_SIZE];

        // Black on top (rows 0,1), White on the bottom (rows 6,7)
        for (col, &piece_type) in BACK_RANK.iter().enumerate() {
            self.board[0][col] = Some(Piece::new(piece_type, Color::Black));
            self.board[1][col] = Some(Piece::new(PieceType::Pawn, Color::Black));
            self.board[6][col] = Some(Piece::new(PieceType::Pawn, Color::White));
            self.board[7][col] = Some(Piece::new(piece_type, Color::White));
        }
        self.current_turn = Color::White;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.current_turn
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Number of accepted, non-terminal moves.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_within_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    /// `None` for an empty square or a square off the board.
    pub fn piece_at(&self, row: i32, col: i32) -> Option<Piece> {
        if Self::is_within_bounds(row, col) {
            self.board[row as usize][col as usize]
        } else {
            None
        }
    }

    /// First square (row-major) holding `color`'s king.
    pub fn king_square(&self, color: Color) -> Option<(i32, i32)> {
        squares().find(|&(row, col)| {
            self.piece_at(row, col) == Some(Piece::new(PieceType::King, color))
        })
    }

    /// Coarse form of `try_move`: `true` iff the move was accepted.
    pub fn attempt_move<P>(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
        promotions: &mut P,
    ) -> bool
    where
        P: PromotionSource + ?Sized,
    {
        self.try_move(from_row, from_col, to_row, to_col, promotions)
            .is_ok()
    }

    /// Validates and applies a move for the side to move.
    ///
    /// Checks run in a fixed order (bounds, source ownership, friendly capture,
    /// piece movement) and the first failure is returned with the game left
    /// untouched. Capturing a king ends the game: the winner is recorded, the
    /// board is left as it was, and every later call returns `GameOver`.
    pub fn try_move<P>(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
        promotions: &mut P,
    ) -> Result<MoveOutcome, MoveError>
    where
        P: PromotionSource + ?Sized,
    {
        let (from, to) = ((from_row, from_col), (to_row, to_col));
        let result = self.apply_move(from, to, promotions);
        match &result {
            Ok(outcome) => debug!(?from, ?to, ?outcome, "move accepted"),
            Err(err) => debug!(?from, ?to, %err, "move rejected"),
        }
        result
    }

    fn apply_move<P>(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        promotions: &mut P,
    ) -> Result<MoveOutcome, MoveError>
    where
        P: PromotionSource + ?Sized,
    {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        if !Self::is_within_bounds(from.0, from.1) || !Self::is_within_bounds(to.0, to.1) {
            return Err(MoveError::OutOfBounds);
        }

        let moving = self
            .piece_at(from.0, from.1)
            .ok_or(MoveError::NoPieceAtSource)?;
        if moving.color != self.current_turn {
            return Err(MoveError::WrongColor);
        }

        let target = self.piece_at(to.0, to.1);
        if let Some(dest_piece) = target {
            if dest_piece.color == moving.color {
                return Err(MoveError::FriendlyCapture);
            }
        }

        if !self.is_legal_for(moving, from.0, from.1, to.0, to.1) {
            return Err(MoveError::IllegalForPiece(moving.piece_type));
        }

        if let Some(Piece { piece_type: PieceType::King, .. }) = target {
            info!(winner = %moving.color, "king captured");
            self.winner = Some(moving.color);
            return Ok(MoveOutcome::KingCaptured { winner: moving.color });
        }

        let mut placed = moving;
        let mut promoted = None;
        if moving.piece_type == PieceType::Pawn && (to.0 == 0 || to.0 == BOARD_SIZE as i32 - 1) {
            let choice = promotions.choose_promotion(moving.color);
            placed.piece_type = choice.piece_type();
            promoted = Some(placed.piece_type);
            info!(color = %moving.color, to = %placed.piece_type, "pawn promoted");
        }

        self.board[to.0 as usize][to.1 as usize] = Some(placed);
        self.board[from.0 as usize][from.1 as usize] = None;
        self.current_turn = self.current_turn.opposite();
        self.move_count += 1;

        Ok(MoveOutcome::Moved {
            captured: target,
            promoted,
        })
    }

    /// Whether `piece` could move from one square to another on the current
    /// board, ignoring whose turn it is and what stands on the destination
    /// (except where pawns care about occupancy).
    pub fn is_legal_for(
        &self,
        piece: Piece,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> bool {
        if !Self::is_within_bounds(from_row, from_col) || !Self::is_within_bounds(to_row, to_col) {
            return false;
        }
        let dr = to_row - from_row;
        let dc = to_col - from_col;
        if dr == 0 && dc == 0 {
            return false;
        }

        match piece.piece_type {
            PieceType::Pawn => self.is_valid_pawn_move(piece.color, from_row, from_col, to_row, to_col),
            PieceType::Knight => is_knight_step(dr, dc),
            PieceType::Bishop => {
                is_diagonal(dr, dc) && self.is_path_clear(from_row, from_col, to_row, to_col)
            }
            PieceType::Rook => {
                is_straight(dr, dc) && self.is_path_clear(from_row, from_col, to_row, to_col)
            }
            PieceType::Queen => {
                (is_straight(dr, dc) || is_diagonal(dr, dc))
                    && self.is_path_clear(from_row, from_col, to_row, to_col)
            }
            // No check-safety filtering: a king may step into an attacked square.
            PieceType::King => dr.abs() <= 1 && dc.abs() <= 1,
        }
    }

    fn is_valid_pawn_move(
        &self,
        color: Color,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> bool {
        let direction = color.pawn_direction();
        let dr = to_row - from_row;
        let dc = to_col - from_col;
        let dest_occupied = self.piece_at(to_row, to_col).is_some();

        // Single step
        if dc == 0 && dr == direction {
            return !dest_occupied;
        }
        // Double step from the starting row
        if dc == 0 && dr == 2 * direction && from_row == color.pawn_start_row() {
            return !dest_occupied && self.is_path_clear(from_row, from_col, to_row, to_col);
        }
        // Diagonal capture only
        if dc.abs() == 1 && dr == direction {
            return match self.piece_at(to_row, to_col) {
                Some(captured) => captured.color != color,
                None => false,
            };
        }
        false
    }

    /// True iff every square strictly between the endpoints is empty.
    ///
    /// The endpoints must share a row, a column or a diagonal; any other pair
    /// (or a pair off the board) yields `false`.
    pub fn is_path_clear(&self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        if !Self::is_within_bounds(from_row, from_col) || !Self::is_within_bounds(to_row, to_col) {
            return false;
        }
        let dr = to_row - from_row;
        let dc = to_col - from_col;
        if !(is_straight(dr, dc) || is_diagonal(dr, dc) || (dr == 0 && dc == 0)) {
            return false;
        }

        let (step_r, step_c) = (dr.signum(), dc.signum());
        let (mut row, mut col) = (from_row + step_r, from_col + step_c);

        // Check all squares except the destination
        while (row, col) != (to_row, to_col) {
            if self.board[row as usize][col as usize].is_some() {
                return false;
            }
            row += step_r;
            col += step_c;
        }
        true
    }

    /// Could any opposing piece move onto `color`'s king right now?
    ///
    /// Independent of whose turn it is. The session asks this for the side
    /// about to move, straight after the other side's move.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some((king_row, king_col)) = self.king_square(color) else {
            return false;
        };

        squares().any(|(row, col)| match self.piece_at(row, col) {
            Some(piece) if piece.color != color => {
                self.is_legal_for(piece, row, col, king_row, king_col)
            }
            _ => false,
        })
    }
}

/// Rejects boards without exactly one king per side.
pub fn validate_board(board: &Board) -> Result<(), PositionError> {
    let mut white_kings = 0;
    let mut black_kings = 0;

    for piece in board.iter().flatten().flatten() {
        if piece.piece_type == PieceType::King {
            match piece.color {
                Color::White => white_kings += 1,
                Color::Black => black_kings += 1,
            }
        }
    }
    if white_kings != 1 {
        return Err(PositionError::KingCount {
            color: Color::White,
            count: white_kings,
        });
    }
    if black_kings != 1 {
        return Err(PositionError::KingCount {
            color: Color::Black,
            count: black_kings,
        });
    }
    Ok(())
}

fn squares() -> impl Iterator<Item = (i32, i32)> {
    (0..BOARD_SIZE as i32).flat_map(|row| (0..BOARD_SIZE as i32).map(move |col| (row, col)))
}

fn is_straight(dr: i32, dc: i32) -> bool {
    (dr == 0) != (dc == 0)
}

fn is_diagonal(dr: i32, dc: i32) -> bool {
    dr != 0 && dr.abs() == dc.abs()
}

fn is_knight_step(dr: i32, dc: i32) -> bool {
    let (ar, ac) = (dr.abs(), dc.abs());
    (ar == 1 && ac == 2) || (ar == 2 && ac == 1)
}
