//! Promotion tests
//!
//! A pawn reaching either edge row is replaced by the kind the promotion
//! source picks. The source is only consulted for such moves.

use std::cell::Cell;

use terminal_chess::position::load_from_rows;
use terminal_chess::{Color, GameState, MoveError, MoveOutcome, Piece, PieceType, PromotionChoice};

fn position(rows: [&str; 8], side: Color) -> GameState {
    load_from_rows(&rows, side).unwrap()
}

const WHITE_ABOUT_TO_PROMOTE: [&str; 8] = [
    ".n..k...", "P.......", "........", "........", "........", "........", "........",
    "....K...",
];

#[test]
fn straight_promotion_uses_choice() {
    for choice in [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Bishop,
        PromotionChoice::Knight,
    ] {
        let mut game = position(WHITE_ABOUT_TO_PROMOTE, Color::White);
        let outcome = game.try_move(1, 0, 0, 0, &mut { choice }).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                captured: None,
                promoted: Some(choice.piece_type())
            }
        );
        assert_eq!(
            game.piece_at(0, 0),
            Some(Piece::new(choice.piece_type(), Color::White))
        );
        assert_eq!(game.piece_at(1, 0), None);
        assert_eq!(game.side_to_move(), Color::Black);
    }
}

#[test]
fn capturing_promotion() {
    let mut game = position(WHITE_ABOUT_TO_PROMOTE, Color::White);
    let outcome = game
        .try_move(1, 0, 0, 1, &mut PromotionChoice::Rook)
        .unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            captured: Some(Piece::new(PieceType::Knight, Color::Black)),
            promoted: Some(PieceType::Rook)
        }
    );
    assert_eq!(
        game.piece_at(0, 1),
        Some(Piece::new(PieceType::Rook, Color::White))
    );
}

#[test]
fn black_promotes_on_row_7() {
    let mut game = position(
        [
            "....k...", "........", "........", "........", "........", "........", ".......p",
            "K.......",
        ],
        Color::Black,
    );
    let outcome = game
        .try_move(6, 7, 7, 7, &mut PromotionChoice::Knight)
        .unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            captured: None,
            promoted: Some(PieceType::Knight)
        }
    );
    assert_eq!(
        game.piece_at(7, 7),
        Some(Piece::new(PieceType::Knight, Color::Black))
    );
}

/// Blocked or ordinary pawn moves never ask for a promotion
#[test]
fn source_only_consulted_on_promotion() {
    let asked = Cell::new(0);
    let mut source = |_: Color| {
        asked.set(asked.get() + 1);
        PromotionChoice::Queen
    };

    let mut game = position(
        [
            "r...k...", "P.......", "........", "........", "........", "........", ".P......",
            "....K...",
        ],
        Color::White,
    );
    assert_eq!(
        game.try_move(1, 0, 0, 0, &mut source),
        Err(MoveError::IllegalForPiece(PieceType::Pawn))
    );
    assert!(game.try_move(6, 1, 4, 1, &mut source).is_ok());
    assert_eq!(asked.get(), 0);

    assert!(game.try_move(0, 0, 0, 1, &mut source).is_ok());
    assert!(game.try_move(1, 0, 0, 0, &mut source).is_ok());
    assert_eq!(asked.get(), 1);
}

/// A promoted piece moves as its new kind
#[test]
fn promoted_piece_moves_as_new_kind() {
    let mut game = position(WHITE_ABOUT_TO_PROMOTE, Color::White);
    game.try_move(1, 0, 0, 0, &mut PromotionChoice::Queen).unwrap();
    game.try_move(0, 1, 2, 2, &mut PromotionChoice::Queen).unwrap();
    assert!(game.try_move(0, 0, 7, 0, &mut PromotionChoice::Queen).is_ok());
}
