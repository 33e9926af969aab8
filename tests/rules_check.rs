//! Check detection tests
//!
//! `is_in_check` asks whether any opposing piece could move onto the king.

use terminal_chess::position::load_from_rows;
use terminal_chess::{Color, GameState, MoveOutcome, PromotionChoice};

fn position(rows: [&str; 8], side: Color) -> GameState {
    load_from_rows(&rows, side).unwrap()
}

#[test]
fn nobody_in_check_at_start() {
    let game = GameState::new();
    assert!(!game.is_in_check(Color::White));
    assert!(!game.is_in_check(Color::Black));
}

/// Rook on the king's row with nothing between, then the same board without it
#[test]
fn rook_on_open_row_gives_check() {
    let with_rook = position(
        [
            "....k...", "........", "........", "........", "........", "........", "........",
            "r...K...",
        ],
        Color::White,
    );
    assert!(with_rook.is_in_check(Color::White));
    assert!(!with_rook.is_in_check(Color::Black));

    let without_rook = position(
        [
            "....k...", "........", "........", "........", "........", "........", "........",
            "....K...",
        ],
        Color::White,
    );
    assert!(!without_rook.is_in_check(Color::White));
}

#[test]
fn blocked_rook_gives_no_check() {
    let game = position(
        [
            "....k...", "........", "........", "........", "........", "........", "........",
            "r.N.K...",
        ],
        Color::White,
    );
    assert!(!game.is_in_check(Color::White));
}

/// Pawns check diagonally forward only
#[test]
fn pawn_checks_diagonally() {
    let diagonal = position(
        [
            "....k...", "........", "........", "...p....", "....K...", "........", "........",
            "........",
        ],
        Color::White,
    );
    assert!(diagonal.is_in_check(Color::White));

    let in_front = position(
        [
            "....k...", "........", "........", "....p...", "....K...", "........", "........",
            "........",
        ],
        Color::White,
    );
    assert!(!in_front.is_in_check(Color::White));

    // Behind the king, from Black's point of view, is not an attack
    let behind = position(
        [
            "....k...", "........", "........", "........", "....K...", "...p....", "........",
            "........",
        ],
        Color::White,
    );
    assert!(!behind.is_in_check(Color::White));
}

#[test]
fn knight_and_bishop_checks() {
    let knight = position(
        [
            "....k...", "..N.....", "........", "........", "........", "........", "........",
            "....K...",
        ],
        Color::Black,
    );
    assert!(knight.is_in_check(Color::Black));

    let bishop = position(
        [
            "....k...", "........", "........", ".B......", "........", "........", "........",
            "....K...",
        ],
        Color::Black,
    );
    assert!(bishop.is_in_check(Color::Black));

    let screened = position(
        [
            "....k...", "...p....", "........", ".B......", "........", "........", "........",
            "....K...",
        ],
        Color::Black,
    );
    assert!(!screened.is_in_check(Color::Black));
}

#[test]
fn adjacent_kings_check_each_other() {
    let game = position(
        [
            "........", "........", "........", "...k....", "...K....", "........", "........",
            "........",
        ],
        Color::White,
    );
    assert!(game.is_in_check(Color::White));
    assert!(game.is_in_check(Color::Black));
}

/// The answer does not depend on whose turn it is
#[test]
fn check_ignores_side_to_move() {
    let rows = [
        "....k...", "........", "........", "........", "....R...", "........", "........",
        "K.......",
    ];
    assert!(position(rows, Color::White).is_in_check(Color::Black));
    assert!(position(rows, Color::Black).is_in_check(Color::Black));
}

/// A move that gives check is reported for the side now to move
#[test]
fn move_into_giving_check() {
    let mut game = position(
        [
            "....k...", "........", "........", "........", "........", "........", "........",
            "R...K...",
        ],
        Color::White,
    );
    assert!(!game.is_in_check(Color::Black));
    let outcome = game.try_move(7, 0, 0, 0, &mut PromotionChoice::Queen).unwrap();
    assert!(matches!(outcome, MoveOutcome::Moved { captured: None, .. }));
    assert_eq!(game.side_to_move(), Color::Black);
    assert!(game.is_in_check(Color::Black));
}

/// Moving a pinned piece is allowed and the mover's own check is not filtered
#[test]
fn self_exposure_is_allowed() {
    let mut game = position(
        [
            "....k...", "........", "........", "........", "....r...", "........", "....B...",
            "....K...",
        ],
        Color::White,
    );
    assert!(!game.is_in_check(Color::White));
    assert!(game.attempt_move(6, 4, 5, 3, &mut PromotionChoice::Queen));
    assert!(game.is_in_check(Color::White));
    assert!(!game.is_in_check(Color::Black));
}
