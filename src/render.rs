//////////////////////////
// render.rs
//////////////////////////

use colored::Colorize;
use std::fmt;

use crate::game::GameState;
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    #[default]
    Ascii,
    Unicode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub glyphs: GlyphSet,
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            glyphs: GlyphSet::Ascii,
            color: false,
        }
    }
}

/// Letter for a square: `.` when empty, upper case White, lower case Black.
pub fn glyph(square: Option<Piece>) -> char {
    let Some(piece) = square else {
        return '.';
    };
    let letter = match piece.piece_type {
        PieceType::Pawn => 'p',
        PieceType::Rook => 'r',
        PieceType::Knight => 'n',
        PieceType::Bishop => 'b',
        PieceType::Queen => 'q',
        PieceType::King => 'k',
    };
    match piece.color {
        Color::White => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}

pub fn unicode_glyph(square: Option<Piece>) -> char {
    match square.map(|p| (p.piece_type, p.color)) {
        Some((PieceType::Pawn, Color::White)) => '♙',
        Some((PieceType::Pawn, Color::Black)) => '♟',
        Some((PieceType::Knight, Color::White)) => '♘',
        Some((PieceType::Knight, Color::Black)) => '♞',
        Some((PieceType::Bishop, Color::White)) => '♗',
        Some((PieceType::Bishop, Color::Black)) => '♝',
        Some((PieceType::Rook, Color::White)) => '♖',
        Some((PieceType::Rook, Color::Black)) => '♜',
        Some((PieceType::Queen, Color::White)) => '♕',
        Some((PieceType::Queen, Color::Black)) => '♛',
        Some((PieceType::King, Color::White)) => '♔',
        Some((PieceType::King, Color::Black)) => '♚',
        None => '·',
    }
}

/// Rank labels 8..1 down the left, file labels under the board.
pub fn render_board(game: &GameState, options: &RenderOptions) -> String {
    let mut out = String::new();
    for (row, squares) in game.board().iter().enumerate() {
        out.push_str(&format!("{} ", BOARD_SIZE - row));
        for &square in squares {
            let symbol = match options.glyphs {
                GlyphSet::Ascii => glyph(square),
                GlyphSet::Unicode => unicode_glyph(square),
            }
            .to_string();

            if options.color {
                let painted = match square {
                    Some(piece) if piece.color == Color::White => symbol.bright_red(),
                    Some(_) => symbol.bright_blue(),
                    None => symbol.dimmed(),
                };
                out.push_str(&format!("{} ", painted));
            } else {
                out.push_str(&symbol);
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str("  ");
    for file in 0..BOARD_SIZE {
        let label = ((file as u8 + b'a') as char).to_string();
        if options.color {
            out.push_str(&format!("{} ", label.cyan()));
        } else {
            out.push_str(&label);
            out.push(' ');
        }
    }
    out.push('\n');
    out
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_board(self, &RenderOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_is_total() {
        assert_eq!(glyph(None), '.');
        assert_eq!(glyph(Some(Piece::new(PieceType::King, Color::White))), 'K');
        assert_eq!(glyph(Some(Piece::new(PieceType::Knight, Color::Black))), 'n');
        assert_eq!(unicode_glyph(None), '·');
        assert_eq!(
            unicode_glyph(Some(Piece::new(PieceType::Queen, Color::Black))),
            '♛'
        );
    }

    #[test]
    fn plain_render_of_initial_position() {
        let text = GameState::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 r n b q k b n r ");
        assert_eq!(lines[4], "4 . . . . . . . . ");
        assert_eq!(lines[7], "1 R N B Q K B N R ");
        assert_eq!(lines[8], "  a b c d e f g h ");
    }

    #[test]
    fn colored_render_paints_pieces_and_labels() {
        colored::control::set_override(true);
        let options = RenderOptions {
            glyphs: GlyphSet::Unicode,
            color: true,
        };
        let text = render_board(&GameState::new(), &options);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("8 "));
        assert!(lines[0].contains("\u{1b}["));
        assert!(lines[0].contains('♚'));
        assert!(lines[7].contains('♔'));
        assert!(lines[8].contains("\u{1b}["));
        assert!(lines[8].contains('h'));
        assert_ne!(text, render_board(&GameState::new(), &RenderOptions::default()));
    }
}
