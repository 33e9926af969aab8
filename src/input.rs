//////////////////////////
// input.rs
//////////////////////////

use std::io::{BufRead, Write};
use tracing::warn;

use crate::error::InputError;
use crate::game::PromotionSource;
use crate::types::*;

/// `"e2"` -> `(6, 4)`. Letters past `h` or digits outside 1..8 still convert,
/// so the engine's bounds check is what rejects them.
pub fn parse_square(token: &str) -> Result<(i32, i32), InputError> {
    let mut chars = token.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(InputError::InvalidSquare(token.to_string()));
    };
    if !file.is_ascii_lowercase() || !rank.is_ascii_digit() {
        return Err(InputError::InvalidSquare(token.to_string()));
    }

    let col = file as i32 - 'a' as i32;
    let row = BOARD_SIZE as i32 - (rank as i32 - '0' as i32);
    Ok((row, col))
}

/// Two whitespace-separated squares, e.g. `"e2 e4"`.
pub fn parse_move_line(line: &str) -> Result<MoveRequest, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [from, to] = tokens.as_slice() else {
        return Err(InputError::TokenCount);
    };
    Ok(MoveRequest {
        from: parse_square(from)?,
        to: parse_square(to)?,
    })
}

pub fn parse_promotion(c: char) -> Option<PromotionChoice> {
    match c.to_ascii_lowercase() {
        'q' => Some(PromotionChoice::Queen),
        'r' => Some(PromotionChoice::Rook),
        'b' => Some(PromotionChoice::Bishop),
        'n' => Some(PromotionChoice::Knight),
        _ => None,
    }
}

/// Asks on `output` and reads from `input` until a valid letter arrives.
pub struct PromptPromotion<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptPromotion<R, W> {
    pub fn new(input: R, output: W) -> Self {
        PromptPromotion { input, output }
    }

    fn read_choice(&mut self) -> std::io::Result<Option<PromotionChoice>> {
        write!(self.output, "Pawn promotion! Choose a piece (q/r/b/n): ")?;
        self.output.flush()?;
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let mut chars = line.trim().chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if let Some(choice) = parse_promotion(c) {
                    return Ok(Some(choice));
                }
            }
            write!(self.output, "Invalid choice. Please choose a piece (q/r/b/n): ")?;
            self.output.flush()?;
        }
    }
}

impl<R: BufRead, W: Write> PromotionSource for PromptPromotion<R, W> {
    fn choose_promotion(&mut self, color: Color) -> PromotionChoice {
        match self.read_choice() {
            Ok(Some(choice)) => choice,
            Ok(None) => {
                warn!(%color, "input closed during promotion, promoting to queen");
                PromotionChoice::Queen
            }
            Err(err) => {
                warn!(%color, %err, "promotion prompt failed, promoting to queen");
                PromotionChoice::Queen
            }
        }
    }
}
