//////////////////////////
// session.rs
//////////////////////////
//
// The two-player loop: read a line, move, redraw. Enter moves as two
// squares, e.g. `e2 e4`. `dump` prints the position as JSON, `quit` leaves.

use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::error::SessionError;
use crate::game::GameState;
use crate::input::{parse_move_line, PromptPromotion};
use crate::position;
use crate::render::{render_board, RenderOptions};
use crate::types::*;

/// Runs until `quit`, end of input, or a king capture, and returns the final
/// state. After each accepted move only the side now to move is checked for
/// check.
pub fn play_session<R: BufRead, W: Write>(
    mut game: GameState,
    options: &RenderOptions,
    mut input: R,
    mut output: W,
) -> Result<GameState, SessionError> {
    write!(output, "{}", render_board(&game, options))?;

    loop {
        write!(output, "{} to move> ", game.side_to_move())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let cmd = line.trim();
        match cmd {
            "" => continue,
            "quit" | "exit" => break,
            "dump" => {
                writeln!(output, "{}", position::to_json(&game)?)?;
                continue;
            }
            _ => {}
        }

        let MoveRequest { from, to } = match parse_move_line(cmd) {
            Ok(request) => request,
            Err(err) => {
                debug!(%err, input = cmd, "unparseable move");
                writeln!(output, "Invalid move. Please try again.")?;
                continue;
            }
        };

        let opponent = game.side_to_move().opposite();
        let mut promoter = PromptPromotion::new(&mut input, &mut output);
        let result = game.try_move(from.0, from.1, to.0, to.1, &mut promoter);

        match result {
            Ok(MoveOutcome::KingCaptured { winner }) => {
                writeln!(output, "{} wins!", winner)?;
                break;
            }
            Ok(MoveOutcome::Moved { .. }) => {
                write!(output, "{}", render_board(&game, options))?;
                if game.is_in_check(opponent) {
                    writeln!(output, "{} is in check!", opponent)?;
                }
            }
            Err(_) => writeln!(output, "Invalid move. Please try again.")?,
        }
    }

    info!(moves = game.move_count(), winner = ?game.winner(), "session finished");
    Ok(game)
}
