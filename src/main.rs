//////////////////////////
// main.rs
//////////////////////////
//
// Two players, one terminal.

use std::io;
use std::process;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use terminal_chess::position;
use terminal_chess::session::play_session;
use terminal_chess::{GameState, SessionConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = SessionConfig::load().context("reading session configuration")?;
    let game = match &config.start_position {
        Some(path) => position::load_from_path(path)
            .with_context(|| format!("loading start position from {}", path.display()))?,
        None => GameState::new(),
    };
    info!(?config, "session starting");

    // The loop spends its time blocked in read_line, so leave from here.
    ctrlc::set_handler(|| {
        println!("\n[Ctrl+C] Shutting down...");
        process::exit(130);
    })
    .context("setting Ctrl-C handler")?;

    let stdin = io::stdin();
    play_session(game, &config.render_options(), stdin.lock(), io::stdout())
        .context("terminal session failed")?;
    Ok(())
}
