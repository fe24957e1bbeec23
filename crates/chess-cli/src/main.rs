//! Two players, one terminal.
//!
//! Prints the board, asks each side in turn for the square of the piece to
//! move and its destination, and stops when a king is captured or mated.

mod config;
mod input;
mod session;

use clap::Parser;
use config::Config;
use session::Session;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Play chess against a friend in the terminal")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "chess.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Do not print the board after each move
    #[arg(long)]
    no_board: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = Config::load(&args.config)?;
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    if args.no_board {
        config.show_board = false;
    }

    tracing_subscriber::fmt()
        .with_max_level(config.level()?)
        .with_writer(io::stderr)
        .init();
    tracing::debug!(?config, "starting");

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config.show_board);
    let result = session.run()?;
    tracing::info!(
        moves = session.game().move_history().len(),
        finished = result.is_some(),
        "session ended"
    );
    Ok(())
}
