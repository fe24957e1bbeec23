//! The interactive turn loop.

use crate::input::parse_coordinate;
use chess_core::Coordinate;
use chess_engine::{EndReason, Game, GameResult};
use std::io::{self, BufRead, Write};

/// Drives a [`Game`] from line-oriented input, writing prompts and the board
/// to `output`.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
    show_board: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, show_board: bool) -> Self {
        Session {
            game: Game::new(),
            input,
            output,
            show_board,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until one side loses or the input runs out.
    ///
    /// Returns the result, or `None` if input ended first.
    pub fn run(&mut self) -> io::Result<Option<GameResult>> {
        self.print_board()?;
        loop {
            if let Some(result) = self.game.result() {
                self.announce(result)?;
                return Ok(Some(result));
            }

            let color = self.game.side_to_move();
            writeln!(self.output, "{}'s turn", color)?;
            if self.game.is_check() {
                writeln!(self.output, "Check! You must move your king.")?;
            }

            let Some(start) = self.prompt("Row and column of the piece to move:")? else {
                return Ok(None);
            };
            let Some(end) = self.prompt("Row and column to move it to:")? else {
                return Ok(None);
            };

            match self.game.play(start, end) {
                Ok(_) => self.print_board()?,
                Err(err) => {
                    tracing::debug!(%start, %end, %err, "move rejected");
                    writeln!(self.output, "{}. Try again.", err)?;
                }
            }
        }
    }

    /// Asks until a valid coordinate is entered. `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<Coordinate>> {
        loop {
            writeln!(self.output, "{}", message)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_coordinate(&line) {
                Ok(coordinate) => return Ok(Some(coordinate)),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    fn print_board(&mut self) -> io::Result<()> {
        if self.show_board {
            write!(self.output, "{}", self.game.board())?;
        }
        Ok(())
    }

    fn announce(&mut self, result: GameResult) -> io::Result<()> {
        let how = match result.reason {
            EndReason::KingCaptured => "captured",
            EndReason::Checkmate => "checkmated",
        };
        writeln!(
            self.output,
            "The {} king has been {}! {} wins.",
            result.loser,
            how,
            result.winner()
        )
    }
}
