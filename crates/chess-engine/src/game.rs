//! Turn-by-turn game management.
//!
//! [`Game`] layers the rules a front end enforces between moves on top of
//! the board-level engine:
//! - players alternate, White first
//! - a player may only move their own pieces
//! - a player in check must move their king
//! - no moves are accepted once the game has ended

use crate::{apply_move, is_legal_move, Board, MoveOutcome};
use chess_core::{Color, Coordinate, OutOfRangeError, PieceKind};
use thiserror::Error;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    KingCaptured,
    Checkmate,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub loser: Color,
    pub reason: EndReason,
}

impl GameResult {
    #[inline]
    pub const fn winner(&self) -> Color {
        self.loser.opposite()
    }

    fn from_outcome(outcome: MoveOutcome) -> Option<Self> {
        match outcome {
            MoveOutcome::Continue => None,
            MoveOutcome::KingCaptured { loser } => Some(GameResult {
                loser,
                reason: EndReason::KingCaptured,
            }),
            MoveOutcome::Checkmate { loser } => Some(GameResult {
                loser,
                reason: EndReason::Checkmate,
            }),
        }
    }
}

/// A recorded move in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMove {
    pub color: Color,
    pub piece: PieceKind,
    pub start: Coordinate,
    pub end: Coordinate,
    /// Kind of the piece that stood on `end`, if any.
    pub captured: Option<PieceKind>,
}

/// Error type for game operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GameError {
    /// The game has already ended.
    #[error("the game has already ended")]
    GameOver,

    /// The start square is off the board.
    #[error("{0}")]
    OutOfRange(#[from] OutOfRangeError),

    /// The start square does not hold a piece of the side to move.
    #[error("{color} has no piece on {at}")]
    NotYourPiece { color: Color, at: Coordinate },

    /// The piece cannot make the move in the current position.
    #[error("illegal move from {start} to {end}")]
    IllegalMove { start: Coordinate, end: Coordinate },

    /// The side to move is in check and tried to move something other than its king.
    #[error("{0} is in check and must move the king")]
    MustMoveKing(Color),
}

/// A complete game between two players sharing one board.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    moves: Vec<GameMove>,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    /// Creates a game from a prepared board with `side_to_move` to play.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
            moves: Vec::new(),
            result: None,
        }
    }

    /// Starts over from the standard starting position.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.board.player(self.side_to_move).is_in_check()
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Plays the side to move's piece from `start` to `end`.
    ///
    /// On success the move is recorded and the turn passes to the other side,
    /// unless the move ended the game.
    ///
    /// # Errors
    ///
    /// Rejected moves leave the game unchanged and return:
    /// - [`GameError::GameOver`] once a result has been reached
    /// - [`GameError::OutOfRange`] if `start` is off the board
    /// - [`GameError::NotYourPiece`] if `start` is not the mover's piece
    /// - [`GameError::IllegalMove`] if the piece cannot make the move
    /// - [`GameError::MustMoveKing`] if the mover is in check and `start` is not the king
    pub fn play(&mut self, start: Coordinate, end: Coordinate) -> Result<MoveOutcome, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }

        let color = self.side_to_move;
        let piece = self.board.piece_at(start)?;
        if piece.color() != Some(color) {
            return Err(GameError::NotYourPiece { color, at: start });
        }
        if !is_legal_move(&piece, &self.board, start, end)? {
            return Err(GameError::IllegalMove { start, end });
        }
        if self.is_check() && piece.kind() != PieceKind::King {
            return Err(GameError::MustMoveKing(color));
        }

        let target = self.board.piece_at(end)?;
        let outcome = apply_move(&mut self.board, start, end)?;
        self.moves.push(GameMove {
            color,
            piece: piece.kind(),
            start,
            end,
            captured: (!target.is_empty()).then_some(target.kind()),
        });

        self.result = GameResult::from_outcome(outcome);
        match self.result {
            Some(result) => tracing::info!(loser = %result.loser, reason = ?result.reason, "game over"),
            None => self.side_to_move = color.opposite(),
        }
        Ok(outcome)
    }
}
