//! Applying moves to the board.

use crate::check::{is_checkmated, update_in_check};
use crate::Board;
use chess_core::{Color, Coordinate, OutOfRangeError, PieceKind};

/// What a move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Play goes on.
    Continue,
    /// The move landed on a king; `loser` owned it.
    KingCaptured { loser: Color },
    /// The move left `loser` in check with no escape square.
    Checkmate { loser: Color },
}

impl MoveOutcome {
    /// Returns true if the move ends the game.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, MoveOutcome::Continue)
    }

    /// The color that lost, if the game is over.
    #[inline]
    pub const fn loser(self) -> Option<Color> {
        match self {
            MoveOutcome::Continue => None,
            MoveOutcome::KingCaptured { loser } | MoveOutcome::Checkmate { loser } => Some(loser),
        }
    }
}

/// Moves the piece on `start` to `end` and updates both players.
///
/// The move is not validated; call [`is_legal_move`](crate::is_legal_move)
/// first. The destination square is marked as moved before anything else.
/// If it holds a king, the game ends there and the board is otherwise left
/// untouched. Otherwise the piece is copied over, `start` is emptied, the
/// mover's king position follows a king move, and the opponent's check
/// status is recomputed to detect checkmate.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] if either coordinate is off the board. Nothing
/// is changed in that case.
pub fn apply_move(board: &mut Board, start: Coordinate, end: Coordinate) -> Result<MoveOutcome, OutOfRangeError> {
    let moving = board.piece_at(start)?;
    let target = board.piece_at(end)?;

    board.square_mut(end)?.set_has_moved(true);

    if let (Some(loser), PieceKind::King) = (target.color(), target.kind()) {
        tracing::info!(%loser, at = %end, "king captured");
        return Ok(MoveOutcome::KingCaptured { loser });
    }

    board.square_mut(end)?.set_identity(&moving);
    board.square_mut(start)?.clear();
    tracing::debug!(piece = %moving, from = %start, to = %end, "moved");

    let Some(mover) = moving.color() else {
        return Ok(MoveOutcome::Continue);
    };
    if moving.kind() == PieceKind::King {
        board.player_mut(mover).set_king_position(end);
    }

    let opponent = mover.opposite();
    update_in_check(board, opponent);
    if is_checkmated(board, opponent) {
        tracing::info!(loser = %opponent, "checkmate");
        return Ok(MoveOutcome::Checkmate { loser: opponent });
    }
    Ok(MoveOutcome::Continue)
}
