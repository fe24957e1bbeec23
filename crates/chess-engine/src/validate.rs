//! Move legality.

use crate::path::has_collision;
use crate::rules::{bishop_move, king_move, knight_move, pawn_move, queen_move, rook_move};
use crate::Board;
use chess_core::{Coordinate, OutOfRangeError, Piece, PieceKind};

/// Returns true if `piece`, standing on `start`, may move to `end`.
///
/// The move is rejected when `end` holds a piece of the same color as the one
/// on `start`, when `end` is off the board, when anything but a knight would
/// pass through an occupied square, or when the piece's own geometry forbids
/// it. Whether the move leaves the mover's own king attacked is not examined.
///
/// The function is pure: it only reads `board`.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] if `start` is off the board. An off-board
/// `end` is an ordinary illegal move.
pub fn is_legal_move(
    piece: &Piece,
    board: &Board,
    start: Coordinate,
    end: Coordinate,
) -> Result<bool, OutOfRangeError> {
    let mover = board.piece_at(start)?;
    let Ok(target) = board.piece_at(end) else {
        return Ok(false);
    };

    if mover.color() == target.color() {
        return Ok(false);
    }

    let kind = piece.kind();
    if kind != PieceKind::Knight && has_collision(board, start, end)? {
        return Ok(false);
    }

    Ok(match kind {
        PieceKind::Empty => false,
        PieceKind::Pawn => pawn_move(piece, board, start, end),
        PieceKind::Knight => knight_move(start, end),
        PieceKind::Bishop => bishop_move(start, end),
        PieceKind::Rook => rook_move(start, end),
        PieceKind::Queen => queen_move(start, end),
        PieceKind::King => king_move(start, end),
    })
}
