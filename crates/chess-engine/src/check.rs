//! Check and checkmate detection.

use crate::{is_legal_move, Board};
use chess_core::{Color, Coordinate};

/// Squares around the king, in the order escape moves are tried.
const KING_STEPS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Returns the first piece, scanning row by row, that can legally move onto
/// `defender`'s king square.
pub fn find_king_attacker(board: &Board, defender: Color) -> Option<Coordinate> {
    let attacker = defender.opposite();
    let king_at = board.player(defender).king_position();
    board
        .squares()
        .filter(|(_, piece)| piece.color() == Some(attacker))
        .find(|(from, piece)| matches!(is_legal_move(piece, board, *from, king_at), Ok(true)))
        .map(|(from, _)| from)
}

/// Recomputes whether `defender` is in check and records the result on its
/// [`Player`](crate::Player).
///
/// Only the first attacker found is remembered as the king's attacker.
/// Returns true if the king is attacked.
pub fn update_in_check(board: &mut Board, defender: Color) -> bool {
    let attacker = find_king_attacker(board, defender);
    if let Some(at) = attacker {
        tracing::info!(%defender, attacker = %at, "check");
    }
    board.player_mut(defender).set_check(attacker);
    attacker.is_some()
}

/// Returns true if `defender`'s king has a square to step to.
///
/// A neighboring square qualifies only when the king may legally move there
/// and the attacker recorded by the last [`update_in_check`] may legally move
/// there as well, both judged on the current board. No other enemy piece is
/// consulted, so a square the attacker cannot reach never counts.
pub fn king_has_valid_moves(board: &Board, defender: Color) -> bool {
    let player = board.player(defender);
    let king_at = player.king_position();
    let Ok(king) = board.piece_at(king_at) else {
        return false;
    };

    let attacker = player
        .king_attack_piece()
        .and_then(|at| board.piece_at(at).ok().map(|piece| (at, piece)));
    let attacker_reaches = |to: Coordinate| match attacker {
        Some((at, piece)) => matches!(is_legal_move(&piece, board, at, to), Ok(true)),
        None => false,
    };

    KING_STEPS
        .iter()
        .map(|&(d_row, d_col)| king_at.offset(d_row, d_col))
        .filter(|to| to.in_bounds())
        .any(|to| matches!(is_legal_move(&king, board, king_at, to), Ok(true)) && attacker_reaches(to))
}

/// Returns true if `defender` is recorded as in check and its king cannot step away.
pub fn is_checkmated(board: &Board, defender: Color) -> bool {
    board.player(defender).is_in_check() && !king_has_valid_moves(board, defender)
}
