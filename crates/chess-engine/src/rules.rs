//! Per-piece movement geometry.
//!
//! Each predicate answers whether a piece of that kind could travel from
//! `start` to `end` in isolation. Friendly fire, board bounds and blocking
//! pieces are the validator's concern, see [`is_legal_move`](crate::is_legal_move).
//! Only the pawn rule looks at the board, because whether it may step
//! diagonally or straight depends on what stands on the destination.

use crate::Board;
use chess_core::{Coordinate, Piece};

#[inline]
fn deltas(start: Coordinate, end: Coordinate) -> (i32, i32) {
    (end.row - start.row, end.col - start.col)
}

/// One of the eight L-shaped jumps.
pub fn knight_move(start: Coordinate, end: Coordinate) -> bool {
    let (d_row, d_col) = deltas(start, end);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}

/// Any diagonal.
///
/// A zero-length move also satisfies `|Δrow| == |Δcol|`; the validator's
/// friendly-fire check rejects it before it can matter.
pub fn bishop_move(start: Coordinate, end: Coordinate) -> bool {
    let (d_row, d_col) = deltas(start, end);
    d_row.abs() == d_col.abs()
}

/// Along a row or a column. Exactly one delta is nonzero, so staying put is rejected.
pub fn rook_move(start: Coordinate, end: Coordinate) -> bool {
    let (d_row, d_col) = deltas(start, end);
    (d_row != 0) != (d_col != 0)
}

pub fn queen_move(start: Coordinate, end: Coordinate) -> bool {
    bishop_move(start, end) || rook_move(start, end)
}

/// A queen move of exactly one square in any direction.
pub fn king_move(start: Coordinate, end: Coordinate) -> bool {
    let (d_row, d_col) = deltas(start, end);
    let one_step = d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0);
    queen_move(start, end) && one_step
}

/// Pawn movement for `pawn`, which stands on `start`.
///
/// A pawn may step one row forward and one column sideways onto any occupied
/// square, or advance straight onto an empty square: one row always, two rows
/// while the square it stands on has not been marked as moved. The diagonal
/// does not look at the target's color; friendly fire is ruled out earlier.
///
/// `end` must lie on the board.
pub fn pawn_move(pawn: &Piece, board: &Board, start: Coordinate, end: Coordinate) -> bool {
    let Some(color) = pawn.color() else {
        return false;
    };
    let Ok(target) = board.piece_at(end) else {
        return false;
    };
    let forward = color.pawn_direction();
    let (d_row, d_col) = deltas(start, end);

    if !target.is_empty() {
        return d_row == forward && d_col.abs() == 1;
    }

    d_col == 0 && (d_row == forward || (d_row == 2 * forward && !pawn.has_moved()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Color, PieceKind};

    fn c(row: i32, col: i32) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn knight_offsets() {
        let from = c(4, 4);
        let mut count = 0;
        for row in 0..8 {
            for col in 0..8 {
                if knight_move(from, c(row, col)) {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 8);
        assert!(knight_move(from, c(2, 3)));
        assert!(knight_move(from, c(5, 6)));
        assert!(!knight_move(from, c(6, 6)));
        assert!(!knight_move(from, from));
    }

    #[test]
    fn bishop_diagonals() {
        assert!(bishop_move(c(7, 2), c(4, 5)));
        assert!(bishop_move(c(7, 2), c(5, 0)));
        assert!(!bishop_move(c(7, 2), c(6, 2)));
        assert!(bishop_move(c(3, 3), c(3, 3)));
    }

    #[test]
    fn rook_lines() {
        assert!(rook_move(c(0, 0), c(0, 7)));
        assert!(rook_move(c(0, 0), c(5, 0)));
        assert!(!rook_move(c(0, 0), c(1, 1)));
        assert!(!rook_move(c(3, 3), c(3, 3)));
    }

    #[test]
    fn queen_is_rook_or_bishop() {
        assert!(queen_move(c(3, 3), c(3, 0)));
        assert!(queen_move(c(3, 3), c(0, 6)));
        assert!(!queen_move(c(3, 3), c(1, 4)));
    }

    #[test]
    fn king_single_steps() {
        let from = c(4, 4);
        for (d_row, d_col) in [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)] {
            assert!(king_move(from, from.offset(d_row, d_col)));
        }
        assert!(!king_move(from, from));
        assert!(!king_move(from, c(6, 4)));
        assert!(!king_move(from, c(5, 6)));
    }

    #[test]
    fn pawn_advances() {
        let board = Board::new();
        let white = board.piece_at(c(6, 4)).unwrap();
        assert!(pawn_move(&white, &board, c(6, 4), c(5, 4)));
        assert!(pawn_move(&white, &board, c(6, 4), c(4, 4)));
        assert!(!pawn_move(&white, &board, c(6, 4), c(3, 4)));
        assert!(!pawn_move(&white, &board, c(6, 4), c(7, 4)));
        assert!(!pawn_move(&white, &board, c(6, 4), c(5, 5)));

        let black = board.piece_at(c(1, 2)).unwrap();
        assert!(pawn_move(&black, &board, c(1, 2), c(2, 2)));
        assert!(pawn_move(&black, &board, c(1, 2), c(3, 2)));
        assert!(!pawn_move(&black, &board, c(1, 2), c(0, 2)));
    }

    #[test]
    fn moved_pawn_single_step_only() {
        let board = Board::empty();
        let pawn = Piece::new(Color::White, PieceKind::Pawn).with_moved(true);
        assert!(pawn_move(&pawn, &board, c(5, 4), c(4, 4)));
        assert!(!pawn_move(&pawn, &board, c(5, 4), c(3, 4)));
    }

    #[test]
    fn pawn_blocked_straight_captures_diagonal() {
        let mut board = Board::empty();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        board.place(c(6, 4), pawn).unwrap();
        board
            .place(c(5, 4), Piece::new(Color::Black, PieceKind::Knight))
            .unwrap();
        board
            .place(c(5, 3), Piece::new(Color::Black, PieceKind::Bishop))
            .unwrap();
        board
            .place(c(5, 5), Piece::new(Color::White, PieceKind::Rook))
            .unwrap();

        assert!(!pawn_move(&pawn, &board, c(6, 4), c(5, 4)));
        assert!(pawn_move(&pawn, &board, c(6, 4), c(5, 3)));
        // the diagonal rule alone does not care whose piece it lands on
        assert!(pawn_move(&pawn, &board, c(6, 4), c(5, 5)));
        // no diagonal onto an empty square
        assert!(!pawn_move(&pawn, &board, c(6, 4), c(7, 3)));
    }

    #[test]
    fn pawn_never_captures_backward() {
        let mut board = Board::empty();
        let pawn = Piece::new(Color::Black, PieceKind::Pawn);
        board.place(c(3, 3), pawn).unwrap();
        board
            .place(c(2, 4), Piece::new(Color::White, PieceKind::Pawn))
            .unwrap();
        assert!(!pawn_move(&pawn, &board, c(3, 3), c(2, 4)));
    }
}
