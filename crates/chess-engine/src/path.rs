//! Blocking-piece detection along straight and diagonal paths.

use crate::Board;
use chess_core::{Coordinate, OutOfRangeError};

/// Moves `current` one square toward `end`: along the row or column when
/// they share one, otherwise diagonally.
#[inline]
fn step_toward(current: Coordinate, end: Coordinate) -> Coordinate {
    current.offset(
        (end.row - current.row).signum(),
        (end.col - current.col).signum(),
    )
}

/// Returns true if a piece stands between `start` and `end`.
///
/// Walks one square at a time from `start` toward `end`, looking at every
/// square strictly between the two. A square blocks when it is occupied by
/// anything other than a piece of the same color and kind as the one on
/// `end`; the destination's occupant is what the mover would capture and
/// never counts as a blocker. Each step shortens the remaining distance, so
/// the walk ends even for pairs that are not on a common line.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] if `end` is off the board.
pub fn has_collision(board: &Board, start: Coordinate, end: Coordinate) -> Result<bool, OutOfRangeError> {
    let target = board.piece_at(end)?;
    let mut current = step_toward(start, end);
    while current != end {
        let piece = board.piece_at(current)?;
        if !piece.is_empty() && !piece.same_identity(&target) {
            return Ok(true);
        }
        current = step_toward(current, end);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Color, Piece, PieceKind};

    fn c(row: i32, col: i32) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn clear_paths_in_all_directions() {
        let board = Board::empty();
        let from = c(3, 3);
        for end in [c(3, 0), c(3, 7), c(0, 3), c(7, 3), c(0, 0), c(6, 6), c(0, 6), c(6, 0)] {
            assert_eq!(has_collision(&board, from, end), Ok(false), "toward {end}");
        }
    }

    #[test]
    fn start_equals_end_is_clear() {
        let board = Board::new();
        assert_eq!(has_collision(&board, c(7, 0), c(7, 0)), Ok(false));
    }

    #[test]
    fn blocker_on_file() {
        let board = Board::new();
        // rook behind its own pawn
        assert_eq!(has_collision(&board, c(7, 0), c(4, 0)), Ok(true));
        // pawn's own single step has nothing in between
        assert_eq!(has_collision(&board, c(6, 0), c(5, 0)), Ok(false));
    }

    #[test]
    fn destination_occupant_is_not_a_blocker() {
        let mut board = Board::empty();
        board
            .place(c(2, 2), Piece::new(Color::Black, PieceKind::Knight))
            .unwrap();
        assert_eq!(has_collision(&board, c(5, 5), c(2, 2)), Ok(false));
    }

    #[test]
    fn identical_piece_in_between_does_not_block() {
        let mut board = Board::empty();
        let pawn = Piece::new(Color::Black, PieceKind::Pawn);
        board.place(c(2, 0), pawn).unwrap();
        board.place(c(4, 0), pawn).unwrap();
        assert_eq!(has_collision(&board, c(7, 0), c(2, 0)), Ok(false));

        board
            .place(c(4, 0), Piece::new(Color::White, PieceKind::Pawn))
            .unwrap();
        assert_eq!(has_collision(&board, c(7, 0), c(2, 0)), Ok(true));
    }

    #[test]
    fn off_line_pairs_terminate() {
        let mut board = Board::empty();
        // path (7,0) -> (6,1) -> (5,2) -> (4,2) -> (3,2)
        assert_eq!(has_collision(&board, c(7, 0), c(3, 2)), Ok(false));
        board
            .place(c(5, 2), Piece::new(Color::White, PieceKind::Queen))
            .unwrap();
        assert_eq!(has_collision(&board, c(7, 0), c(3, 2)), Ok(true));
    }

    #[test]
    fn off_board_end_is_an_error() {
        let board = Board::empty();
        assert!(has_collision(&board, c(0, 0), c(0, 8)).is_err());
    }
}
