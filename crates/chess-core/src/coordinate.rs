//! Board coordinate representation.

use std::fmt;
use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i32 = 8;

/// Raised when a coordinate outside the 8×8 grid is used to index a square.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("coordinate {0} is outside the board")]
pub struct OutOfRangeError(pub Coordinate);

/// A `(row, column)` pair.
///
/// Row 0 is Black's back rank and row 7 is White's. Any pair of integers can
/// be represented so that callers can ask about moves leaving the board;
/// only [`Coordinate::index`] enforces the `[0, 7]` range.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Coordinate { row, col }
    }

    /// Returns true if both components lie in `[0, 7]`.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Returns the row-major grid index (0-63).
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if the coordinate is off the board.
    #[inline]
    pub const fn index(self) -> Result<usize, OutOfRangeError> {
        if self.in_bounds() {
            Ok((self.row * BOARD_SIZE + self.col) as usize)
        } else {
            Err(OutOfRangeError(self))
        }
    }

    /// Returns the coordinate shifted by the given row and column deltas.
    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Coordinate::new(self.row + d_row, self.col + d_col)
    }

    /// Iterates over all 64 on-board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate::new(row, col)))
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
