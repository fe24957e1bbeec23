//! Board state: the 8×8 grid of squares plus both players.

use crate::Player;
use chess_core::{Color, Coordinate, OutOfRangeError, Piece, PieceKind, BOARD_SIZE};
use std::fmt;

const fn white(kind: PieceKind) -> Piece {
    Piece::new(Color::White, kind)
}

const fn black(kind: PieceKind) -> Piece {
    Piece::new(Color::Black, kind)
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The standard starting arrangement in row-major order.
const INITIAL_LAYOUT: [Piece; 64] = initial_layout();

const fn initial_layout() -> [Piece; 64] {
    let mut grid = [Piece::EMPTY; 64];
    let mut col = 0;
    while col < 8 {
        grid[col] = black(BACK_RANK[col]);
        grid[8 + col] = black(PieceKind::Pawn);
        grid[48 + col] = white(PieceKind::Pawn);
        grid[56 + col] = white(BACK_RANK[col]);
        col += 1;
    }
    grid
}

/// The game board.
///
/// Owns the grid and the per-color [`Player`] records. Queries borrow the
/// board immutably; only [`apply_move`](crate::apply_move) and the setup
/// helpers here mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [Piece; 64],
    players: [Player; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board in the standard starting position.
    pub fn new() -> Self {
        Board {
            grid: INITIAL_LAYOUT,
            players: [Player::new(Color::White), Player::new(Color::Black)],
        }
    }

    /// Creates a board with no pieces on it.
    ///
    /// Player records still point at the kings' starting squares until a
    /// king is placed with [`place`](Self::place).
    pub fn empty() -> Self {
        Board {
            grid: [Piece::EMPTY; 64],
            players: [Player::new(Color::White), Player::new(Color::Black)],
        }
    }

    /// Restores the standard starting position and fresh player records.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Returns the piece on `at`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `at` is off the board.
    #[inline]
    pub fn piece_at(&self, at: Coordinate) -> Result<Piece, OutOfRangeError> {
        Ok(self.grid[at.index()?])
    }

    /// Returns the state of the player with the given color.
    #[inline]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    pub(crate) fn player_mut(&mut self, color: Color) -> &mut Player {
        &mut self.players[color.index()]
    }

    pub(crate) fn square_mut(&mut self, at: Coordinate) -> Result<&mut Piece, OutOfRangeError> {
        Ok(&mut self.grid[at.index()?])
    }

    /// Puts `piece` on `at`, replacing whatever stood there.
    ///
    /// Placing a king moves that color's recorded king position along with it.
    pub fn place(&mut self, at: Coordinate, piece: Piece) -> Result<(), OutOfRangeError> {
        *self.square_mut(at)? = piece;
        if let (Some(color), PieceKind::King) = (piece.color(), piece.kind()) {
            self.player_mut(color).set_king_position(at);
        }
        Ok(())
    }

    /// Iterates over every square and its piece in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().zip(self.grid.iter().copied())
    }
}

/// Renders the grid with column numbers across the top and row numbers down the side.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = " +--+--+--+--+--+--+--+--+ ";
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {} ", col)?;
        }
        writeln!(f)?;
        for (row, squares) in self.grid.chunks(BOARD_SIZE as usize).enumerate() {
            writeln!(f, "{}", separator)?;
            write!(f, "{}|", row)?;
            for piece in squares {
                write!(f, "{}|", piece)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", separator)
    }
}
