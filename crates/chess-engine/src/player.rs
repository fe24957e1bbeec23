//! Per-color derived state.

use chess_core::{Color, Coordinate};

/// Column the kings start on.
const KING_START_COL: i32 = 4;

/// State tracked for one side: where its king stands and whether it is in check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    color: Color,
    king_position: Coordinate,
    is_in_check: bool,
    king_attack_piece: Option<Coordinate>,
}

impl Player {
    /// Creates a player whose king is on its starting square.
    pub const fn new(color: Color) -> Self {
        Player {
            color,
            king_position: Coordinate::new(color.back_rank(), KING_START_COL),
            is_in_check: false,
            king_attack_piece: None,
        }
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn king_position(&self) -> Coordinate {
        self.king_position
    }

    #[inline]
    pub const fn is_in_check(&self) -> bool {
        self.is_in_check
    }

    /// The square of the first enemy piece found attacking the king.
    ///
    /// Only `Some` while [`is_in_check`](Self::is_in_check) is true.
    #[inline]
    pub const fn king_attack_piece(&self) -> Option<Coordinate> {
        self.king_attack_piece
    }

    pub(crate) fn set_king_position(&mut self, position: Coordinate) {
        self.king_position = position;
    }

    pub(crate) fn set_check(&mut self, attacker: Option<Coordinate>) {
        self.is_in_check = attacker.is_some();
        self.king_attack_piece = attacker;
    }
}
