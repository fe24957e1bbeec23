//! Player color representation.

/// The two players. An unoccupied square has no color, which is modelled as
/// `Option<Color>::None` wherever a square's color is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, in turn order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row delta of a forward pawn step (-1 for White, +1 for Black).
    ///
    /// Row 0 is Black's back rank, so White advances toward decreasing rows.
    #[inline]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Returns the back rank row for this color (7 for White, 0 for Black).
    #[inline]
    pub const fn back_rank(self) -> i32 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Returns the single-letter code used when rendering pieces.
    #[inline]
    pub const fn initial(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_color() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
    }

    #[test]
    fn color_index() {
        assert_eq!(Color::White.index(), 0);
        assert_eq!(Color::Black.index(), 1);
    }

    #[test]
    fn pawn_direction() {
        assert_eq!(Color::White.pawn_direction(), -1);
        assert_eq!(Color::Black.pawn_direction(), 1);
    }

    #[test]
    fn back_rank() {
        assert_eq!(Color::White.back_rank(), 7);
        assert_eq!(Color::Black.back_rank(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "White");
        assert_eq!(format!("{}", Color::Black), "Black");
    }
}
