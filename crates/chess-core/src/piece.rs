//! Chess piece representation.

use crate::Color;
use std::fmt;

/// The kind of piece standing on a square, `Empty` for a vacant one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Empty = 0,
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    /// All occupying piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the single-letter code used when rendering pieces.
    pub const fn initial(self) -> char {
        match self {
            PieceKind::Empty => '-',
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Empty => "Empty",
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// The contents of one board square.
///
/// A piece has a color exactly when its kind is not [`PieceKind::Empty`];
/// the constructors keep the two in step, so the fields are private.
/// `has_moved` belongs to the square and gates a pawn's two-square advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Option<Color>,
    kind: PieceKind,
    has_moved: bool,
}

impl Piece {
    /// An unoccupied square.
    pub const EMPTY: Piece = Piece {
        color: None,
        kind: PieceKind::Empty,
        has_moved: false,
    };

    /// Creates an unmoved piece. Passing [`PieceKind::Empty`] yields [`Piece::EMPTY`].
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        match kind {
            PieceKind::Empty => Piece::EMPTY,
            _ => Piece {
                color: Some(color),
                kind,
                has_moved: false,
            },
        }
    }

    /// Returns this piece with the moved flag set to `has_moved`.
    pub const fn with_moved(self, has_moved: bool) -> Self {
        Piece { has_moved, ..self }
    }

    /// The owning color, or `None` for an empty square.
    #[inline]
    pub const fn color(&self) -> Option<Color> {
        self.color
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, PieceKind::Empty)
    }

    /// Returns true if color and kind match, ignoring the moved flag.
    #[inline]
    pub fn same_identity(&self, other: &Piece) -> bool {
        self.color == other.color && self.kind == other.kind
    }

    /// Overwrites color and kind with those of `other`, keeping this square's moved flag.
    ///
    /// Square editing for the engine's move application; boards hand out copies.
    #[doc(hidden)]
    pub fn set_identity(&mut self, other: &Piece) {
        self.color = other.color;
        self.kind = other.kind;
    }

    /// Clears color and kind, keeping this square's moved flag.
    #[doc(hidden)]
    pub fn clear(&mut self) {
        self.color = None;
        self.kind = PieceKind::Empty;
    }

    #[doc(hidden)]
    pub fn set_has_moved(&mut self, has_moved: bool) {
        self.has_moved = has_moved;
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::EMPTY
    }
}

/// Two-letter code: color initial followed by kind initial, `--` when empty.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{}{}", color.initial(), self.kind.initial()),
            None => write!(f, "--"),
        }
    }
}
