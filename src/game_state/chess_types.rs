//! Core value types shared by the board, the piece records and the attack checks.

/// Side a piece belongs to. `Light` is white, `Dark` is black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank step of this side's pawn captures: light pawns attack toward
    /// higher ranks, dark pawns toward lower ranks.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
