//! Side colors.

use std::fmt;
use std::ops::Not;

/// A side: White or Black.
///
/// White starts on rows 6-7 of the 0x88 grid and advances toward row 0;
/// Black starts on rows 0-1 and advances toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; Color::COUNT] = [Color::White, Color::Black];

    /// Return the color bit used in a packed cell (`0x08` for White, `0` for Black).
    #[inline]
    pub const fn bits(self) -> u8 {
        match self {
            Color::White => 0x08,
            Color::Black => 0x00,
        }
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Index displacement of a single pawn advance.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -16,
            Color::Black => 16,
        }
    }

    /// Row on which this side's pawns start (and from which they may double-advance).
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which this side's back-rank pieces start.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row on which this side's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.flip().back_row()
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
