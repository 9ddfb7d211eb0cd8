//! Chess piece kinds.

use std::fmt;

/// The kind of a chess piece, without color information.
///
/// Discriminants are the 3-bit type codes stored in a packed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 1,
    Rook = 2,
    Bishop = 3,
    Queen = 4,
    Knight = 5,
    King = 6,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in type-code order.
    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::Knight,
        PieceKind::King,
    ];

    /// Return the 3-bit type code (1..=6).
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a 3-bit type code. Codes 0 (empty) and 7 (frontier) are not pieces.
    #[inline]
    pub const fn from_bits(bits: u8) -> Option<PieceKind> {
        match bits & 0x07 {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Rook),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Queen),
            5 => Some(PieceKind::Knight),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Return `true` for rooks, bishops and queens, which repeat their step along a ray.
    #[inline]
    pub const fn slides(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }

    /// Return the uppercase letter used on the board display.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::Knight => 'N',
            PieceKind::King => 'K',
        }
    }

    /// Parse a FEN character (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'R' => Some(PieceKind::Rook),
            'B' => Some(PieceKind::Bishop),
            'Q' => Some(PieceKind::Queen),
            'N' => Some(PieceKind::Knight),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
