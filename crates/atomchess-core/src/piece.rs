//! Colored chess piece, bit-packed into a single byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

const KIND_MASK: u8 = 0x07;
const COLOR_MASK: u8 = 0x08;
const PRISTINE_MASK: u8 = 0x10;

/// A colored chess piece, bit-packed into a single byte.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] type code (1-6)
/// - bit 3: [`Color`] (1 = White, 0 = Black)
/// - bit 4: pristine flag, set on pieces still on their starting square
///
/// The pristine flag is carried through the encoding but never consulted by
/// move generation. Any move clears it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// Create a piece from a kind and a color, with the pristine flag clear.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece(color.bits() | kind.bits())
    }

    /// Decode a raw cell byte. Returns `None` for empty and frontier codes.
    #[inline]
    pub const fn from_raw(raw: u8) -> Option<Piece> {
        match PieceKind::from_bits(raw) {
            Some(_) => Some(Piece(raw & (KIND_MASK | COLOR_MASK | PRISTINE_MASK))),
            None => None,
        }
    }

    /// Parse a FEN character: uppercase is White, lowercase is Black.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// Return the piece kind (the lower 3 bits).
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match PieceKind::from_bits(self.0) {
            Some(kind) => kind,
            // Unreachable: every constructor checks the type code.
            None => PieceKind::Pawn,
        }
    }

    /// Return the color (bit 3).
    #[inline]
    pub const fn color(self) -> Color {
        if self.0 & COLOR_MASK != 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Return `true` if the piece has not moved since setup.
    #[inline]
    pub const fn is_pristine(self) -> bool {
        self.0 & PRISTINE_MASK != 0
    }

    /// Return this piece with the pristine flag set.
    #[inline]
    pub const fn pristine(self) -> Piece {
        Piece(self.0 | PRISTINE_MASK)
    }

    /// Return this piece with the pristine flag cleared.
    #[inline]
    pub const fn moved(self) -> Piece {
        Piece(self.0 & !PRISTINE_MASK)
    }

    /// Return the raw packed byte.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Two-character display label such as `WP` or `BK`.
    pub fn label(self) -> [char; 2] {
        let side = match self.color() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        [side, self.kind().letter()]
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [side, kind] = self.label();
        write!(f, "{side}{kind}")
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pristine() {
            write!(f, "{self}*")
        } else {
            write!(f, "{self}")
        }
    }
}
