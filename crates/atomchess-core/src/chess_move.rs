//! Moves as origin/target square pairs.

use std::fmt;
use std::str::FromStr;

use crate::error::MoveParseError;
use crate::piece::Piece;
use crate::square::Square;

/// A move from one square to another.
///
/// Special-rule side effects (promotion, en passant removal, castling rook
/// relocation) are inferred from the board when the move is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
}

impl Move {
    /// Create a move.
    #[inline]
    pub const fn new(source: Square, dest: Square) -> Move {
        Move { source, dest }
    }

    /// Return the origin square.
    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    /// Return the target square.
    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// Return the packed displacement `dest - source`.
    #[inline]
    pub const fn delta(self) -> i16 {
        self.dest.index() as i16 - self.source.index() as i16
    }

    /// Return `true` if the move shifts exactly one row and one column.
    #[inline]
    pub const fn is_diagonal_step(self) -> bool {
        matches!(self.delta().abs(), 15 | 17)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse the four-character coordinate form, e.g. `D2D4` (case-insensitive).
    fn from_str(s: &str) -> Result<Move, MoveParseError> {
        let text = s.trim();
        if text.len() != 4 || !text.is_ascii() {
            return Err(MoveParseError::WrongLength {
                found: text.to_string(),
            });
        }
        let (from, to) = text.split_at(2);
        let parse = |part: &str| {
            Square::from_algebraic(part).ok_or_else(|| MoveParseError::InvalidSquare {
                text: part.to_string(),
            })
        };
        Ok(Move::new(parse(from)?, parse(to)?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

/// The category of an applied move, detected from the board at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    /// A pawn advanced two rows and became the en passant target.
    DoublePush,
    /// A pawn reached the far row and became a queen.
    Promotion,
    /// A pawn captured diagonally onto the passed-over square.
    EnPassant,
    /// A king moved two columns and the rook jumped beside it.
    Castling,
}

/// Report of what [`Board::apply_move`](crate::board::Board::apply_move) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// The move that was applied.
    pub mv: Move,
    /// Which special rule, if any, fired.
    pub kind: MoveKind,
    /// The piece removed from the board, including an en passant victim.
    /// Reported without the pristine flag.
    pub captured: Option<Piece>,
}
