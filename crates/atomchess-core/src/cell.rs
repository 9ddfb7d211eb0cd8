//! Contents of one 0x88 board cell.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Raw cell code for an empty square.
const EMPTY_CODE: u8 = 0x00;
/// Raw cell code for the frontier padding and the out-of-range read sentinel.
const FRONTIER_CODE: u8 = 0x07;

/// One cell of the 128-entry board array: empty, frontier, or a packed [`Piece`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    /// An empty playable square.
    pub const EMPTY: Cell = Cell(EMPTY_CODE);

    /// Frontier padding. Also returned for reads outside the playable area.
    pub const FRONTIER: Cell = Cell(FRONTIER_CODE);

    /// Wrap a piece.
    #[inline]
    pub const fn from_piece(piece: Piece) -> Cell {
        Cell(piece.raw())
    }

    /// Return the raw byte.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == EMPTY_CODE
    }

    #[inline]
    pub const fn is_frontier(self) -> bool {
        self.0 == FRONTIER_CODE
    }

    /// Return the piece in this cell, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        Piece::from_raw(self.0)
    }

    /// Return the kind of the piece in this cell, if any.
    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_bits(self.0)
    }

    /// Return the color of the piece in this cell, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self.piece() {
            Some(piece) => Some(piece.color()),
            None => None,
        }
    }

    /// Return this cell with the pristine flag of its piece cleared.
    #[inline]
    pub const fn moved(self) -> Cell {
        match self.piece() {
            Some(piece) => Cell(piece.moved().raw()),
            None => self,
        }
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Cell {
        Cell::from_piece(piece)
    }
}

impl From<Option<Piece>> for Cell {
    fn from(piece: Option<Piece>) -> Cell {
        piece.map_or(Cell::EMPTY, Cell::from_piece)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.piece() {
            Some(piece) => write!(f, "Cell({piece:?})"),
            None if self.is_frontier() => write!(f, "Cell(frontier)"),
            None => write!(f, "Cell(empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;

    #[test]
    fn sentinels_hold_no_piece() {
        assert!(Cell::EMPTY.is_empty());
        assert!(Cell::FRONTIER.is_frontier());
        assert_eq!(Cell::EMPTY.piece(), None);
        assert_eq!(Cell::FRONTIER.piece(), None);
        assert_eq!(Cell::FRONTIER.kind(), None);
        assert_eq!(Cell::FRONTIER.color(), None);
    }

    #[test]
    fn piece_cell_extraction() {
        let cell = Cell::from(Piece::BLACK_KNIGHT.pristine());
        assert_eq!(cell.kind(), Some(PieceKind::Knight));
        assert_eq!(cell.color(), Some(Color::Black));
        assert!(!cell.is_empty());
    }

    #[test]
    fn moved_clears_only_the_pristine_flag() {
        let cell = Cell::from(Piece::WHITE_PAWN.pristine());
        assert_eq!(cell.moved(), Cell::from(Piece::WHITE_PAWN));
        assert_eq!(Cell::EMPTY.moved(), Cell::EMPTY);
    }

    #[test]
    fn from_option() {
        assert_eq!(Cell::from(None), Cell::EMPTY);
        assert_eq!(Cell::from(Some(Piece::WHITE_KING)), Cell::from(Piece::WHITE_KING));
    }
}
