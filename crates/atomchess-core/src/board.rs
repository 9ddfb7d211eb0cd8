//! The 0x88 board: 128 packed cells plus the en passant target.

use std::fmt;

use crate::cell::Cell;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::{BOARD_CELLS, Square, is_on_board};

/// Back-rank piece order from file A to file H.
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

/// Return the piece that stands on `sq` in the standard starting position.
pub(crate) fn home_piece(sq: Square) -> Option<Piece> {
    Color::ALL.into_iter().find_map(|color| {
        if sq.row() == color.back_row() {
            Some(Piece::new(BACK_RANK[sq.col() as usize], color))
        } else if sq.row() == color.pawn_row() {
            Some(Piece::new(PieceKind::Pawn, color))
        } else {
            None
        }
    })
}

/// Complete position state shared by the search and the game loop.
///
/// Every playable cell holds [`Cell::EMPTY`] or a piece; every frontier cell
/// holds [`Cell::FRONTIER`] and is never written after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
    /// Square of the pawn that just advanced two rows, if the last move was such an advance.
    en_passant: Option<Square>,
}

impl Board {
    /// Return a board with every playable cell empty and the frontier marked.
    pub fn empty() -> Board {
        let mut cells = [Cell::EMPTY; BOARD_CELLS];
        for (index, cell) in cells.iter_mut().enumerate() {
            if !is_on_board(index as i32) {
                *cell = Cell::FRONTIER;
            }
        }
        Board {
            cells,
            en_passant: None,
        }
    }

    /// Return the standard starting position. Every piece carries the pristine flag.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for sq in Square::all() {
            if let Some(piece) = home_piece(sq) {
                board.put(sq, Cell::from(piece.pristine()));
            }
        }
        board
    }

    /// Read the cell at a raw packed index. Indices outside the playable area read as
    /// [`Cell::FRONTIER`].
    #[inline]
    pub fn get(&self, index: i32) -> Cell {
        match Square::from_index(index) {
            Some(sq) => self.cell(sq),
            None => Cell::FRONTIER,
        }
    }

    /// Write a piece (or clear the cell) at a raw packed index.
    ///
    /// Writes outside the playable area are dropped without effect.
    #[inline]
    pub fn set(&mut self, index: i32, piece: Option<Piece>) {
        if let Some(sq) = Square::from_index(index) {
            self.put(sq, Cell::from(piece));
        }
    }

    /// Return the cell at `sq`.
    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    /// Overwrite the cell at `sq`.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, cell: Cell) {
        debug_assert!(!cell.is_frontier(), "frontier written to playable square {sq}");
        self.cells[sq.index()] = cell;
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.cell(sq).piece()
    }

    /// Iterate over every occupied square in ascending index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_on(sq).map(|piece| (sq, piece)))
    }

    /// Return the square of `color`'s king, or `None` once it has been captured.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind() == PieceKind::King && piece.color() == color)
            .map(|(sq, _)| sq)
    }

    /// Return the en passant target: the square of the pawn that just advanced two rows.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    /// Return the empty square a pawn of `mover` may capture onto en passant.
    ///
    /// That is the square the double-advanced pawn passed over. Only available
    /// when the pawn on the target belongs to the other side.
    pub fn en_passant_capture_square(&self, mover: Color) -> Option<Square> {
        let target = self.en_passant?;
        let pawn = self.piece_on(target)?;
        if pawn.kind() != PieceKind::Pawn || pawn.color() == mover {
            return None;
        }
        target.offset(mover.forward())
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces()
                .filter(|(_, p)| p.kind() == PieceKind::King && p.color() == color)
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        let pawn_on_back_rank = self.pieces().any(|(sq, piece)| {
            piece.kind() == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7)
        });
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        let frontier_intact = self
            .cells
            .iter()
            .enumerate()
            .all(|(index, cell)| is_on_board(index as i32) != cell.is_frontier());
        if !frontier_intact {
            return Err(BoardError::FrontierCorrupted);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.pretty())?;
        match self.en_passant {
            Some(sq) => write!(f, "en passant: {sq}"),
            None => write!(f, "en passant: -"),
        }
    }
}

/// Wrapper for printing a board as the two-character teletype grid.
///
/// ```text
///     A   B   C   D   E   F   G   H
///
/// 8  BR  BN  BB  BQ  BK  BB  BN  BR
/// ```
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    A   B   C   D   E   F   G   H")?;
        writeln!(f)?;
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let label = Square::from_row_col(row, col)
                    .and_then(|sq| self.0.piece_on(sq))
                    .map_or(['.', '.'], |piece| piece.label());
                write!(f, "{}{}", label[0], label[1])?;
                if col < 7 {
                    write!(f, "  ")?;
                }
            }
            if row < 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
