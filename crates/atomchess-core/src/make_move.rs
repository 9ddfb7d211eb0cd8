//! Move execution: the reversible search primitive and full game moves.

use tracing::trace;

use crate::board::Board;
use crate::cell::Cell;
use crate::chess_move::{AppliedMove, Move, MoveKind};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Saved origin and target cells of a search move.
///
/// Handing it back to [`Board::unmake_search_move`] restores the board bit
/// for bit. Undo records must be replayed in LIFO order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a search move must be unmade before returning to the caller"]
pub struct Undo {
    mv: Move,
    origin: Cell,
    target: Cell,
}

impl Board {
    /// Apply `mv` in place for search: the piece moves (pristine flag cleared)
    /// and whatever stood on the target is overwritten.
    ///
    /// No special-rule side effects run and the en passant target is untouched.
    #[inline]
    pub fn make_search_move(&mut self, mv: Move) -> Undo {
        let origin = self.cell(mv.source());
        let target = self.cell(mv.dest());
        self.put(mv.dest(), origin.moved());
        self.put(mv.source(), Cell::EMPTY);
        Undo { mv, origin, target }
    }

    /// Revert a move made with [`Board::make_search_move`].
    #[inline]
    pub fn unmake_search_move(&mut self, undo: Undo) {
        self.put(undo.mv.source(), undo.origin);
        self.put(undo.mv.dest(), undo.target);
    }

    /// Apply a move that has already been judged legal, with every special rule:
    ///
    /// - a pawn reaching the far row becomes a queen of its color;
    /// - a diagonal pawn step onto the empty en passant capture square removes
    ///   the passed pawn;
    /// - a pawn double advance becomes the new en passant target, any other
    ///   move clears it;
    /// - a king moving two columns brings the rook on that side to the square
    ///   it passed over.
    pub fn apply_move(&mut self, mv: Move) -> AppliedMove {
        let source = mv.source();
        let dest = mv.dest();
        let moving = self.piece_on(source);
        let mut captured = self.piece_on(dest).map(Piece::moved);
        let en_passant = moving.and_then(|piece| self.en_passant_capture_square(piece.color()));

        self.put(dest, self.cell(source).moved());
        self.put(source, Cell::EMPTY);
        self.set_en_passant(None);

        let mut kind = MoveKind::Normal;
        match moving {
            Some(piece) if piece.kind() == PieceKind::Pawn => {
                let color = piece.color();
                if dest.row() == color.promotion_row() {
                    self.put(dest, Cell::from(Piece::new(PieceKind::Queen, color)));
                    kind = MoveKind::Promotion;
                    trace!(%mv, "pawn promoted to queen");
                } else if captured.is_none()
                    && mv.is_diagonal_step()
                    && en_passant == Some(dest)
                    && let Some(victim) = dest.offset(-color.forward())
                {
                    captured = self.piece_on(victim).map(Piece::moved);
                    self.put(victim, Cell::EMPTY);
                    kind = MoveKind::EnPassant;
                    trace!(%mv, %victim, "en passant capture");
                } else if mv.delta().abs() == 32 {
                    self.set_en_passant(Some(dest));
                    kind = MoveKind::DoublePush;
                }
            }
            Some(piece) if piece.kind() == PieceKind::King && mv.delta().abs() == 2 => {
                let (rook_from, rook_to) = if mv.delta() > 0 {
                    (dest.offset(1), dest.offset(-1))
                } else {
                    (dest.offset(-2), dest.offset(1))
                };
                if let (Some(rook_from), Some(rook_to)) = (rook_from, rook_to) {
                    self.put(rook_to, self.cell(rook_from).moved());
                    self.put(rook_from, Cell::EMPTY);
                    kind = MoveKind::Castling;
                    trace!(%mv, %rook_from, %rook_to, "castling rook relocated");
                }
            }
            _ => {}
        }

        AppliedMove { mv, kind, captured }
    }
}
