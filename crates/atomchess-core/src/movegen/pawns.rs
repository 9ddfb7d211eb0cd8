//! Pawn move generation.

use std::ops::ControlFlow;

use crate::board::Board;
use crate::cell::Cell;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::MoveVisitor;

/// Generate pawn moves in direction-code order: single advance, double
/// advance, capture toward file A, capture toward file H.
///
/// Advances need an empty destination; the double advance also needs the
/// starting row and an empty passed-over square. Diagonals need an enemy
/// piece or the en passant capture square.
pub(super) fn visit_pawn<V: MoveVisitor + ?Sized>(
    board: &mut Board,
    source: Square,
    color: Color,
    visitor: &mut V,
) -> ControlFlow<()> {
    let forward = color.forward();

    // --- Advances ---
    if let Some(single) = source.offset(forward)
        && board.cell(single).is_empty()
    {
        visitor.visit(board, Move::new(source, single), Cell::EMPTY)?;

        if source.row() == color.pawn_row()
            && let Some(double) = single.offset(forward)
            && board.cell(double).is_empty()
        {
            visitor.visit(board, Move::new(source, double), Cell::EMPTY)?;
        }
    }

    // --- Captures ---
    let en_passant = board.en_passant_capture_square(color);
    for delta in [forward - 1, forward + 1] {
        let Some(dest) = source.offset(delta) else {
            continue;
        };
        let target = board.cell(dest);
        let allowed = match target.color() {
            Some(occupant) => occupant != color,
            None => en_passant == Some(dest),
        };
        if allowed {
            visitor.visit(board, Move::new(source, dest), target)?;
        }
    }

    ControlFlow::Continue(())
}
