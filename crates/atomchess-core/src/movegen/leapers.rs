//! Knight and king steps.

use std::ops::ControlFlow;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::{MoveVisitor, can_land};

/// One step per direction onto an empty or enemy-occupied square.
pub(super) fn visit_leaper<V: MoveVisitor + ?Sized>(
    board: &mut Board,
    source: Square,
    deltas: &[i8],
    color: Color,
    visitor: &mut V,
) -> ControlFlow<()> {
    for &delta in deltas {
        let Some(dest) = source.offset(delta) else {
            continue;
        };
        let target = board.cell(dest);
        if can_land(target, color) {
            visitor.visit(board, Move::new(source, dest), target)?;
        }
    }
    ControlFlow::Continue(())
}
