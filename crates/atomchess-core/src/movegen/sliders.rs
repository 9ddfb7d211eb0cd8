//! Rook, bishop and queen rays.

use std::ops::ControlFlow;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::{MoveVisitor, can_land};

/// Walk each direction until the frontier or a piece. A capture onto an enemy
/// piece is generated and ends the ray; a friendly piece ends it without a move.
pub(super) fn visit_slider<V: MoveVisitor + ?Sized>(
    board: &mut Board,
    source: Square,
    deltas: &[i8],
    color: Color,
    visitor: &mut V,
) -> ControlFlow<()> {
    for &delta in deltas {
        let mut cursor = source;
        while let Some(dest) = cursor.offset(delta) {
            let target = board.cell(dest);
            if !can_land(target, color) {
                break;
            }
            visitor.visit(board, Move::new(source, dest), target)?;
            if !target.is_empty() {
                break;
            }
            cursor = dest;
        }
    }
    ControlFlow::Continue(())
}
