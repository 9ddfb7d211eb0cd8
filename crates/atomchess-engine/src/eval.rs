//! Material scoring.
//!
//! Material is the engine's only evaluation term: a move scores the value of
//! whatever it captures.

use atomchess_core::{Board, Cell, Color, PieceKind};

/// Material value of each piece kind. The king is worth nothing here because
/// capturing it ends the search through a dedicated score.
///
/// | Piece  | value |
/// |--------|-------|
/// | Pawn   | 1     |
/// | Rook   | 5     |
/// | Bishop | 3     |
/// | Queen  | 9     |
/// | Knight | 3     |
/// | King   | 0     |
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Rook => 5,
        PieceKind::Bishop => 3,
        PieceKind::Queen => 9,
        PieceKind::Knight => 3,
        PieceKind::King => 0,
    }
}

/// Value gained by moving onto `target`; zero for an empty cell.
#[inline]
pub fn capture_value(target: Cell) -> i32 {
    target.kind().map_or(0, piece_value)
}

/// Material balance from `color`'s point of view (positive = `color` ahead).
pub fn material(board: &Board, color: Color) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = piece_value(piece.kind());
            if piece.color() == color { value } else { -value }
        })
        .sum()
}
