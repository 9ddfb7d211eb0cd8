//! Pseudo-legal move enumeration.
//!
//! A single traversal drives every consumer: the enumerator walks the board
//! and hands each generated move to a [`MoveVisitor`]. Visitors may mutate the
//! board while handling a move, but must restore it before returning.
//! Legality is exactly "produced by this enumerator": nothing checks whether
//! the mover's own king is left capturable.

mod leapers;
mod pawns;
mod sliders;

use std::ops::ControlFlow;

use crate::board::Board;
use crate::cell::Cell;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::leapers::visit_leaper;
use self::pawns::visit_pawn;
use self::sliders::visit_slider;

/// Knight hops.
const KNIGHT_DELTAS: [i8; 8] = [-33, -31, -18, -14, 14, 18, 31, 33];

/// Cardinal steps followed by diagonal steps. Rooks use the first half,
/// bishops the second, queens and kings all eight.
const ROYAL_DELTAS: [i8; 8] = [-16, 16, -1, 1, 15, 17, -15, -17];

/// Return the direction table for a non-pawn piece kind.
fn deltas(kind: PieceKind) -> &'static [i8] {
    match kind {
        PieceKind::Rook => &ROYAL_DELTAS[..4],
        PieceKind::Bishop => &ROYAL_DELTAS[4..],
        PieceKind::Queen | PieceKind::King => &ROYAL_DELTAS,
        PieceKind::Knight => &KNIGHT_DELTAS,
        PieceKind::Pawn => &[],
    }
}

/// Consumer of generated moves.
pub trait MoveVisitor {
    /// Handle one generated move.
    ///
    /// `target` is the destination cell as it stood when the move was
    /// generated. Returning [`ControlFlow::Break`] stops the enumeration.
    fn visit(&mut self, board: &mut Board, mv: Move, target: Cell) -> ControlFlow<()>;
}

/// Enumerate every pseudo-legal move for `color`, in ascending origin-square order.
///
/// Returns `Break` if the visitor stopped the enumeration early.
pub fn visit_moves<V: MoveVisitor + ?Sized>(
    board: &mut Board,
    color: Color,
    visitor: &mut V,
) -> ControlFlow<()> {
    for source in Square::all() {
        let Some(piece) = board.piece_on(source) else {
            continue;
        };
        if piece.color() != color {
            continue;
        }
        match piece.kind() {
            PieceKind::Pawn => visit_pawn(board, source, color, visitor)?,
            kind if kind.slides() => visit_slider(board, source, deltas(kind), color, visitor)?,
            kind => visit_leaper(board, source, deltas(kind), color, visitor)?,
        }
    }
    ControlFlow::Continue(())
}

/// Return `true` if a piece of `color` may land on `target`: empty or enemy-occupied.
#[inline]
fn can_land(target: Cell, color: Color) -> bool {
    match target.color() {
        Some(occupant) => occupant != color,
        None => target.is_empty(),
    }
}

/// Growable list of generated moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return `true` if `mv` was generated.
    pub fn contains(&self, mv: Move) -> bool {
        self.moves.contains(&mv)
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl MoveVisitor for MoveList {
    fn visit(&mut self, _board: &mut Board, mv: Move, _target: Cell) -> ControlFlow<()> {
        self.push(mv);
        ControlFlow::Continue(())
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Collect every pseudo-legal move for `color`. The board is left unchanged.
pub fn generate_moves(board: &mut Board, color: Color) -> MoveList {
    let mut list = MoveList::new();
    let _ = visit_moves(board, color, &mut list);
    list
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use super::{MoveVisitor, generate_moves, visit_moves};
    use crate::board::Board;
    use crate::cell::Cell;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::square::Square;

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    fn mv(text: &str) -> Move {
        text.parse().unwrap()
    }

    #[test]
    fn starting_position_has_twenty_moves_each() {
        let mut board = Board::starting_position();
        assert_eq!(generate_moves(&mut board, Color::White).len(), 20);
        assert_eq!(generate_moves(&mut board, Color::Black).len(), 20);
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn enumeration_order_follows_origin_index() {
        let mut board = Board::starting_position();
        let moves = generate_moves(&mut board, Color::White);
        let origins: Vec<usize> = moves.as_slice().iter().map(|m| m.source().index()).collect();
        let mut sorted = origins.clone();
        sorted.sort_unstable();
        assert_eq!(origins, sorted);
        // Pawns on row 6 come before the knights on row 7.
        assert_eq!(moves.as_slice()[0], mv("A2A3"));
    }

    #[test]
    fn rook_ray_stops_at_first_piece() {
        let mut board = board("4k3/8/8/8/p7/8/8/R3K3 w - - 0 1");
        let moves = generate_moves(&mut board, Color::White);
        assert!(moves.contains(mv("A1A4")), "capture onto the enemy pawn");
        assert!(!moves.contains(mv("A1A5")), "ray must stop at the capture");
        assert!(moves.contains(mv("A1D1")));
        assert!(!moves.contains(mv("A1E1")), "own king blocks");
        assert!(!moves.contains(mv("A1F1")));
    }

    #[test]
    fn queen_combines_rook_and_bishop_rays() {
        let mut board = board("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1");
        let queen_moves = generate_moves(&mut board, Color::White)
            .as_slice()
            .iter()
            .filter(|m| m.source() == Square::D4)
            .count();
        assert_eq!(queen_moves, 27);
    }

    #[test]
    fn knight_in_corner() {
        let mut board = board("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
        let knight: Vec<Move> = generate_moves(&mut board, Color::White)
            .as_slice()
            .iter()
            .copied()
            .filter(|m| m.source() == Square::A1)
            .collect();
        assert_eq!(knight.len(), 2);
        assert!(knight.contains(&mv("A1B3")));
        assert!(knight.contains(&mv("A1C2")));
    }

    #[test]
    fn king_steps_once_in_eight_directions() {
        let mut board = board("4k3/8/8/8/3K4/8/8/8 w - - 0 1");
        assert_eq!(generate_moves(&mut board, Color::White).len(), 8);
    }

    #[test]
    fn king_may_step_into_attack() {
        // Pseudo-legal only: the white king may walk next to the black king.
        let mut board = board("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
        assert!(generate_moves(&mut board, Color::White).contains(mv("D3D4")));
    }

    struct StopAfter(usize);

    impl MoveVisitor for StopAfter {
        fn visit(&mut self, _board: &mut Board, _mv: Move, _target: Cell) -> ControlFlow<()> {
            self.0 -= 1;
            if self.0 == 0 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }
    }

    #[test]
    fn visitor_can_stop_enumeration() {
        let mut board = Board::starting_position();
        let mut visitor = StopAfter(3);
        assert_eq!(visit_moves(&mut board, Color::White, &mut visitor), ControlFlow::Break(()));
        assert_eq!(visitor.0, 0);
    }
}
