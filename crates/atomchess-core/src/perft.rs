//! Perft: node counts of the pseudo-legal move tree.
//!
//! Walks the same tree the search walks: the enumerator plus the reversible
//! search primitive, so en passant targets stay as they were at the root and
//! no promotion or castling side effects run below it.

use std::ops::ControlFlow;

use crate::board::Board;
use crate::cell::Cell;
use crate::chess_move::Move;
use crate::color::Color;
use crate::movegen::{MoveVisitor, generate_moves, visit_moves};

/// Counts leaves below each visited move.
struct PerftCounter {
    color: Color,
    depth: usize,
    nodes: u64,
}

impl MoveVisitor for PerftCounter {
    fn visit(&mut self, board: &mut Board, mv: Move, _target: Cell) -> ControlFlow<()> {
        if self.depth == 1 {
            self.nodes += 1;
        } else {
            let undo = board.make_search_move(mv);
            self.nodes += perft(board, self.color.flip(), self.depth - 1);
            board.unmake_search_move(undo);
        }
        ControlFlow::Continue(())
    }
}

/// Count the number of leaf nodes at the given depth for `color` to move.
///
/// Depth 0 returns 1 (the current position). The board is restored before returning.
pub fn perft(board: &mut Board, color: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut counter = PerftCounter {
        color,
        depth,
        nodes: 0,
    };
    let _ = visit_moves(board, color, &mut counter);
    counter.nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs sorted by coordinate text.
pub fn divide(board: &mut Board, color: Color, depth: usize) -> Vec<(String, u64)> {
    let moves = generate_moves(board, color);
    let mut results: Vec<(String, u64)> = moves
        .as_slice()
        .iter()
        .map(|&mv| {
            let undo = board.make_search_move(mv);
            let count = perft(board, color.flip(), depth.saturating_sub(1));
            board.unmake_search_move(undo);
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
