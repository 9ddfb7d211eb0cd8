//! Exhaustive negamax over pseudo-legal moves, driven by move visitors.
//!
//! One recursive routine serves both search modes. The mode only changes the
//! visitor installed at the root: a [`LegalityProbe`] that watches for one
//! candidate move, or a [`NegamaxNode`] that scores every move.

use std::ops::ControlFlow;

use atomchess_core::{Board, Cell, Color, Move, MoveVisitor, PieceKind, visit_moves};
use tracing::trace;

use crate::eval::capture_value;

/// Score of a node with no moves at all, and the initial best score.
pub const MIN_SCORE: i32 = -32_768;

/// Score of a node whose side to move can capture the enemy king.
pub const KING_CAPTURE_SCORE: i32 = 78;

/// Returned by the legality probe when the candidate is not enumerated.
pub const ILLEGAL_MOVE_SCORE: i32 = -127;

/// Returned by the legality probe when the candidate is enumerated.
pub const LEGAL_MOVE_SCORE: i32 = 0;

/// What a top-level search is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchMode {
    /// Check whether the given move is generated for the side to move.
    Probe(Move),
    /// Score every move and record the best one at the root.
    Best,
}

/// Per-invocation state, reset at each top-level call.
#[derive(Debug)]
pub(crate) struct SearchContext {
    pub(crate) mode: SearchMode,
    pub(crate) depth_limit: u8,
    pub(crate) mate_horizon: u8,
    pub(crate) nodes: u64,
    pub(crate) best_move: Option<Move>,
    pub(crate) king_capture: bool,
}

impl SearchContext {
    pub(crate) fn new(mode: SearchMode, depth_limit: u8, mate_horizon: u8) -> Self {
        Self {
            mode,
            depth_limit,
            mate_horizon,
            nodes: 0,
            best_move: None,
            king_capture: false,
        }
    }

    fn king_capture_score(&self, ply: u8) -> i32 {
        if ply > self.mate_horizon {
            KING_CAPTURE_SCORE * 2
        } else {
            KING_CAPTURE_SCORE
        }
    }
}

/// Search the position for `color` at `ply` and return its score from
/// `color`'s point of view.
///
/// The board is mutated while the search runs and restored before return.
pub(crate) fn search_node(board: &mut Board, color: Color, ply: u8, ctx: &mut SearchContext) -> i32 {
    let mode = ctx.mode;
    match mode {
        SearchMode::Probe(candidate) if ply == 0 => {
            let mut probe = LegalityProbe {
                candidate,
                found: false,
            };
            let _ = visit_moves(board, color, &mut probe);
            ctx.nodes += 1;
            if probe.found {
                LEGAL_MOVE_SCORE
            } else {
                ILLEGAL_MOVE_SCORE
            }
        }
        _ => {
            let mut node = NegamaxNode {
                ctx,
                color,
                ply,
                best: MIN_SCORE,
            };
            let _ = visit_moves(board, color, &mut node);
            node.best
        }
    }
}

/// Stops the enumeration at the first move equal to the candidate.
struct LegalityProbe {
    candidate: Move,
    found: bool,
}

impl MoveVisitor for LegalityProbe {
    fn visit(&mut self, _board: &mut Board, mv: Move, _target: Cell) -> ControlFlow<()> {
        if mv == self.candidate {
            self.found = true;
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}

/// Scores each move as captured material minus the opponent's best reply.
struct NegamaxNode<'a> {
    ctx: &'a mut SearchContext,
    color: Color,
    ply: u8,
    best: i32,
}

impl NegamaxNode<'_> {
    fn record_root(&mut self, mv: Move, score: i32) {
        if self.ply == 0 {
            self.ctx.best_move = Some(mv);
            trace!(%mv, score, "new best root move");
        }
    }
}

impl MoveVisitor for NegamaxNode<'_> {
    fn visit(&mut self, board: &mut Board, mv: Move, target: Cell) -> ControlFlow<()> {
        self.ctx.nodes += 1;

        // Nothing outranks taking the king; the rest of this node is skipped.
        if target.kind() == Some(PieceKind::King) {
            self.best = self.ctx.king_capture_score(self.ply);
            if self.ply == 0 {
                self.ctx.king_capture = true;
            }
            self.record_root(mv, self.best);
            return ControlFlow::Break(());
        }

        let mut score = capture_value(target);
        let undo = board.make_search_move(mv);
        if self.ply < self.ctx.depth_limit {
            score -= search_node(board, self.color.flip(), self.ply + 1, self.ctx);
        }
        board.unmake_search_move(undo);

        // Strictly greater: the first of equally scored moves is kept.
        if score > self.best {
            self.best = score;
            self.record_root(mv, score);
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use atomchess_core::{Board, Color, Move, Piece, Square};

    use super::*;

    fn best(fen: &str, color: Color, depth: u8) -> (i32, SearchContext, Board) {
        let mut board: Board = fen.parse().unwrap();
        let before = board.clone();
        let mut ctx = SearchContext::new(SearchMode::Best, depth, 2);
        let score = search_node(&mut board, color, 0, &mut ctx);
        assert_eq!(board, before, "search must restore the board");
        (score, ctx, board)
    }

    #[test]
    fn probe_accepts_enumerated_moves_only() {
        let mut board = Board::starting_position();
        let legal: Move = "G1F3".parse().unwrap();
        let illegal: Move = "G1G3".parse().unwrap();

        let mut ctx = SearchContext::new(SearchMode::Probe(legal), 1, 2);
        assert_eq!(search_node(&mut board, Color::White, 0, &mut ctx), LEGAL_MOVE_SCORE);
        let mut ctx = SearchContext::new(SearchMode::Probe(illegal), 1, 2);
        assert_eq!(search_node(&mut board, Color::White, 0, &mut ctx), ILLEGAL_MOVE_SCORE);
        assert!(ctx.best_move.is_none());
    }

    #[test]
    fn king_capture_at_root_wins_outright() {
        // The pawn could take the queen, but the rook takes the king.
        let (score, ctx, _) = best("4k3/8/1p6/Q7/8/8/8/4K2r b - - 0 1", Color::Black, 3);
        assert_eq!(score, KING_CAPTURE_SCORE);
        assert!(ctx.king_capture);
        assert_eq!(ctx.best_move, Some(Move::new(Square::H1, Square::E1)));
    }

    #[test]
    fn deep_king_capture_scores_double() {
        let ctx = SearchContext::new(SearchMode::Best, 6, 2);
        assert_eq!(ctx.king_capture_score(0), KING_CAPTURE_SCORE);
        assert_eq!(ctx.king_capture_score(2), KING_CAPTURE_SCORE);
        assert_eq!(ctx.king_capture_score(3), 2 * KING_CAPTURE_SCORE);
    }

    /// White's king is walled in by its own pawns and only the a-pawn can move.
    /// Black's only pieces with moves are a knight two hops from the king.
    fn knight_reaches_king_on_third_reply() -> Board {
        let mut board = Board::empty();
        let place = |board: &mut Board, sq: Square, piece: Piece| board.set(sq.index() as i32, Some(piece));
        place(&mut board, Square::H8, Piece::WHITE_KING);
        place(&mut board, Square::G8, Piece::WHITE_PAWN);
        place(&mut board, Square::G7, Piece::WHITE_PAWN);
        place(&mut board, Square::H7, Piece::WHITE_PAWN);
        place(&mut board, Square::A3, Piece::WHITE_PAWN);
        place(&mut board, Square::A1, Piece::BLACK_KING);
        place(&mut board, Square::A2, Piece::BLACK_PAWN);
        place(&mut board, Square::B1, Piece::BLACK_PAWN);
        place(&mut board, Square::B2, Piece::BLACK_PAWN);
        place(&mut board, Square::E5, Piece::BLACK_KNIGHT);
        board
    }

    #[test]
    fn king_capture_past_horizon_propagates_doubled() {
        // A3A4, knight to F7 or G6, A4A5, knight takes H8 at ply 3.
        let mut board = knight_reaches_king_on_third_reply();
        let before = board.clone();
        let mut ctx = SearchContext::new(SearchMode::Best, 3, 2);
        let score = search_node(&mut board, Color::White, 0, &mut ctx);
        assert_eq!(score, -2 * KING_CAPTURE_SCORE);
        assert_eq!(ctx.best_move, Some(Move::new(Square::A3, Square::A4)));
        assert!(!ctx.king_capture);
        assert_eq!(board, before);
    }

    #[test]
    fn king_capture_inside_horizon_is_not_doubled() {
        let mut board = knight_reaches_king_on_third_reply();
        let mut ctx = SearchContext::new(SearchMode::Best, 3, 3);
        assert_eq!(search_node(&mut board, Color::White, 0, &mut ctx), -KING_CAPTURE_SCORE);
    }

    #[test]
    fn leaf_search_takes_the_biggest_capture() {
        // Depth limit 0: the root is a leaf and scores raw captured material.
        let (score, ctx, _) = best("4k3/8/8/2r1q3/3P4/8/8/4K3 w - - 0 1", Color::White, 0);
        assert_eq!(score, 9);
        assert_eq!(ctx.best_move, Some(Move::new(Square::D4, Square::E5)));
    }

    #[test]
    fn wins_an_undefended_queen() {
        let (score, ctx, _) = best("4k3/8/8/8/8/2n5/8/1Q2K3 b - - 0 1", Color::Black, 3);
        assert_eq!(ctx.best_move, Some(Move::new(Square::C3, Square::B1)));
        assert_eq!(score, 9);
        assert!(!ctx.king_capture);
    }

    #[test]
    fn side_without_moves_scores_minimum() {
        let mut board = Board::empty();
        board.set(Square::E1.index() as i32, Some(Piece::WHITE_KING));
        let mut ctx = SearchContext::new(SearchMode::Best, 3, 2);
        assert_eq!(search_node(&mut board, Color::Black, 0, &mut ctx), MIN_SCORE);
        assert_eq!(ctx.best_move, None);
        assert_eq!(ctx.nodes, 0);
    }

    #[test]
    fn counts_visited_nodes() {
        let (_, ctx, _) = best("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1", Color::White, 1);
        assert_eq!(ctx.nodes, 20 + 400);
    }
}
