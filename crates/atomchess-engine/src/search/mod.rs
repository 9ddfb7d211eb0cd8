//! Move search: legality validation and best-move selection.

pub mod negamax;

use atomchess_core::{Board, Color, Move};
use tracing::debug;

use crate::config::SearchConfig;
use negamax::{SearchContext, SearchMode, search_node};

pub use negamax::{ILLEGAL_MOVE_SCORE, KING_CAPTURE_SCORE, LEGAL_MOVE_SCORE, MIN_SCORE};

/// Result of a best-move search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root move, or `None` when the side to move has no moves.
    pub best_move: Option<Move>,
    /// Score of the root position from the searching side's point of view.
    pub score: i32,
    /// Moves visited during the search.
    pub nodes: u64,
    /// Whether the best move captures the enemy king.
    pub king_capture: bool,
}

/// Check `mv` against the pseudo-legal moves of `color`.
///
/// Returns [`LEGAL_MOVE_SCORE`] when the move is enumerated and
/// [`ILLEGAL_MOVE_SCORE`] otherwise. The board is left unchanged.
pub fn validate(board: &mut Board, mv: Move, color: Color, config: &SearchConfig) -> i32 {
    let mut ctx = SearchContext::new(
        SearchMode::Probe(mv),
        config.validation_depth,
        config.mate_horizon,
    );
    let score = search_node(board, color, 0, &mut ctx);
    debug!(%mv, %color, score, "validated move");
    score
}

/// Run a full-width search for `color` and report the best root move.
///
/// The board is left unchanged; applying the move is up to the caller.
pub fn search(board: &mut Board, color: Color, config: &SearchConfig) -> SearchResult {
    let mut ctx = SearchContext::new(SearchMode::Best, config.search_depth, config.mate_horizon);
    let score = search_node(board, color, 0, &mut ctx);
    let result = SearchResult {
        best_move: ctx.best_move,
        score,
        nodes: ctx.nodes,
        king_capture: ctx.king_capture,
    };
    debug!(
        %color,
        depth = config.search_depth,
        score,
        nodes = result.nodes,
        best = ?result.best_move,
        "search finished"
    );
    result
}

#[cfg(test)]
mod tests {
    use atomchess_core::{Board, Color, Move, generate_moves};

    use super::*;

    #[test]
    fn validate_matches_the_enumerator() {
        let config = SearchConfig::default();
        let mut board = Board::starting_position();
        let moves = generate_moves(&mut board, Color::White);
        for mv in moves.as_slice() {
            assert_eq!(validate(&mut board, *mv, Color::White, &config), LEGAL_MOVE_SCORE);
        }
        let black_move: Move = "E7E5".parse().unwrap();
        assert_eq!(validate(&mut board, black_move, Color::White, &config), ILLEGAL_MOVE_SCORE);
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn validation_ignores_available_king_captures() {
        // White could take the king on e8, yet a quiet king move is still legal.
        let mut board: Board = "4k3/8/8/8/8/8/8/4R1K1 w - - 0 1".parse().unwrap();
        let config = SearchConfig::default();
        assert_eq!(
            validate(&mut board, "G1H1".parse().unwrap(), Color::White, &config),
            LEGAL_MOVE_SCORE
        );
        assert_eq!(
            validate(&mut board, "G1G3".parse().unwrap(), Color::White, &config),
            ILLEGAL_MOVE_SCORE
        );
    }

    #[test]
    fn search_leaves_the_board_untouched() {
        let mut board = Board::starting_position();
        let result = search(&mut board, Color::Black, &SearchConfig::default());
        assert_eq!(board, Board::starting_position());
        let best = result.best_move.unwrap();
        assert!(generate_moves(&mut board, Color::Black).contains(best));
        assert!(!result.king_capture);
        assert!(result.nodes > 20 * 20 * 20);
    }

    #[test]
    fn search_reports_king_capture() {
        let mut board: Board = "4k3/8/8/8/8/8/8/4R1K1 w - - 0 1".parse().unwrap();
        let result = search(&mut board, Color::White, &SearchConfig::default());
        assert_eq!(result.best_move, Some("E1E8".parse().unwrap()));
        assert_eq!(result.score, KING_CAPTURE_SCORE);
        assert!(result.king_capture);
    }
}
