//! Property tests: searching never changes the position it searched.

use atomchess_core::{Board, Color, generate_moves};
use atomchess_engine::{SearchConfig, search, validate};
use proptest::prelude::*;
use proptest::sample::Index;

/// Play a random walk of pseudo-legal moves from the initial position.
///
/// Returns the reached board and the side to move. The walk stops early
/// once a king is gone.
fn random_walk(picks: &[Index]) -> (Board, Color) {
    let mut board = Board::starting_position();
    let mut color = Color::White;
    for pick in picks {
        if board.king_square(Color::White).is_none() || board.king_square(Color::Black).is_none() {
            break;
        }
        let moves = generate_moves(&mut board, color);
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[pick.index(moves.len())];
        board.apply_move(mv);
        color = color.flip();
    }
    (board, color)
}

fn shallow() -> SearchConfig {
    SearchConfig::default().with_search_depth(2).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// A full search restores every cell and the en passant target.
    #[test]
    fn prop_search_restores_board(picks in prop::collection::vec(any::<Index>(), 0..24)) {
        let (mut board, color) = random_walk(&picks);
        let before = board.clone();
        let result = search(&mut board, color, &shallow());
        prop_assert_eq!(&board, &before);
        if let Some(best) = result.best_move {
            prop_assert!(generate_moves(&mut board, color).contains(best));
        }
    }

    /// Validation accepts exactly the enumerated moves and never mutates.
    #[test]
    fn prop_validate_agrees_with_enumeration(
        picks in prop::collection::vec(any::<Index>(), 0..24),
        probe in any::<Index>(),
    ) {
        let (mut board, color) = random_walk(&picks);
        let before = board.clone();
        let moves = generate_moves(&mut board, color);
        prop_assume!(!moves.is_empty());
        let mv = moves.as_slice()[probe.index(moves.len())];
        prop_assert_eq!(validate(&mut board, mv, color, &SearchConfig::default()), 0);
        prop_assert_eq!(&board, &before);
    }

    /// A king capture available at the root is always the move chosen.
    #[test]
    fn prop_root_king_capture_dominates(picks in prop::collection::vec(any::<Index>(), 0..24)) {
        let (mut board, color) = random_walk(&picks);
        prop_assume!(board.king_square(color.flip()).is_some());
        let king = board.king_square(color.flip());
        let moves = generate_moves(&mut board, color);
        let captures_king = moves.as_slice().iter().any(|mv| Some(mv.dest()) == king);
        let result = search(&mut board, color, &shallow());
        prop_assert_eq!(result.king_capture, captures_king);
        if captures_king {
            prop_assert_eq!(result.best_move.map(|mv| mv.dest()), king);
            prop_assert_eq!(result.score, atomchess_engine::KING_CAPTURE_SCORE);
        }
    }
}
