//! Game-level errors.

use atomchess_core::{Color, Move};

/// Errors returned by [`Game`](crate::Game) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The move is not among the pseudo-legal moves of the side to play.
    #[error("illegal move: {mv}")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
    },

    /// A king has been captured; no further moves are played.
    #[error("game over: {winner} captured the king")]
    GameOver {
        /// The side that captured the opposing king.
        winner: Color,
    },

    /// A requested search depth is outside the supported range.
    #[error("search depth {depth} out of range 1..={max}")]
    DepthOutOfRange {
        /// The requested depth.
        depth: u8,
        /// The largest accepted depth.
        max: u8,
    },
}
