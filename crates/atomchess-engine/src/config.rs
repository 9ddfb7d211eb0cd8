//! Search depth settings.

use crate::error::GameError;

/// Deepest computer search accepted by [`SearchConfig::with_search_depth`].
pub const MAX_SEARCH_DEPTH: u8 = 6;

/// Depth limits for the two search modes, in plies.
///
/// A node at ply `p` recurses into replies while `p < limit`, so a limit of
/// 3 scores four plies of moves: the root move and three replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Depth limit while validating a human move.
    pub validation_depth: u8,
    /// Depth limit of the computer's search.
    pub search_depth: u8,
    /// King captures found at a ply deeper than this score double.
    pub mate_horizon: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            validation_depth: 1,
            search_depth: 3,
            mate_horizon: 2,
        }
    }
}

impl SearchConfig {
    /// Return a copy with the computer's depth limit replaced.
    pub fn with_search_depth(self, depth: u8) -> Result<Self, GameError> {
        if !(1..=MAX_SEARCH_DEPTH).contains(&depth) {
            return Err(GameError::DepthOutOfRange {
                depth,
                max: MAX_SEARCH_DEPTH,
            });
        }
        Ok(Self {
            search_depth: depth,
            ..self
        })
    }
}
