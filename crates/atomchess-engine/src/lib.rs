//! Search and game flow for atomchess.

pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;

pub use config::{MAX_SEARCH_DEPTH, SearchConfig};
pub use error::GameError;
pub use game::{ComputerMove, Game, Outcome};
pub use search::{
    ILLEGAL_MOVE_SCORE, KING_CAPTURE_SCORE, LEGAL_MOVE_SCORE, MIN_SCORE, SearchResult, search,
    validate,
};
