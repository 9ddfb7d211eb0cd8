//! The game context: one board, its search settings, and the result so far.

use std::fmt;

use atomchess_core::{AppliedMove, Board, Color, Move};
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::error::GameError;
use crate::eval::material;
use crate::search::{self, LEGAL_MOVE_SCORE, SearchResult};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `winner` captured the opposing king.
    KingCaptured {
        /// The capturing side.
        winner: Color,
    },
}

impl Outcome {
    /// The side that won.
    pub fn winner(self) -> Color {
        match self {
            Outcome::KingCaptured { winner } => winner,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::KingCaptured { winner } => write!(f, "{winner} captured the king"),
        }
    }
}

/// A move chosen and played by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    /// The move as executed, with its special-rule effects.
    pub applied: AppliedMove,
    /// Search statistics behind the choice.
    pub search: SearchResult,
}

impl ComputerMove {
    /// The coordinates of the move.
    pub fn mv(&self) -> Move {
        self.applied.mv
    }
}

impl fmt::Display for ComputerMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.applied.mv, f)
    }
}

/// Owns the board for one game and every operation that touches it.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    config: SearchConfig,
    outcome: Option<Outcome>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Game {
    /// Start a game from the standard initial position.
    pub fn new(config: SearchConfig) -> Self {
        Self::from_board(Board::starting_position(), config)
    }

    /// Start a game from an arbitrary position.
    pub fn from_board(board: Board, config: SearchConfig) -> Self {
        let mut game = Self {
            board,
            config,
            outcome: None,
        };
        game.update_outcome();
        game
    }

    /// Put the pieces back in their initial arrangement.
    pub fn reset(&mut self) {
        self.board = Board::starting_position();
        self.outcome = None;
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Active search settings.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Change the depth of the computer's search.
    pub fn set_search_depth(&mut self, depth: u8) -> Result<(), GameError> {
        self.config = self.config.with_search_depth(depth)?;
        info!(depth, "search depth changed");
        Ok(())
    }

    /// The result, once a king has been captured.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Material balance from `color`'s point of view.
    pub fn material(&self, color: Color) -> i32 {
        material(&self.board, color)
    }

    /// Legality score of `mv` for `color`: [`LEGAL_MOVE_SCORE`] or
    /// [`ILLEGAL_MOVE_SCORE`](crate::ILLEGAL_MOVE_SCORE).
    pub fn validate(&mut self, mv: Move, color: Color) -> i32 {
        search::validate(&mut self.board, mv, color, &self.config)
    }

    /// Whether `mv` is among the pseudo-legal moves of `color`.
    pub fn is_legal(&mut self, mv: Move, color: Color) -> bool {
        self.validate(mv, color) == LEGAL_MOVE_SCORE
    }

    /// Execute `mv` with all special rules. Legality is not checked.
    pub fn apply_move(&mut self, mv: Move) -> AppliedMove {
        let applied = self.board.apply_move(mv);
        debug!(%mv, kind = ?applied.kind, captured = ?applied.captured, "move applied");
        self.update_outcome();
        applied
    }

    /// Validate and then apply a move for `color`.
    pub fn play(&mut self, mv: Move, color: Color) -> Result<AppliedMove, GameError> {
        if let Some(outcome) = self.outcome {
            return Err(GameError::GameOver {
                winner: outcome.winner(),
            });
        }
        if !self.is_legal(mv, color) {
            return Err(GameError::IllegalMove { mv });
        }
        Ok(self.apply_move(mv))
    }

    /// Search for `color`, apply the best move found, and report it.
    ///
    /// Returns `Ok(None)` when `color` has no moves; the turn passes silently.
    pub fn computer_move(&mut self, color: Color) -> Result<Option<ComputerMove>, GameError> {
        if let Some(outcome) = self.outcome {
            return Err(GameError::GameOver {
                winner: outcome.winner(),
            });
        }
        let result = search::search(&mut self.board, color, &self.config);
        let Some(mv) = result.best_move else {
            info!(%color, "no moves available, passing");
            return Ok(None);
        };
        let applied = self.apply_move(mv);
        info!(%mv, %color, score = result.score, material = self.material(color), "computer moved");
        Ok(Some(ComputerMove {
            applied,
            search: result,
        }))
    }

    fn update_outcome(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        for color in Color::ALL {
            if self.board.king_square(color).is_none() {
                let outcome = Outcome::KingCaptured {
                    winner: color.flip(),
                };
                info!(%outcome, "game over");
                self.outcome = Some(outcome);
                return;
            }
        }
    }
}
