//! Session errors.

use atomchess_core::MoveParseError;
use atomchess_engine::GameError;

/// Errors that can occur while running an interactive session.
///
/// Input errors are reported to the player and the session carries on;
/// only [`CliError::Io`] ends it.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A four-character move could not be read as two squares.
    #[error("invalid move: {source}")]
    InvalidMove {
        /// The underlying parse failure.
        #[from]
        source: MoveParseError,
    },

    /// The argument of `depth` is missing or not a number.
    #[error("invalid depth: {value:?}")]
    InvalidDepth {
        /// The text given as the depth.
        value: String,
    },

    /// The line is not a move or a known command.
    #[error("unknown command: {input}")]
    UnknownCommand {
        /// The first word of the line.
        input: String,
    },

    /// The game rejected the request.
    #[error(transparent)]
    Game(#[from] GameError),

    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
