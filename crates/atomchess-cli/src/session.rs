//! The interactive game loop: prompt, validate, apply, reply, redraw.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use atomchess_core::{Color, Move};
use atomchess_engine::{Game, GameError, SearchConfig};

use crate::command::{Command, parse_command};
use crate::error::CliError;

const PROMPT: &str = "\nYour move (e.g., D2D4 or 'quit' to exit): ";
const ILLEGAL_MOVE: &str = "Illegal move! Try again.";
const THINKING: &str = "\nComputer thinking...";
const FAREWELL: &str = "\nThanks for playing!";

const HELP: &str = "\
Commands:
  D2D4      move the piece on D2 to D4
  board     redraw the board
  depth N   set the computer's search depth (1-6)
  new       start a new game
  help      show this list
  q, quit   leave the game";

/// Who plays what, and how hard the computer thinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// The side entered from the keyboard; the computer plays the other.
    pub human: Color,
    /// Search settings for the computer.
    pub search: SearchConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            human: Color::White,
            search: SearchConfig::default(),
        }
    }
}

/// A human-versus-computer game over a line-oriented text stream.
pub struct Session<R, W> {
    input: R,
    output: W,
    game: Game,
    human: Color,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session starting from the initial position.
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self::with_game(input, output, Game::new(config.search), config.human)
    }

    /// Create a session continuing an existing game.
    pub fn with_game(input: R, output: W, game: Game, human: Color) -> Self {
        Self {
            input,
            output,
            game,
            human,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The output stream written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Play until the player quits or the input ends.
    pub fn run(&mut self) -> Result<(), CliError> {
        info!(human = %self.human, "session started");
        self.open_game()?;

        let mut buf = Vec::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("input closed");
                break;
            }
            writeln!(self.output)?;

            // Undecodable bytes become U+FFFD and fail to parse like any other typo.
            let line = String::from_utf8_lossy(&buf);

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(err) => {
                    warn!(error = %err, input = line.trim(), "unreadable input");
                    self.report_input_error(&err)?;
                    continue;
                }
            };
            debug!(?command, "parsed command");

            match command {
                Command::Quit => break,
                Command::Empty => {}
                Command::Board => self.draw_board()?,
                Command::Help => writeln!(self.output, "{HELP}")?,
                Command::New => {
                    self.game.reset();
                    writeln!(self.output, "New game.")?;
                    self.open_game()?;
                }
                Command::Depth(depth) => match self.game.set_search_depth(depth) {
                    Ok(()) => writeln!(self.output, "Search depth set to {depth}.")?,
                    Err(err) => writeln!(self.output, "{err}")?,
                },
                Command::Move(mv) => self.human_turn(mv)?,
            }
        }

        writeln!(self.output, "{FAREWELL}")?;
        self.output.flush()?;
        info!("session finished");
        Ok(())
    }

    /// Draw the board, letting the computer open when it plays White.
    fn open_game(&mut self) -> Result<(), CliError> {
        if self.human == Color::Black {
            self.computer_turn()?;
        } else {
            self.draw_board()?;
        }
        Ok(())
    }

    fn human_turn(&mut self, mv: Move) -> Result<(), CliError> {
        match self.game.play(mv, self.human) {
            Ok(_) => {}
            Err(GameError::IllegalMove { mv }) => {
                debug!(%mv, "rejected human move");
                writeln!(self.output, "{ILLEGAL_MOVE}")?;
                return Ok(());
            }
            Err(GameError::GameOver { winner }) => {
                writeln!(
                    self.output,
                    "The game is over, {winner} captured the king. Type NEW to play again."
                )?;
                return Ok(());
            }
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(());
            }
        }

        self.draw_board()?;
        if self.announce_outcome()? {
            return Ok(());
        }
        self.computer_turn()
    }

    fn computer_turn(&mut self) -> Result<(), CliError> {
        write!(self.output, "{THINKING}")?;
        self.output.flush()?;

        match self.game.computer_move(!self.human) {
            Ok(Some(played)) => writeln!(self.output, "{played}")?,
            Ok(None) => writeln!(self.output)?,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(());
            }
        }
        self.draw_board()?;
        self.announce_outcome()?;
        Ok(())
    }

    /// Print the result if a king has fallen. Returns whether the game is over.
    fn announce_outcome(&mut self) -> Result<bool, CliError> {
        let Some(outcome) = self.game.outcome() else {
            return Ok(false);
        };
        let verdict = if outcome.winner() == self.human {
            "You win!"
        } else {
            "Computer wins."
        };
        writeln!(self.output, "\nGame over: {outcome}. {verdict}")?;
        Ok(true)
    }

    fn draw_board(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "{}", self.game.board().pretty())?;
        Ok(())
    }

    fn report_input_error(&mut self, err: &CliError) -> Result<(), CliError> {
        match err {
            CliError::InvalidMove { .. } => writeln!(self.output, "{ILLEGAL_MOVE}")?,
            CliError::InvalidDepth { .. } => writeln!(self.output, "Usage: depth N (1-6)")?,
            CliError::UnknownCommand { input } => writeln!(
                self.output,
                "Unknown command: {input}. Type HELP for a list of commands."
            )?,
            other => writeln!(self.output, "{other}")?,
        }
        Ok(())
    }
}
