//! Session command parsing.

use atomchess_core::Move;

use crate::error::CliError;

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `D2D4` -- play a move.
    Move(Move),
    /// `board` -- redraw the board.
    Board,
    /// `depth N` -- change the computer's search depth.
    Depth(u8),
    /// `new` -- start over from the initial position.
    New,
    /// `help` -- list the commands.
    Help,
    /// `q` / `quit` -- leave the session.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse a single line of input into a [`Command`]. Case is ignored.
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(Command::Empty);
    };

    match first.to_ascii_uppercase().as_str() {
        "Q" | "QUIT" => Ok(Command::Quit),
        "BOARD" => Ok(Command::Board),
        "NEW" => Ok(Command::New),
        "HELP" | "?" => Ok(Command::Help),
        "DEPTH" => parse_depth(tokens.next()),
        _ if first.len() == 4 => Ok(Command::Move(first.parse()?)),
        _ => Err(CliError::UnknownCommand {
            input: first.to_string(),
        }),
    }
}

fn parse_depth(token: Option<&str>) -> Result<Command, CliError> {
    let value = token.unwrap_or_default();
    value
        .parse()
        .map(Command::Depth)
        .map_err(|_| CliError::InvalidDepth {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use atomchess_core::Square;

    use super::*;

    #[test]
    fn parse_move() {
        let cmd = parse_command("D2D4").unwrap();
        assert_eq!(cmd, Command::Move(Move::new(Square::D2, Square::D4)));
    }

    #[test]
    fn parse_move_lowercase_with_whitespace() {
        let cmd = parse_command("  e7e5 \n").unwrap();
        assert_eq!(cmd, Command::Move(Move::new(Square::E7, Square::E5)));
    }

    #[test]
    fn parse_quit() {
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
        assert_eq!(parse_command("Q").unwrap(), Command::Quit);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("board").unwrap(), Command::Board);
        assert_eq!(parse_command("NEW").unwrap(), Command::New);
        assert_eq!(parse_command("Help").unwrap(), Command::Help);
        assert_eq!(parse_command("").unwrap(), Command::Empty);
        assert_eq!(parse_command("   ").unwrap(), Command::Empty);
    }

    #[test]
    fn parse_depth() {
        assert_eq!(parse_command("depth 4").unwrap(), Command::Depth(4));
        assert!(matches!(
            parse_command("depth"),
            Err(CliError::InvalidDepth { value }) if value.is_empty()
        ));
        assert!(matches!(
            parse_command("depth deep"),
            Err(CliError::InvalidDepth { value }) if value == "deep"
        ));
    }

    #[test]
    fn parse_bad_squares() {
        assert!(matches!(
            parse_command("Z9A1"),
            Err(CliError::InvalidMove { .. })
        ));
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!(
            parse_command("castle now"),
            Err(CliError::UnknownCommand { input }) if input == "castle"
        ));
    }
}
