//! Parsing of interactive input lines.

use derive_more::{Display, Error};
use std::str::FromStr;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place at a board index (0-8), entered as `1`-`9`.
    Place(usize),
    /// Start over.
    Reset,
    /// Print the help text.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unrecognized input {:?} (type `h` for help)", input)]
pub struct CommandError {
    /// The rejected input, trimmed.
    pub input: String,
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  1-9   place your mark (cells are numbered left to right, top to bottom)
  r     reset the game
  h     show this help
  q     quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        match input.to_ascii_lowercase().as_str() {
            "r" | "reset" => Ok(Command::Reset),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => match other.parse::<usize>() {
                // Out-of-range numbers still reach the game, which ignores them.
                Ok(cell) if cell >= 1 => Ok(Command::Place(cell - 1)),
                _ => Err(CommandError {
                    input: input.to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!("1".parse::<Command>(), Ok(Command::Place(0)));
        assert_eq!(" 9 ".parse::<Command>(), Ok(Command::Place(8)));
        assert_eq!("12".parse::<Command>(), Ok(Command::Place(11)));
    }

    #[test]
    fn test_words() {
        assert_eq!("R".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("0".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
        let err = "x marks".parse::<Command>().unwrap_err();
        assert_eq!(err.input, "x marks");
    }
}
