//! Translation of typed lines into session commands.
//!
//! A line may name one square (`e2` or `1,4`), which acts as a click, or two
//! squares (`e2 e4`, `e2e4`), which act as two clicks in a row.

use hotseat_core::{ParseSquareError, Square};
use hotseat_engine::InputEvent;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error(transparent)]
    Square(#[from] ParseSquareError),

    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),
}

/// A command typed by a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Events to feed to the session, in order.
    Events(Vec<InputEvent>),
    Deselect,
    Restart,
    Help,
}

pub const HELP: &str = "\
Commands:
  e2 | 1,4       click a square (select a piece, or move the selected piece there)
  e2 e4 | e2e4   move in one line
  cancel         drop the current selection
  new            start a new game
  help           show this text
  quit           leave";

/// Parses one input line.
pub fn parse_line(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => return Ok(Command::Events(vec![InputEvent::Tick])),
        "q" | "quit" | "exit" => return Ok(Command::Events(vec![InputEvent::Quit])),
        "x" | "cancel" => return Ok(Command::Deselect),
        "new" | "restart" => return Ok(Command::Restart),
        "h" | "?" | "help" => return Ok(Command::Help),
        _ => {}
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    let squares: Vec<Square> = match words.as_slice() {
        [one] if one.len() == 4 && one.is_ascii() && !one.contains(',') => {
            let (from, to) = one.split_at(2);
            vec![from.parse()?, to.parse()?]
        }
        [one] => vec![one.parse()?],
        [from, to] => vec![from.parse()?, to.parse()?],
        _ => return Err(InputError::Unknown(line.to_string())),
    };

    Ok(Command::Events(
        squares.into_iter().map(InputEvent::Click).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(s: &str) -> InputEvent {
        InputEvent::Click(Square::from_algebraic(s).unwrap())
    }

    #[test]
    fn single_square() {
        assert_eq!(parse_line("e2"), Ok(Command::Events(vec![click("e2")])));
        assert_eq!(parse_line(" 1,4 "), Ok(Command::Events(vec![click("e2")])));
    }

    #[test]
    fn two_squares() {
        let expected = Ok(Command::Events(vec![click("e2"), click("e4")]));
        assert_eq!(parse_line("e2 e4"), expected);
        assert_eq!(parse_line("e2e4"), expected);
        assert_eq!(parse_line("1,4 3,4"), expected);
    }

    #[test]
    fn keywords() {
        assert_eq!(parse_line("QUIT"), Ok(Command::Events(vec![InputEvent::Quit])));
        assert_eq!(parse_line(""), Ok(Command::Events(vec![InputEvent::Tick])));
        assert_eq!(parse_line("cancel"), Ok(Command::Deselect));
        assert_eq!(parse_line("new"), Ok(Command::Restart));
        assert_eq!(parse_line("help"), Ok(Command::Help));
    }

    #[test]
    fn errors() {
        assert!(matches!(parse_line("e9"), Err(InputError::Square(_))));
        assert!(matches!(parse_line("resign now please"), Err(InputError::Unknown(_))));
        assert!(matches!(parse_line("castle"), Err(InputError::Square(_))));
        assert!(matches!(parse_line("aé4"), Err(InputError::Square(_))));
        assert!(matches!(parse_line("é2e4"), Err(InputError::Square(_))));
    }
}
