//! Interactive commands.
//!
//! A line typed at the first-value prompt is either a command (help, quit) or a number.
//! Commands are recognized by the first character of the line only.

pub mod parser;

pub use parser::{parse_number, ParseError};

pub const HELP_COMMAND_SHORT: char = 'h';
pub const QUIT_COMMAND_SHORT: char = 'q';

pub type CommandResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Value(f64),
}

impl Command {
    pub fn parse(input: &str) -> CommandResult<Command> {
        match input.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some(QUIT_COMMAND_SHORT) => Ok(Command::Quit),
            Some(HELP_COMMAND_SHORT) => Ok(Command::Help),
            _ => parse_number(input).map(Command::Value),
        }
    }
}
