use crate::ui::command::ParseError;
use rustyline::error::ReadlineError;
use std::fmt::{Display, Formatter};

/// Position of a value in a one-shot invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    First,
    Second,
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::First => f.write_str("first"),
            Position::Second => f.write_str("second"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // --------------------------------- user input errors -----------------------------------------
    #[error("Invalid {0} number")]
    InvalidNumber(Position, #[source] ParseError),
    #[error("Invalid number of arguments")]
    ArgumentCount(usize),

    // --------------------------------- terminal errors -------------------------------------------
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
}
