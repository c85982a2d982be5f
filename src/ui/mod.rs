pub mod command;
pub mod config;
pub mod console;

use crate::error::{Error, Position};
use command::{parse_number, ParseError};
use std::ffi::{OsStr, OsString};

pub const HELP_FLAG_SHORT: &str = "-h";
pub const HELP_FLAG: &str = "--help";

/// What to do with the positional arguments of a program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode<'a> {
    Interactive,
    Help,
    OneShot(&'a OsStr, &'a OsStr),
    /// Wrong argument count.
    Invalid(usize),
}

impl<'a> Mode<'a> {
    pub fn from_args(args: &'a [OsString]) -> Self {
        match args {
            [] => Mode::Interactive,
            [flag] if flag == HELP_FLAG_SHORT || flag == HELP_FLAG => Mode::Help,
            [first, second] => Mode::OneShot(first, second),
            _ => Mode::Invalid(args.len()),
        }
    }
}

/// Parse values of a one-shot invocation, the first value is checked first.
pub fn parse_pair(first: &OsStr, second: &OsStr) -> Result<(f64, f64), Error> {
    let val1 = parse_arg(first).map_err(|e| Error::InvalidNumber(Position::First, e))?;
    let val2 = parse_arg(second).map_err(|e| Error::InvalidNumber(Position::Second, e))?;
    Ok((val1, val2))
}

fn parse_arg(token: &OsStr) -> Result<f64, ParseError> {
    match token.to_str() {
        Some(token) => parse_number(token),
        None => Err(ParseError::Malformed(token.to_string_lossy().into_owned())),
    }
}
