//! Interactive session: prompts for pairs of values until the user quits or the input ends.
use crate::calculator::calculate;
use crate::ui::command::{parse_number, Command, ParseError};
use crate::ui::config::UIConfig;
use crate::ui::console::editor::{create_editor, EditorSource};
use crate::ui::console::help::{HELP, WELCOME_TEXT};
use crate::ui::console::input::{LineSource, StreamSource};
use crate::ui::console::print::Printer;
use crate::Error;
use log::debug;
use std::io::{self, Stdout, Write};

pub mod editor;
pub mod help;
pub mod input;
pub mod print;

const FIRST_VALUE_PROMPT: &str = "First value: ";
const SECOND_VALUE_PROMPT: &str = "Second value: ";
const INVALID_NUMBER_TEXT: &str = "Error: Please enter a valid number";
const FAREWELL_TEXT: &str = "Goodbye!";

pub struct AppBuilder {
    config: UIConfig,
}

impl AppBuilder {
    pub fn new(config: UIConfig) -> Self {
        Self { config }
    }

    /// Build an application over the standard streams.
    pub fn build(self) -> Result<TerminalApplication<Box<dyn LineSource>, Stdout>, Error> {
        let source: Box<dyn LineSource> = if self.config.line_editor {
            Box::new(EditorSource::new(create_editor(self.config.colored)?))
        } else {
            Box::new(StreamSource::new(io::stdin().lock(), io::stdout()))
        };
        Ok(self.build_from_source(source, io::stdout()))
    }

    pub fn build_from_source<S: LineSource, W: Write>(
        self,
        source: S,
        out: W,
    ) -> TerminalApplication<S, W> {
        TerminalApplication {
            source,
            printer: Printer::new(out, self.config.colored),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    AwaitingFirstValue,
    AwaitingSecondValue(f64),
    Terminated,
}

pub struct TerminalApplication<S: LineSource, W: Write> {
    source: S,
    printer: Printer<W>,
}

impl<S: LineSource, W: Write> TerminalApplication<S, W> {
    pub fn run(mut self) -> Result<(), Error> {
        self.printer.print(WELCOME_TEXT)?;

        let mut state = State::AwaitingFirstValue;
        loop {
            state = match state {
                State::AwaitingFirstValue => self.first_value()?,
                State::AwaitingSecondValue(first) => self.second_value(first)?,
                State::Terminated => break,
            };
        }

        self.printer.print(format_args!("\n{FAREWELL_TEXT}"))?;
        Ok(())
    }

    fn first_value(&mut self) -> Result<State, Error> {
        self.printer.print("")?;
        let Some(line) = self.source.read_line(FIRST_VALUE_PROMPT)? else {
            return Ok(State::Terminated);
        };

        let state = match Command::parse(&line) {
            Ok(Command::Quit) => State::Terminated,
            Ok(Command::Help) => {
                self.printer.print(HELP)?;
                State::AwaitingFirstValue
            }
            Ok(Command::Value(first)) => State::AwaitingSecondValue(first),
            Err(e) => {
                self.reject(e)?;
                State::AwaitingFirstValue
            }
        };
        Ok(state)
    }

    fn second_value(&mut self, first: f64) -> Result<State, Error> {
        let Some(line) = self.source.read_line(SECOND_VALUE_PROMPT)? else {
            return Ok(State::Terminated);
        };

        // a bad second value drops the first one too, the pair starts over
        match parse_number(&line) {
            Ok(second) => self.printer.print(calculate(first, second))?,
            Err(e) => self.reject(e)?,
        }
        Ok(State::AwaitingFirstValue)
    }

    fn reject(&mut self, e: ParseError) -> Result<(), Error> {
        debug!(target: "console", "invalid value: {e}");
        self.printer.error(INVALID_NUMBER_TEXT)?;
        self.source.drain_line()
    }
}
