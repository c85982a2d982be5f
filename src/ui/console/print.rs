use crossterm::style::Stylize;
use std::fmt::Display;
use std::io::Write;

/// [`Printer`] writes messages line by line into a terminal stream (or any other writer).
///
/// Error messages are colored only if the printer was created as a colored one, so
/// redirected output never contains escape sequences.
pub struct Printer<W: Write> {
    out: W,
    colored: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    pub fn print(&mut self, msg: impl Display) -> std::io::Result<()> {
        writeln!(self.out, "{msg}")
    }

    pub fn error(&mut self, msg: impl Display) -> std::io::Result<()> {
        if self.colored {
            self.print(msg.to_string().red())
        } else {
            self.print(msg)
        }
    }
}
