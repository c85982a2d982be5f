use crossterm::tty::IsTty;
use std::io;

/// Application user interface config.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UIConfig {
    /// Color prompts and error messages written to stdout.
    pub colored: bool,
    /// Color error messages written to stderr.
    pub colored_errors: bool,
    /// Read interactive input with a line editor instead of a plain stream.
    pub line_editor: bool,
}

impl UIConfig {
    /// Configuration for standard streams of the current process.
    /// Colors and line editing are used only when talking to a terminal.
    pub fn detect() -> Self {
        let stdin_tty = io::stdin().is_tty();
        let stdout_tty = io::stdout().is_tty();
        Self {
            colored: stdout_tty,
            colored_errors: io::stderr().is_tty(),
            line_editor: stdin_tty && stdout_tty,
        }
    }
}
