use crate::ui::console::input::LineSource;
use crate::Error;
use crossterm::style::Stylize;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::MemHistory;
use rustyline::{Config, Editor};
use rustyline_derive::{Completer, Helper, Hinter, Validator};
use std::borrow::Cow;
use std::borrow::Cow::{Borrowed, Owned};

pub type DeltaEditor = Editor<RLHelper, MemHistory>;

#[derive(Helper, Completer, Hinter, Validator)]
pub struct RLHelper {
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    colored: bool,
}

impl Highlighter for RLHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default && self.colored {
            Owned(prompt.dark_green().to_string())
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        if self.colored {
            Owned(hint.grey().to_string())
        } else {
            Borrowed(hint)
        }
    }
}

pub fn create_editor(colored: bool) -> Result<DeltaEditor, Error> {
    let config = Config::builder().history_ignore_space(true).build();

    let h = RLHelper {
        hinter: HistoryHinter {},
        colored,
    };

    let mut editor = Editor::with_history(config, MemHistory::new())?;
    editor.set_helper(Some(h));
    Ok(editor)
}

/// Reads lines with a line editor, previously entered values are available from the history.
///
/// Ctrl-D and Ctrl-C end the input.
pub struct EditorSource {
    editor: DeltaEditor,
}

impl EditorSource {
    pub fn new(editor: DeltaEditor) -> Self {
        Self { editor }
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        match self.editor.readline(prompt) {
            Ok(input) => {
                _ = self.editor.add_history_entry(&input);
                Ok(Some(input))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn drain_line(&mut self) -> Result<(), Error> {
        // editor always consumes a whole line
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn helper(colored: bool) -> RLHelper {
        RLHelper {
            hinter: HistoryHinter {},
            colored,
        }
    }

    #[test]
    fn test_plain_highlight() {
        let helper = helper(false);
        assert_eq!(helper.highlight_prompt("First value: ", true), "First value: ");
        assert_eq!(helper.highlight_hint("4.23"), "4.23");
    }

    #[test]
    fn test_colored_highlight() {
        let helper = helper(true);

        let prompt = helper.highlight_prompt("First value: ", true);
        assert!(prompt.contains("First value: "));
        assert!(prompt.starts_with('\x1b'));
        assert_eq!(helper.highlight_prompt("First value: ", false), "First value: ");

        let hint = helper.highlight_hint("4.23");
        assert!(hint.contains("4.23"));
        assert!(hint.starts_with('\x1b'));
    }
}
