//! Line oriented input for the interactive session.
use crate::Error;
use log::debug;
use std::io::{BufRead, Read, Write};

/// Size of a line buffer, a single read returns at most `MAX_INPUT - 1` bytes.
pub const MAX_INPUT: usize = 100;

/// Source of user input lines.
pub trait LineSource {
    /// Show `prompt` and read the next line, `None` means there is no more input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Error>;

    /// Discard the unread rest of the current line, including its terminator.
    fn drain_line(&mut self) -> Result<(), Error>;
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        (**self).read_line(prompt)
    }

    fn drain_line(&mut self) -> Result<(), Error> {
        (**self).drain_line()
    }
}

/// Reads lines from a buffered stream (a pipe, a file, or a terminal without line editing).
///
/// Lines longer than the line buffer are returned in pieces, the remainder stays
/// in the stream until it is read or drained.
pub struct StreamSource<R, W> {
    reader: R,
    prompt_out: W,
    /// The last read stopped before a line terminator.
    line_open: bool,
}

impl<R: BufRead, W: Write> StreamSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self {
            reader,
            prompt_out,
            line_open: false,
        }
    }
}

impl<R: BufRead, W: Write> LineSource for StreamSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        write!(self.prompt_out, "{prompt}")?;
        self.prompt_out.flush()?;

        let mut buf = Vec::with_capacity(MAX_INPUT);
        let size = (&mut self.reader)
            .take(MAX_INPUT as u64 - 1)
            .read_until(b'\n', &mut buf)?;
        if size == 0 {
            return Ok(None);
        }

        self.line_open = buf.last() != Some(&b'\n');
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn drain_line(&mut self) -> Result<(), Error> {
        if !self.line_open {
            return Ok(());
        }

        let mut rest = vec![];
        let size = self.reader.read_until(b'\n', &mut rest)?;
        debug!(target: "console", "drain {size} bytes of unread input");
        self.line_open = false;
        Ok(())
    }
}
