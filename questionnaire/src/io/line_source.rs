//! Line source abstraction for interactive input.
//!
//! The [`LineSource`] trait decouples the collector from stdin. Tests use
//! scripted sources that replay predetermined lines.

use std::io::{self, BufRead};

/// Supplies one line of user input at a time.
pub trait LineSource {
    /// Read the next line without its trailing newline, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Line source over any buffered reader (stdin in production).
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // Undecodable bytes become U+FFFD and are rejected as an answer.
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
