use std::io::{self, BufRead};

use crate::errors::ShellError;

/// One line of raw input, without its terminator
/// The bytes are kept as read, so tokens reach programs unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub bytes: Vec<u8>,
    // Set when the input stream ended before (or instead of) a newline
    pub end_of_input: bool,
}

/// Reads lines from an input stream into a buffer which grows by a fixed increment
pub struct LineReader<R: BufRead> {
    input: R,
    increment: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(input: R, increment: usize) -> Self {
        Self {
            input,
            // * A zero increment would never make room for the next byte
            increment: increment.max(1),
        }
    }

    /// Reads bytes until a newline or the end of the stream
    /// End of input on the very first byte yields an empty line
    pub fn read_line(&mut self) -> Result<Line, ShellError> {
        let mut bytes: Vec<u8> = Vec::new();
        bytes.try_reserve_exact(self.increment)?;

        let end_of_input = loop {
            let byte = match self.next_byte()? {
                Some(b'\n') => break false,
                None => break true,
                Some(byte) => byte,
            };

            if bytes.len() >= bytes.capacity() {
                bytes.try_reserve_exact(self.increment)?;
                log::trace!("line buffer grown to {} bytes", bytes.capacity());
            }
            bytes.push(byte);
        };

        Ok(Line { bytes, end_of_input })
    }

    fn next_byte(&mut self) -> Result<Option<u8>, ShellError> {
        loop {
            let available = match self.input.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ShellError::FailedToReadStdin(e)),
            };

            let Some(&byte) = available.first() else {
                return Ok(None);
            };
            self.input.consume(1);
            return Ok(Some(byte));
        }
    }
}
