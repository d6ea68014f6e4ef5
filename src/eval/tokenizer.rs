use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use crate::errors::ShellError;

/// Bytes which separate tokens: space, tab, carriage return, newline and bell
pub const DELIMITERS: [u8; 5] = [b' ', b'\t', b'\r', b'\n', 0x07];

/// The tokens of one line, borrowed from the bytes they were split from
/// The first token is the command name and the rest are its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentVector<'a> {
    tokens: Vec<&'a OsStr>,
}

impl<'a> ArgumentVector<'a> {
    /// Returns the command name, or `None` for a blank line
    pub fn command(&self) -> Option<&'a OsStr> {
        self.tokens.first().copied()
    }

    /// All tokens, including the command name as element 0
    pub fn as_slice(&self) -> &[&'a OsStr] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Splits a line on runs of `DELIMITERS`, growing the vector `increment` slots at a time
/// Tokens are not decoded, so bytes which are not UTF-8 pass through untouched
pub fn tokenize(line: &[u8], increment: usize) -> Result<ArgumentVector<'_>, ShellError> {
    let increment = increment.max(1);
    let mut tokens: Vec<&OsStr> = Vec::new();
    tokens.try_reserve_exact(increment)?;

    let words = line
        .split(|byte| DELIMITERS.contains(byte))
        .filter(|word| !word.is_empty());
    for word in words {
        if tokens.len() >= tokens.capacity() {
            tokens.try_reserve_exact(increment)?;
            log::trace!("argument vector grown to {} slots", tokens.capacity());
        }
        tokens.push(OsStr::from_bytes(word));
    }

    Ok(ArgumentVector { tokens })
}
