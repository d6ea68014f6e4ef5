use std::ffi::OsStr;
use std::io::Write;

use anyhow::Result;

use super::builtins::Registry;

/// Signal returned by every command, threaded back into the shell loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Terminate,
}

impl Status {
    pub fn should_continue(self) -> bool {
        self == Status::Continue
    }
}

// Everything a command may need while it runs
// Builtins read the registry (for `help`) and write their output through `stdout`
pub struct Context<'a> {
    pub registry: &'a Registry,
    pub stdout: &'a mut dyn Write,
}

impl<'a> Context<'a> {
    pub fn new(registry: &'a Registry, stdout: &'a mut dyn Write) -> Self {
        Self { registry, stdout }
    }
}

/// Represents either a builtin (internal command) or an external program
/// A `Runnable` receives the full argument vector, with the command name as element 0
pub trait Runnable {
    fn run(&self, context: &mut Context, arguments: &[&OsStr]) -> Result<Status>;
}
