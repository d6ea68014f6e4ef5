/*
Builtins are commands implemented inside the shell process itself.
They run with access to the shell's own state, which is why `cd` has to be one:
a child process changing its working directory would not affect the shell.
 */

use std::ffi::OsStr;
use std::io::Write;

use anyhow::Result;

use super::runnable::{Context, Runnable, Status};
use crate::errors::BuiltinError;

type BuiltinFunction = dyn Fn(&mut Context, &[&OsStr]) -> Result<Status>;

pub const BANNER: &str = "Jordan Juel's JJSH";

/// Represents a builtin function and its name
pub struct Builtin {
    pub name: &'static str,
    function: Box<BuiltinFunction>,
}

impl Builtin {
    pub fn new<F: Fn(&mut Context, &[&OsStr]) -> Result<Status> + 'static>(
        name: &'static str,
        function: F,
    ) -> Self {
        Self {
            name,
            function: Box::new(function),
        }
    }
}

impl Runnable for Builtin {
    fn run(&self, context: &mut Context, arguments: &[&OsStr]) -> Result<Status> {
        (self.function)(context, arguments)
    }
}

/// Ordered table of builtins, searched by exact name in registration order
pub struct Registry {
    builtins: Vec<Builtin>,
}

impl Default for Registry {
    /// Initializes the `Registry` with `cd`, `help` and `exit`, in that order
    fn default() -> Self {
        let mut registry = Self::new();

        registry.add_builtin("cd", change_directory);
        registry.add_builtin("help", help);
        registry.add_builtin("exit", exit);

        registry
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            builtins: Vec::new(),
        }
    }

    fn add_builtin<F: Fn(&mut Context, &[&OsStr]) -> Result<Status> + 'static>(
        &mut self,
        name: &'static str,
        function: F,
    ) {
        self.builtins.push(Builtin::new(name, function))
    }

    /// Finds a builtin by name, byte for byte; the first match wins
    pub fn resolve(&self, command_name: &OsStr) -> Option<&Builtin> {
        self.builtins
            .iter()
            .find(|builtin| *command_name == *builtin.name)
    }

    /// Builtin names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.builtins.iter().map(|builtin| builtin.name)
    }

    pub fn len(&self) -> usize {
        self.builtins.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.builtins.is_empty()
    }
}

pub fn change_directory(_context: &mut Context, args: &[&OsStr]) -> Result<Status> {
    let path = args.get(1).ok_or(BuiltinError::MissingArgument("cd"))?;
    std::env::set_current_dir(path).map_err(BuiltinError::FailedToChangeDirectory)?;
    log::debug!("working directory changed to {}", path.to_string_lossy());

    Ok(Status::Continue)
}

// Extra arguments are ignored
pub fn help(context: &mut Context, _args: &[&OsStr]) -> Result<Status> {
    let mut text = format!(
        "{}\nType program names and arguments, and hit enter.\nThe following are built in:\n",
        BANNER
    );
    for name in context.registry.names() {
        text.push_str(&format!("  {}\n", name));
    }
    text.push_str("Use the man command for information on other programs.\n");

    context
        .stdout
        .write_all(text.as_bytes())
        .map_err(BuiltinError::FailedToWrite)?;

    Ok(Status::Continue)
}

pub fn exit(_context: &mut Context, _args: &[&OsStr]) -> Result<Status> {
    Ok(Status::Terminate)
}
