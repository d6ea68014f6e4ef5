use anyhow::Result;

use super::tokenizer::ArgumentVector;
use crate::exec::{Context, Launcher, Registry, Runnable, Status};

/// Resolves a command name to a builtin, or hands it to the `Launcher`
pub struct Dispatcher {
    registry: Registry,
    launcher: Launcher,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Registry::default())
    }
}

impl Dispatcher {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            launcher: Launcher,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs the command named by the first token with the full argument vector
    /// A blank line runs nothing
    pub fn dispatch(&self, args: &ArgumentVector, stdout: &mut dyn std::io::Write) -> Result<Status> {
        let Some(command_name) = args.command() else {
            return Ok(Status::Continue);
        };

        let mut context = Context::new(&self.registry, stdout);
        if let Some(builtin) = self.registry.resolve(command_name) {
            log::debug!("dispatching '{}' to builtin", command_name.to_string_lossy());
            builtin.run(&mut context, args.as_slice())
        } else {
            log::debug!("dispatching '{}' to launcher", command_name.to_string_lossy());
            self.launcher.run(&mut context, args.as_slice())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::tokenizer::tokenize;

    fn dispatch(line: &str) -> (Result<Status>, String) {
        let dispatcher = Dispatcher::default();
        let args = tokenize(line.as_bytes(), 64).unwrap();
        let mut stdout = Vec::new();
        let result = dispatcher.dispatch(&args, &mut stdout);
        (result, String::from_utf8(stdout).unwrap())
    }

    #[test]
    fn blank_line_does_nothing() {
        for line in ["", "   ", "\t\r\n"] {
            let (result, output) = dispatch(line);
            assert_eq!(result.unwrap(), Status::Continue);
            assert!(output.is_empty());
        }
    }

    #[test]
    fn builtin_status_is_returned_directly() {
        assert_eq!(dispatch("exit").0.unwrap(), Status::Terminate);
        assert_eq!(dispatch("  exit  now ").0.unwrap(), Status::Terminate);
    }

    #[test]
    fn builtin_writes_to_given_output() {
        let (result, output) = dispatch("help me");
        assert_eq!(result.unwrap(), Status::Continue);
        assert!(output.starts_with("Jordan Juel's JJSH\n"));
    }

    #[test]
    fn builtin_lookup_is_case_sensitive() {
        // * "EXIT" is not a builtin, so it goes to the launcher and fails there
        let (result, output) = dispatch("EXIT");
        assert!(result.is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn unknown_command_goes_to_launcher() {
        let (result, _) = dispatch("nonexistent_cmd_123 a b");
        assert!(result.unwrap_err().downcast_ref::<crate::errors::LaunchError>().is_some());
    }

    #[test]
    fn external_command_continues() {
        assert_eq!(dispatch("true").0.unwrap(), Status::Continue);
    }
}
