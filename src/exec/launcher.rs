use std::ffi::OsStr;
use std::io::Write;
use std::process::Command as Process;

use anyhow::Result;

use super::runnable::{Context, Runnable, Status};
use crate::errors::LaunchError;

/// Runs external programs found on the executable search path
/// The child inherits the shell's standard streams and working directory
#[derive(Debug, Default)]
pub struct Launcher;

impl Runnable for Launcher {
    // * External programs can never terminate the shell, so every path returns Continue
    // * or an error that the shell reports before continuing
    fn run(&self, context: &mut Context, arguments: &[&OsStr]) -> Result<Status> {
        let Some((program, program_args)) = arguments.split_first() else {
            return Ok(Status::Continue);
        };

        // Anything the shell buffered must reach the terminal before the child writes
        context.stdout.flush().map_err(LaunchError::FailedToFlush)?;

        // * Spawning combines process creation with program lookup, so a missing
        // * program is reported here rather than from inside a child
        let mut child = Process::new(program)
            .args(program_args)
            .spawn()
            .map_err(|source| LaunchError::FailedToSpawn {
                program: program.to_string_lossy().into_owned(),
                source,
            })?;

        let pid = child.id();
        log::debug!("launched '{}' as process {}", program.to_string_lossy(), pid);

        // `wait` only returns once the child has exited or was killed by a signal;
        // a stopped child keeps it blocked
        let status = child
            .wait()
            .map_err(|source| LaunchError::FailedToWait { pid, source })?;
        log::debug!("process {} finished: {}", pid, status);

        Ok(Status::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::Registry;

    fn launch_raw(arguments: &[&OsStr]) -> Result<Status> {
        let registry = Registry::default();
        let mut stdout = Vec::new();
        let mut context = Context::new(&registry, &mut stdout);
        Launcher.run(&mut context, arguments)
    }

    fn launch(arguments: &[&str]) -> Result<Status> {
        let arguments: Vec<&OsStr> = arguments.iter().map(OsStr::new).collect();
        launch_raw(&arguments)
    }

    #[test]
    fn continues_after_successful_program() {
        assert_eq!(launch(&["true"]).unwrap(), Status::Continue);
    }

    #[test]
    fn continues_after_failing_program() {
        assert_eq!(launch(&["false"]).unwrap(), Status::Continue);
    }

    #[test]
    fn passes_arguments_to_program() {
        assert_eq!(launch(&["sh", "-c", "exit 3"]).unwrap(), Status::Continue);
    }

    #[test]
    fn reports_missing_program() {
        //given
        let arguments = ["nonexistent_cmd_123", "--flag"];

        //when
        let error = launch(&arguments).unwrap_err();

        //then
        match error.downcast_ref::<LaunchError>() {
            Some(LaunchError::FailedToSpawn { program, source }) => {
                assert_eq!(program, "nonexistent_cmd_123");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn ignores_empty_argument_vector() {
        assert_eq!(launch(&[]).unwrap(), Status::Continue);
    }
}
