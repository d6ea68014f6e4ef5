use std::io::{BufRead, Write};

use crossterm::style::Stylize;

use crate::errors::ShellError;
use crate::eval::{tokenize, ArgumentVector, Dispatcher, LineReader};
use crate::exec::Status;
use crate::state::Configuration;

// Represents the shell, its settings and its builtins, and provides the read-eval loop
pub struct Shell {
    config: Configuration,
    dispatcher: Dispatcher,
}

impl Shell {
    pub fn new(config: Configuration) -> Self {
        let dispatcher = Dispatcher::default();
        log::debug!("registered {} builtins", dispatcher.registry().len());

        Self { config, dispatcher }
    }

    /// Repeatedly prompts for a line, evaluates it, and stops on `exit` or end of input
    /// Only fatal errors are returned; everything else is reported and the loop continues
    pub fn run<R: BufRead, W: Write, E: Write>(
        &self,
        input: R,
        stdout: &mut W,
        stderr: &mut E,
    ) -> Result<(), ShellError> {
        let mut reader = LineReader::new(input, self.config.line_buffer_size);

        loop {
            prompt(stdout, &self.config.prompt);
            let line = reader.read_line()?;

            // * The argument vector borrows the line, and both are dropped at the end of the iteration
            let args = tokenize(&line.bytes, self.config.token_buffer_size)?;
            log::trace!("read {} bytes as {} tokens", line.bytes.len(), args.len());
            let status = self.evaluate(&args, stdout, stderr);

            if !status.should_continue() {
                log::debug!("shell terminated by builtin");
                break;
            }

            if line.end_of_input {
                log::debug!("end of input reached");
                break;
            }
        }

        Ok(())
    }

    // Dispatches one argument vector, reporting any error it produced
    fn evaluate<W: Write, E: Write>(
        &self,
        args: &ArgumentVector,
        stdout: &mut W,
        stderr: &mut E,
    ) -> Status {
        match self.dispatcher.dispatch(args, stdout) {
            Ok(status) => status,
            Err(e) => {
                // Keep builtin output ahead of the report
                if let Err(flush_error) = stdout.flush() {
                    log::warn!("failed to flush output before error report: {}", flush_error);
                }
                self.report(stderr, &e);
                Status::Continue
            }
        }
    }

    // Prints an error report to the error stream
    fn report<E: Write>(&self, stderr: &mut E, error: &anyhow::Error) {
        let message = format!("jjsh: {}", error);
        let written = match self.config.color_errors {
            true => writeln!(stderr, "{}", message.red()),
            false => writeln!(stderr, "{}", message),
        };

        if let Err(e) = written.and_then(|_| stderr.flush()) {
            log::warn!("failed to write error report: {}", e);
        }
    }
}

// An unwritable output stream is not fatal; input still decides when the loop ends
fn prompt<W: Write>(stdout: &mut W, marker: &str) {
    let written = stdout.write_all(marker.as_bytes()).and_then(|_| stdout.flush());
    if let Err(e) = written {
        log::warn!("failed to write prompt: {}", e);
    }
}
