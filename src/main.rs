mod errors;
mod eval;
mod exec;
mod logging;
mod shell;
mod state;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use errors::ShellError;
use shell::Shell;
use state::Configuration;

/// A minimal interactive command shell
#[derive(Parser, Debug)]
#[command(name = "jjsh", version)]
struct Cli {
    #[arg(short, long, help = "Path to a configuration file of `key: value` lines")]
    config: Option<PathBuf>,
    #[arg(
        long = "log-level",
        default_value = "off",
        help = "Diagnostic log level: off, error, warn, info, debug or trace"
    )]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("jjsh: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // The Shell owns the builtin registry for the lifetime of the process
    let shell = Shell::new(config);
    let result = shell.run(io::stdin().lock(), &mut io::stdout().lock(), &mut io::stderr());

    ExitCode::from(exit_status(result, &mut io::stderr()))
}

// Normal termination is always 0; a fatal error is reported and gives 1
fn exit_status<E: Write>(result: Result<(), ShellError>, stderr: &mut E) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            if let Err(write_error) = writeln!(stderr, "jjsh: {}", e) {
                log::warn!("failed to report fatal error: {}", write_error);
            }
            1
        }
    }
}

// Without a path, the defaults apply and no file is read
fn load_config(path: Option<&Path>) -> Result<Configuration> {
    let Some(path) = path else {
        return Ok(Configuration::default());
    };

    let config = Configuration::from_file(path).context("failed to load configuration")?;
    log::info!("loaded configuration from {}", path.display());
    Ok(config)
}
