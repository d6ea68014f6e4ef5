use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors which end the shell process
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("allocation error")]
    Allocation(#[from] TryReserveError),
    #[error("failed to read input: {0}")]
    FailedToReadStdin(#[source] io::Error),
}

#[derive(Error, Debug)]
pub enum BuiltinError {
    #[error("expected argument to \"{0}\"")]
    MissingArgument(&'static str),
    #[error("{0}")]
    FailedToChangeDirectory(#[source] io::Error),
    #[error("failed to write output: {0}")]
    FailedToWrite(#[source] io::Error),
}

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("{program}: {source}")]
    FailedToSpawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to wait for process {pid}: {source}")]
    FailedToWait {
        pid: u32,
        #[source]
        source: io::Error,
    },
    #[error("failed to flush output: {0}")]
    FailedToFlush(#[source] io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    FailedToOpenConfigFile(#[source] io::Error),
    #[error("malformed line {line} in configuration file: {path}")]
    MalformedLine { path: PathBuf, line: usize },
    #[error("unknown configuration key '{key}' in: {path}")]
    UnknownKey { path: PathBuf, key: String },
    #[error("invalid value '{value}' for configuration key '{key}'")]
    InvalidValue { key: String, value: String },
}
