//! Driver errors.
//!
//! Evaluation failures are values and are printed like any other result.
//! Only the machinery around evaluation fails with a `CliError`.

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("line editor failed: {0}")]
    Readline(#[from] ReadlineError),

    #[error("cannot read '{}': {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("'{command}' expects {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("{count} line(s) of '{origin}' failed to parse")]
    ParseFailures { origin: String, count: usize },
}

impl CliError {
    #[cold]
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::ReadFile {
            path: path.into(),
            source,
        }
    }
}
