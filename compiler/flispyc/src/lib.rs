//! Flispy CLI - REPL and file runner.
//!
//! # Commands
//!
//! ```text
//! flispy [repl]        interactive loop
//! flispy eval <expr>   evaluate one expression
//! flispy run <file>    evaluate each line of a file
//! flispy parse <file>  print syntax trees
//! ```
//!
//! Every line goes through the same cycle: parse, read, evaluate, print.
//! See [`commands::run_cycle`].

pub mod commands;
pub mod config;
pub mod error;
mod tracing_setup;

pub use config::{CliConfig, ConfigError, HistoryMode};
pub use error::CliError;
pub use tracing_setup::init_tracing;
