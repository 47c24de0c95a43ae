//! Command handlers for the `flispy` CLI.
//!
//! Each submodule implements one command. The read-eval-print cycle shared
//! by all of them lives here in the module root.

use std::path::Path;

use flispy_eval::{read, Evaluator};
use flispy_parse::{parse, ParseError};

use crate::error::CliError;

mod debug;
mod repl;
mod run;

pub use debug::parse_file;
pub use repl::{banner, run_repl};
pub use run::{eval_expression, run_file, run_source, LineReport};

/// What one read-eval-print cycle produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cycle {
    /// The line held nothing but whitespace.
    Blank,
    /// Text to print: the rendered result, preceded by the syntax tree
    /// when tree dumps are on.
    Printed(String),
    /// The line did not parse; nothing was evaluated.
    ParseFailed(ParseError),
}

/// Parse, read, evaluate and render one line.
pub fn run_cycle(evaluator: &Evaluator, line: &str, dump_tree: bool) -> Cycle {
    if line.trim().is_empty() {
        return Cycle::Blank;
    }
    let tree = match parse(line) {
        Ok(tree) => tree,
        Err(err) => return Cycle::ParseFailed(err),
    };
    let dump = if dump_tree {
        tree.to_string()
    } else {
        String::new()
    };
    let result = evaluator.eval(read(&tree));
    tracing::debug!(line, result = %result, "cycle");
    Cycle::Printed(format!("{dump}{result}"))
}

/// `origin:line:col: error: message`, with the line omitted for one-line input.
pub fn format_parse_error(origin: &str, line: Option<usize>, err: &ParseError) -> String {
    let column = err.span().column();
    match line {
        Some(line) => format!("{origin}:{line}:{column}: error: {err}"),
        None => format!("{origin}:{column}: error: {err}"),
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::read_file(path, e))
}
