//! The `eval` and `run` commands: evaluate an expression or a file of lines.

use std::path::Path;

use flispy_eval::Evaluator;
use flispy_parse::ParseError;

use super::{format_parse_error, read_file, run_cycle, Cycle};
use crate::config::CliConfig;
use crate::error::CliError;

/// Origin shown in diagnostics for `flispy eval`.
const EXPR_ORIGIN: &str = "<expr>";

/// Outcome of one non-blank line of a source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineReport {
    /// 1-based line number.
    pub line: usize,
    pub outcome: Result<String, ParseError>,
}

/// Evaluate every non-blank line of `source` as its own cycle.
///
/// A line that fails to parse is reported and skipped; later lines still run.
pub fn run_source(evaluator: &Evaluator, source: &str, dump_tree: bool) -> Vec<LineReport> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, text)| {
            let outcome = match run_cycle(evaluator, text, dump_tree) {
                Cycle::Blank => return None,
                Cycle::Printed(output) => Ok(output),
                Cycle::ParseFailed(err) => Err(err),
            };
            Some(LineReport {
                line: index + 1,
                outcome,
            })
        })
        .collect()
}

/// Run a source file, printing each result in order.
pub fn run_file(path: &Path, config: &CliConfig) -> Result<(), CliError> {
    let source = read_file(path)?;
    let origin = path.display().to_string();
    let evaluator = Evaluator::new();

    let mut failures = 0;
    for report in run_source(&evaluator, &source, config.dump_tree) {
        match report.outcome {
            Ok(output) => println!("{output}"),
            Err(err) => {
                failures += 1;
                eprintln!("{}", format_parse_error(&origin, Some(report.line), &err));
            }
        }
    }

    if failures > 0 {
        return Err(CliError::ParseFailures {
            origin,
            count: failures,
        });
    }
    Ok(())
}

/// Evaluate a single expression given on the command line.
pub fn eval_expression(source: &str, config: &CliConfig) -> Result<(), CliError> {
    match run_cycle(&Evaluator::new(), source, config.dump_tree) {
        Cycle::Printed(output) => println!("{output}"),
        // Empty input evaluates to the empty s-expression.
        Cycle::Blank => println!("()"),
        Cycle::ParseFailed(err) => {
            eprintln!("{}", format_parse_error(EXPR_ORIGIN, None, &err));
            return Err(CliError::ParseFailures {
                origin: EXPR_ORIGIN.to_string(),
                count: 1,
            });
        }
    }
    Ok(())
}
