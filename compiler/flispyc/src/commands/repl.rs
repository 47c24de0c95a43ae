//! The interactive read-eval-print loop.

use flispy_eval::Evaluator;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use super::{format_parse_error, run_cycle, Cycle};
use crate::config::{CliConfig, HistoryMode};
use crate::error::CliError;

const STDIN_ORIGIN: &str = "<stdin>";

/// Greeting printed when the loop starts.
pub fn banner() -> String {
    format!(
        "Flispy Version {}\nPress Ctrl+c to exit\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Read lines until Ctrl-C or Ctrl-D, printing each result.
pub fn run_repl(config: &CliConfig) -> Result<(), CliError> {
    println!("{}", banner());

    let mut editor = DefaultEditor::new()?;
    if let HistoryMode::File(path) = &config.history {
        // A missing file just means a first session.
        if let Err(e) = editor.load_history(path) {
            debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    let evaluator = Evaluator::new();
    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                if config.history != HistoryMode::Disabled {
                    editor.add_history_entry(line.as_str())?;
                }
                match run_cycle(&evaluator, &line, config.dump_tree) {
                    Cycle::Blank => {}
                    Cycle::Printed(output) => println!("{output}"),
                    Cycle::ParseFailed(err) => {
                        eprintln!("{}", format_parse_error(STDIN_ORIGIN, None, &err));
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let HistoryMode::File(path) = &config.history {
        editor.save_history(path)?;
    }
    Ok(())
}
