//! Flispy CLI
//!
//! A small Lisp with q-expressions, evaluated one line at a time.

use std::path::Path;

use flispyc::commands::{eval_expression, parse_file, run_file, run_repl};
use flispyc::{init_tracing, CliConfig, CliError};

#[derive(Clone, Copy)]
enum Command {
    Repl,
    Eval,
    Run,
    Parse,
}

impl Command {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "repl" => Some(Command::Repl),
            "eval" => Some(Command::Eval),
            "run" => Some(Command::Run),
            "parse" => Some(Command::Parse),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Command::Repl => "repl",
            Command::Eval => "eval",
            Command::Run => "run",
            Command::Parse => "parse",
        }
    }
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let tail = |from: usize| args.get(from..).unwrap_or_default();
    let (name, rest) = match args.get(1).map(String::as_str) {
        // Bare `flispy`, or options only, starts the REPL.
        None => ("repl", tail(1)),
        Some(first) if first.starts_with("--") => ("repl", tail(1)),
        Some(first) => (first, tail(2)),
    };

    match name {
        "help" | "-h" => print_usage(),
        "version" | "-V" => println!("flispy {}", env!("CARGO_PKG_VERSION")),
        _ => {
            let Some(command) = Command::from_name(name) else {
                eprintln!("Unknown command: {name}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            };
            if let Err(e) = dispatch(command, rest) {
                eprintln!("error: {e}");
                if matches!(e, CliError::Config(_) | CliError::MissingArgument { .. }) {
                    eprintln!();
                    print_usage();
                }
                std::process::exit(1);
            }
        }
    }
}

fn dispatch(command: Command, args: &[String]) -> Result<(), CliError> {
    let (config, positional) = CliConfig::load(args, |key| std::env::var(key).ok())?;
    let required = |what: &'static str| {
        positional
            .first()
            .map(String::as_str)
            .ok_or(CliError::MissingArgument {
                command: command.name(),
                what,
            })
    };
    match command {
        Command::Repl => run_repl(&config),
        Command::Eval => eval_expression(required("an expression")?, &config),
        Command::Run => run_file(Path::new(required("a file path")?), &config),
        Command::Parse => parse_file(Path::new(required("a file path")?)),
    }
}

fn print_usage() {
    println!("Flispy {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: flispy [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl            Start the interactive loop (default)");
    println!("  eval <expr>     Evaluate one expression and print the result");
    println!("  run <file>      Evaluate each line of a file");
    println!("  parse <file>    Print the syntax tree of each line of a file");
    println!("  help            Show this message");
    println!("  version         Show version information");
    println!();
    println!("Options:");
    println!("  --dump-tree         Print the syntax tree before each result");
    println!("  --history=<path>    Persist REPL history to <path>");
    println!("  --no-history        Do not record REPL history");
    println!("  --prompt=<text>     REPL prompt (default \"flispy> \")");
    println!();
    println!("Environment:");
    println!("  FLISPY_HISTORY      History file, overridden by --history");
    println!("  RUST_LOG            Tracing filter, e.g. flispy_eval=trace");
    println!("  FLISPY_LOG_TREE     Show tracing output as an indented tree");
}
