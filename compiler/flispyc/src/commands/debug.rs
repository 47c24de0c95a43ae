//! Debug command: `parse` for inspecting syntax trees.

use std::path::Path;

use flispy_parse::parse;

use super::{format_parse_error, read_file};
use crate::error::CliError;

/// Parse each non-blank line of a file and print its syntax tree.
pub fn parse_file(path: &Path) -> Result<(), CliError> {
    let source = read_file(path)?;
    let origin = path.display().to_string();

    let mut failures = 0;
    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse(line) {
            Ok(tree) => {
                println!("line {}:", index + 1);
                print!("{tree}");
            }
            Err(err) => {
                failures += 1;
                eprintln!("{}", format_parse_error(&origin, Some(index + 1), &err));
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
