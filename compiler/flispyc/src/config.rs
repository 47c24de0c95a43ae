//! Command-line configuration.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! the environment (`FLISPY_HISTORY`), then `--` options on the command line.

use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming a persistent history file.
pub const HISTORY_ENV: &str = "FLISPY_HISTORY";

/// Default REPL prompt.
pub const DEFAULT_PROMPT: &str = "flispy> ";

/// Where REPL line history lives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// No history is recorded.
    Disabled,
    /// History for this session only.
    #[default]
    Memory,
    /// Loaded at start and saved at exit.
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' requires a non-empty value")]
    EmptyValue(&'static str),
}

/// Settings shared by every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub prompt: String,
    pub history: HistoryMode,
    /// Print the syntax tree of each line before its result.
    pub dump_tree: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            history: HistoryMode::default(),
            dump_tree: false,
        }
    }
}

impl CliConfig {
    /// Build from command arguments (after the command name) and an
    /// environment lookup. Returns the config and the positional arguments.
    pub fn load(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut config = CliConfig::default().with_env(env);
        let positional = config.apply_args(args)?;
        Ok((config, positional))
    }

    /// Overlay environment settings.
    #[must_use]
    pub fn with_env(mut self, env: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = env(HISTORY_ENV).filter(|p| !p.trim().is_empty()) {
            self.history = HistoryMode::File(PathBuf::from(path));
        }
        self
    }

    /// Overlay `--` options, returning the remaining positional arguments.
    pub fn apply_args(&mut self, args: &[String]) -> Result<Vec<String>, ConfigError> {
        let mut positional = Vec::new();
        for arg in args {
            if !arg.starts_with("--") {
                positional.push(arg.clone());
            } else if arg == "--dump-tree" {
                self.dump_tree = true;
            } else if arg == "--no-history" {
                self.history = HistoryMode::Disabled;
            } else if let Some(path) = arg.strip_prefix("--history=") {
                if path.is_empty() {
                    return Err(ConfigError::EmptyValue("--history"));
                }
                self.history = HistoryMode::File(PathBuf::from(path));
            } else if let Some(prompt) = arg.strip_prefix("--prompt=") {
                self.prompt = prompt.to_string();
            } else {
                return Err(ConfigError::UnknownOption(arg.clone()));
            }
        }
        Ok(positional)
    }
}

#[cfg(test)]
mod tests;
