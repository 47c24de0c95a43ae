#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn no_env(_: &str) -> Option<String> {
    None
}

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(ToString::to_string).collect()
}

#[test]
fn test_defaults() {
    let (config, positional) = CliConfig::load(&[], no_env).unwrap();
    assert_eq!(config, CliConfig::default());
    assert_eq!(config.prompt, "flispy> ");
    assert_eq!(config.history, HistoryMode::Memory);
    assert!(!config.dump_tree);
    assert!(positional.is_empty());
}

#[test]
fn test_options_and_positionals() {
    let args = strings(&["--dump-tree", "script.fl", "--prompt=> ", "extra"]);
    let (config, positional) = CliConfig::load(&args, no_env).unwrap();
    assert!(config.dump_tree);
    assert_eq!(config.prompt, "> ");
    assert_eq!(positional, strings(&["script.fl", "extra"]));
}

#[test]
fn test_expression_with_leading_minus_is_positional() {
    let args = strings(&["- 10 4"]);
    let (_, positional) = CliConfig::load(&args, no_env).unwrap();
    assert_eq!(positional, args);
}

#[test]
fn test_history_from_env() {
    let env = |key: &str| (key == HISTORY_ENV).then(|| "/tmp/flispy_history".to_string());
    let (config, _) = CliConfig::load(&[], env).unwrap();
    assert_eq!(
        config.history,
        HistoryMode::File(PathBuf::from("/tmp/flispy_history"))
    );
}

#[test]
fn test_blank_env_history_is_ignored() {
    let env = |_: &str| Some("  ".to_string());
    let (config, _) = CliConfig::load(&[], env).unwrap();
    assert_eq!(config.history, HistoryMode::Memory);
}

#[test]
fn test_args_override_env() {
    let env = |_: &str| Some("/tmp/from_env".to_string());

    let (config, _) = CliConfig::load(&strings(&["--no-history"]), env).unwrap();
    assert_eq!(config.history, HistoryMode::Disabled);

    let (config, _) = CliConfig::load(&strings(&["--history=h.txt"]), env).unwrap();
    assert_eq!(config.history, HistoryMode::File(PathBuf::from("h.txt")));
}

#[test]
fn test_last_history_option_wins() {
    let args = strings(&["--history=a", "--no-history"]);
    let (config, _) = CliConfig::load(&args, no_env).unwrap();
    assert_eq!(config.history, HistoryMode::Disabled);
}

#[test]
fn test_invalid_options() {
    assert_eq!(
        CliConfig::load(&strings(&["--verbose"]), no_env),
        Err(ConfigError::UnknownOption("--verbose".to_string()))
    );
    assert_eq!(
        CliConfig::load(&strings(&["--history="]), no_env),
        Err(ConfigError::EmptyValue("--history"))
    );
    assert_eq!(
        ConfigError::UnknownOption("--x".to_string()).to_string(),
        "unknown option '--x'"
    );
}
