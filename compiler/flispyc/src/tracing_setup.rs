//! Tracing subscriber for the CLI.
//!
//! Logs go to stderr so they never mix with printed results. Nothing is
//! installed unless `RUST_LOG` is set.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Set to any value to get an indented span tree instead of flat lines.
pub const TREE_ENV: &str = "FLISPY_LOG_TREE";

/// Install the global subscriber. Safe to call more than once.
///
/// ```text
/// RUST_LOG=flispy_eval=trace flispy eval "(+ 1 2)"
/// RUST_LOG=debug FLISPY_LOG_TREE=1 flispy run prog.fl
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os(TREE_ENV).is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
