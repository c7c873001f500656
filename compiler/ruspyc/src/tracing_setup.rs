//! Tracing subscriber setup for the `ruspy` binary.
//!
//! Output is off unless `RUST_LOG` is set:
//!
//! - `RUST_LOG=ruspy_eval=debug`: module loading and top-level evaluation
//! - `RUST_LOG=ruspy_eval=trace`: every node and call (very verbose)
//! - `RUST_LOG=ruspy_parse=trace`: parser entry points
//!
//! Setting `RUSPY_LOG_TREE` as well renders spans as an indented tree.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let (tree, flat) = if std::env::var("RUSPY_LOG_TREE").is_ok() {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true)
                .with_bracketed_fields(true);
            (Some(tree), None)
        } else {
            let flat = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true);
            (None, Some(flat))
        };

        tracing_subscriber::registry()
            .with(tree)
            .with(flat)
            .with(filter)
            .init();
    });
}
