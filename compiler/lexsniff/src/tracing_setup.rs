//! Log output for the `lexsniff` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Filter directive, e.g. `LEXSNIFF_LOG=lexsniff_detect=debug`.
pub const LOG_ENV: &str = "LEXSNIFF_LOG";

/// When set alongside [`LOG_ENV`], spans print as an indented tree.
pub const LOG_TREE_ENV: &str = "LEXSNIFF_LOG_TREE";

/// Install the global subscriber if [`LOG_ENV`] is set.
///
/// Safe to call more than once; only the first call does anything.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(directive) = std::env::var(LOG_ENV) else {
            return;
        };
        let filter = EnvFilter::new(directive);
        let registry = tracing_subscriber::registry().with(filter);

        if std::env::var_os(LOG_TREE_ENV).is_some() {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
