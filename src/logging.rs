//! Logging initialization for the CLI.
//!
//! Diagnostics go to stderr through `tracing`; user-facing progress uses
//! the ProgressReporter port instead.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Maps `-v` occurrences to a level; `None` keeps the default filter
fn verbosity_level(verbosity: u8) -> Option<Level> {
    match verbosity {
        0 => None,
        1 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

/// Initialize the tracing subscriber.
///
/// # Arguments
/// * `verbosity` - 0 = WARN (or `RUST_LOG`), 1 = DEBUG, 2+ = TRACE
///
/// A second call leaves the first subscriber in place.
pub fn init(verbosity: u8) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Some(level) = verbosity_level(verbosity) {
        filter = filter.add_directive(level.into());
    }

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}
