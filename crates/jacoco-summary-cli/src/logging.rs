//! Diagnostic logging setup.
//!
//! Events go to stderr; stdout is reserved for the rendered report.
//! `RUST_LOG` takes precedence over the `-v`/`--quiet` derived level.

use crate::config::Verbosity;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Log level for a verbosity setting
#[must_use]
pub const fn level_for(verbosity: Verbosity) -> LevelFilter {
    match verbosity {
        Verbosity::Quiet => LevelFilter::ERROR,
        Verbosity::Normal => LevelFilter::WARN,
        Verbosity::Verbose => LevelFilter::INFO,
        Verbosity::Debug => LevelFilter::DEBUG,
    }
}

/// Install the global subscriber; a second call is a no-op
pub fn init_logging(verbosity: Verbosity, color: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .without_time()
        .try_init();
}
