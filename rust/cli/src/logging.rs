//! Diagnostic logging setup for the `sniper` binary.
//!
//! Engine events are emitted through `tracing`; this installs a `fmt` subscriber that
//! writes them to stderr, filtered by `RUST_LOG` (default `warn`).

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
