//! Process-wide observability setup (tracing/logging).

use tracing_subscriber::EnvFilter;

/// Install the process-wide tracing subscriber: JSON lines, level filtering
/// via `RUST_LOG`, `info` by default.
///
/// Safe to call more than once; later calls become no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
