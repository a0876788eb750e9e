use std::io;
use tracing_subscriber::EnvFilter;

/// Installs the stderr tracing subscriber. Stdout is reserved for the JSON
/// report, so every diagnostic goes through this subscriber. Honors
/// RUST_LOG, defaulting to info.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
