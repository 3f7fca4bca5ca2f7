// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber for the CLI run.
///
/// `RUST_LOG` picks the filter (`warn` when unset). Everything is written to
/// stderr because stdout is reserved for the `passes total` line.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Logging to stderr with filter from RUST_LOG");
}
