pub mod tracing;

pub use tracing::{init_logging, LogFormat, LoggingConfig};

/// Minimal logging setup: compact text lines filtered by `RUST_LOG`
/// (default `info`). Does nothing if a subscriber is already installed.
pub fn init_minimal_logging() {
    let _ = init_logging(&LoggingConfig::default());
}
