//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber. `RUST_LOG` overrides the
/// provided default filter. Call once per process.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Test variant: ignores double initialization across test binaries.
pub fn try_init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
