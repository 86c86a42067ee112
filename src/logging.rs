//! Logging Initialization
//!
//! Tracing subscriber setup for the backend. `RUST_LOG` overrides the
//! default filter.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber. Safe to call once at startup;
/// a second call is ignored (tests may race on the global).
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
