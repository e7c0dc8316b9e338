//! Logging setup shared by binaries and tests.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG` when set; otherwise the given
/// application name is filtered at `default_level`.
pub fn setup_logger(app_name: &str, default_level: &str) {
    let default_directive = format!("{}={}", app_name.replace('-', "_"), default_level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
