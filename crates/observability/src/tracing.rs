//! Tracing/logging initialization.
//!
//! Decision logging matters here: denials and cache activity are emitted at
//! `warn`/`debug` by the auth and policy crates, so the default filter keeps
//! the eventdesk crates chatty while the rest of the process stays at info.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,eventdesk_auth=debug,eventdesk_policy=debug"));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
