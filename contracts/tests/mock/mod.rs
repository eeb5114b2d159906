//! Implementations deployed behind proxies in the integration tests.
#![allow(dead_code)]

pub mod accessible;
pub mod proxied;

/// Installs a `tracing` subscriber that writes through the test harness.
///
/// Filtered by `RUST_LOG`, silent by default.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
