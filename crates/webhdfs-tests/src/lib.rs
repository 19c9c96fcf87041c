//! Integration tests for the REST client.
//!
//! The harness provides an in-memory mock server mounted behind the
//! transport seam, so full client scenarios run without a network: metadata
//! round trips, two-hop data transfer, endpoint failover and error
//! translation.

pub mod harness;

mod filesystem_scenarios;
mod transfer_scenarios;

pub use harness::{client, client_with_addresses, FlakyTransport, MockFs, DATANODE, NAMENODE};

/// Installs a compact subscriber for test debugging; safe to call from every
/// test, only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
