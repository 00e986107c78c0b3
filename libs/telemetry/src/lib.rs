//! Logging bootstrap for services embedding `ctree-core`.
//!
//! The core only emits `tracing` events and `metrics` counters; binaries call [`install`] once at
//! startup to route those events to stdout.

use anyhow::Result;

mod config;
mod tracing_init;

pub use config::{LogFormat, TelemetryConfig};
pub use tracing_init::{init_tracing, tracing_initialised};

/// Installs the subscriber configured from the environment.
pub fn install(service_name: &str) -> Result<()> {
    init_tracing(&TelemetryConfig::from_env(service_name))
}
