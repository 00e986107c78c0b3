use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing_subscriber::layer::Layer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::TelemetryConfig;

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber. Later calls only validate `cfg`.
pub fn init_tracing(cfg: &TelemetryConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&cfg.filter)
        .with_context(|| format!("invalid log filter `{}`", cfg.filter))?;
    if INIT.get().is_some() {
        return Ok(());
    }

    let fmt_layer = if cfg.json_logs() {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    // Another subscriber may already be installed by the host; keep it.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .ok();

    INIT.set(()).ok();
    tracing::debug!(service = %cfg.service_name, "tracing initialised");
    Ok(())
}

pub fn tracing_initialised() -> bool {
    INIT.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_filter() {
        let cfg = TelemetryConfig {
            filter: "ctree_core=loud".into(),
            ..TelemetryConfig::new("ctree")
        };
        let err = init_tracing(&cfg).unwrap_err();
        assert!(err.to_string().contains("invalid log filter"), "{err}");
    }

    #[test]
    fn init_is_idempotent() {
        let cfg = TelemetryConfig::new("ctree");
        init_tracing(&cfg).unwrap();
        init_tracing(&cfg).unwrap();
        assert!(tracing_initialised());
    }
}
