//! Subscriber initialization
//!
//! Composes an `EnvFilter` with an optional stderr `fmt` layer on a
//! `Registry`, then installs it as the global default.

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;

const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing with the given configuration
///
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = build_filter(config.log_level.as_deref())?;

    // Build layers first, then compose once
    let fmt_layer = config.enable_console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.with_target)
    });

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(service.name = %config.service_name, "tracing initialized");
    Ok(())
}

fn build_filter(level: Option<&str>) -> Result<EnvFilter, ObservabilityError> {
    match level {
        Some(level) => {
            EnvFilter::try_new(level).map_err(|e| ObservabilityError::Config(e.to_string()))
        }
        None => Ok(EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Initialize with default configuration from environment variables
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_filter() {
        assert!(build_filter(Some("autostyle_core=debug,info")).is_ok());
        assert!(build_filter(None).is_ok());
    }

    #[test]
    fn test_invalid_filter_is_config_error() {
        let err = build_filter(Some("autostyle_core=loudest")).unwrap_err();
        assert!(matches!(err, ObservabilityError::Config(_)));
    }
}
