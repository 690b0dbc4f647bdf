//! Configuration for logging

use autostyle_constant::app::ENV_LOG;
use serde::{Deserialize, Serialize};

/// Observability configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name attached to the root span
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Write formatted events to stderr
    #[serde(default = "default_enable_console")]
    pub enable_console: bool,

    /// Log level filter (e.g., "info", "autostyle_core=debug")
    /// Defaults to "warn" if not set
    pub log_level: Option<String>,

    /// Include event targets (module paths) in output
    #[serde(default)]
    pub with_target: bool,
}

fn default_service_name() -> String {
    autostyle_constant::app::NAME.to_string()
}

fn default_enable_console() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            enable_console: true,
            log_level: None,
            with_target: false,
        }
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Show event targets
    pub fn with_target(mut self, on: bool) -> Self {
        self.with_target = on;
        self
    }

    /// Build from environment variables
    ///
    /// Reads `AUTOSTYLE_LOG` or `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        let log_level = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();

        Self {
            log_level,
            ..Default::default()
        }
    }
}
