//! autostyle observability - tracing subscriber setup shared by the binaries
//!
//! # Quick Start
//!
//! ```no_run
//! use autostyle_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("autostyle").with_log_level("debug");
//! init(config)?;
//!
//! tracing::info!("ready");
//! # Ok::<(), autostyle_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `AUTOSTYLE_LOG` or `RUST_LOG` - Log level filter
//!
//! Logs go to stderr so generated CSS can be piped from stdout.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
pub use self::tracing::{record_duration, record_error};
