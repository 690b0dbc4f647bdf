//! Logging setup errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Another global subscriber is already installed
    #[error("autostyle logging already set up: {0}")]
    InitFailed(String),

    /// `AUTOSTYLE_LOG` / `RUST_LOG` is not a valid filter directive
    #[error("invalid log filter: {0}")]
    Config(String),
}
