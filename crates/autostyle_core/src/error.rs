//! Error types for stylesheet generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving a theme or rendering CSS.
#[derive(Error, Debug)]
pub enum AutostyleError {
    /// A color string or channel list that could not be parsed
    #[error("invalid color format: {0}")]
    InvalidFormat(String),

    /// A color value that is neither a hex string nor an RGB triple
    #[error("unsupported color type: {0}")]
    UnsupportedColorType(String),

    /// The manual CSS fragment does not contain the sentinel line
    #[error(
        "manual CSS has no end-of-auto-content line; add \"{sentinel}\" above the manual CSS content"
    )]
    MalformedFragment { sentinel: &'static str },

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AutostyleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

/// Result type for autostyle operations.
pub type Result<T> = std::result::Result<T, AutostyleError>;
