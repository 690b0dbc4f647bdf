//! Where the header metadata and the manual CSS come from.

use std::fs;
use std::path::{Path, PathBuf};

use autostyle_constant::app::{DEFAULT_MANUAL_CSS, DEFAULT_PACKAGE_JSON};

use crate::error::{AutostyleError, Result};
use crate::metadata::PackageMetadata;

/// External inputs read once per render.
pub trait StyleSources {
    fn metadata(&self) -> Result<PackageMetadata>;

    /// The full manual CSS file; only the part from the sentinel on is kept.
    fn manual_css(&self) -> Result<String>;
}

/// Reads `package.json` and the manual CSS file from disk.
#[derive(Clone, Debug)]
pub struct FsSources {
    pub package_json: PathBuf,
    pub manual_css: PathBuf,
}

impl Default for FsSources {
    fn default() -> Self {
        Self {
            package_json: PathBuf::from(DEFAULT_PACKAGE_JSON),
            manual_css: PathBuf::from(DEFAULT_MANUAL_CSS),
        }
    }
}

impl FsSources {
    pub fn new(package_json: impl Into<PathBuf>, manual_css: impl Into<PathBuf>) -> Self {
        Self {
            package_json: package_json.into(),
            manual_css: manual_css.into(),
        }
    }

    /// Both files relative to `root`, at their default locations.
    pub fn rooted_at(root: &Path) -> Self {
        Self::new(
            root.join(DEFAULT_PACKAGE_JSON),
            root.join(DEFAULT_MANUAL_CSS),
        )
    }
}

impl StyleSources for FsSources {
    fn metadata(&self) -> Result<PackageMetadata> {
        let raw = fs::read_to_string(&self.package_json)
            .map_err(|e| AutostyleError::io(&self.package_json, e))?;
        PackageMetadata::from_json(&raw).map_err(|e| AutostyleError::json(&self.package_json, e))
    }

    fn manual_css(&self) -> Result<String> {
        fs::read_to_string(&self.manual_css).map_err(|e| AutostyleError::io(&self.manual_css, e))
    }
}

/// In-memory sources, for embedding and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticSources {
    pub metadata: PackageMetadata,
    pub manual_css: String,
}

impl StaticSources {
    pub fn new(metadata: PackageMetadata, manual_css: impl Into<String>) -> Self {
        Self {
            metadata,
            manual_css: manual_css.into(),
        }
    }
}

impl StyleSources for StaticSources {
    fn metadata(&self) -> Result<PackageMetadata> {
        Ok(self.metadata.clone())
    }

    fn manual_css(&self) -> Result<String> {
        Ok(self.manual_css.clone())
    }
}
