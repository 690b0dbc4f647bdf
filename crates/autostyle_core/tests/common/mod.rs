//! Common test utilities: a throwaway project layout with package.json and manual CSS.

use std::fs;
use std::path::{Path, PathBuf};

use autostyle_core::FsSources;
use tempfile::TempDir;

pub const PACKAGE_JSON: &str = r#"{
  "name": "@vtfk/autostyle",
  "description": "Shared styling for VTFK apps",
  "version": "1.2.3",
  "license": "MIT"
}"#;

pub const MANUAL_CSS: &str = "/* stale generated content */\n:root {}\n/* END AUTO CSS */\n\n.button {\n\tcolor: var(--primary-color);\n}\n";

/// A temp project with `package.json` and `lib/css-components.css`.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self::with_manual_css(MANUAL_CSS)
    }

    pub fn with_manual_css(manual_css: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        fs::create_dir_all(dir.path().join("lib")).unwrap();
        fs::write(dir.path().join("package.json"), PACKAGE_JSON).unwrap();
        fs::write(dir.path().join("lib/css-components.css"), manual_css).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn sources(&self) -> FsSources {
        FsSources::rooted_at(self.root())
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }
}
