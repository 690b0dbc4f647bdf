//! Render options as callers pass them, and the resolved render configuration.

use std::path::PathBuf;

use autostyle_constant::app::DEFAULT_CSS_PATH;
use serde::Deserialize;

/// Caller-facing options. Keys match the JSON option object
/// (`generateCssFile`, `addDarkMode`, `cssPath`, `onlyColorTheming`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    pub generate_css_file: bool,
    /// Accepted but reserved; has no effect on the output.
    pub add_dark_mode: bool,
    pub css_path: Option<PathBuf>,
    pub only_color_theming: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_css_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.css_path = Some(path.into());
        self
    }

    pub fn with_only_color_theming(mut self, on: bool) -> Self {
        self.only_color_theming = on;
        self
    }

    pub fn with_dark_mode(mut self, on: bool) -> Self {
        self.add_dark_mode = on;
        self
    }

    pub fn with_generate_css_file(mut self, on: bool) -> Self {
        self.generate_css_file = on;
        self
    }
}

/// Resolved configuration for a single render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Write the full stylesheet (generated + manual) to `output_path`
    pub generate_file: bool,
    /// Reserved
    pub add_dark_mode: bool,
    pub output_path: PathBuf,
    /// Stop after the `:root` block: no body rule, no manual CSS, no file
    pub only_color_theming: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderOptions::default().into()
    }
}

impl From<RenderOptions> for RenderConfig {
    fn from(options: RenderOptions) -> Self {
        Self {
            generate_file: options.generate_css_file,
            add_dark_mode: options.add_dark_mode,
            output_path: options
                .css_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CSS_PATH)),
            only_color_theming: options.only_color_theming,
        }
    }
}
