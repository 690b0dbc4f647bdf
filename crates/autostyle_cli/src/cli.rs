//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use autostyle_constant::app::{
    DEFAULT_CSS_PATH, DEFAULT_MANUAL_CSS, DEFAULT_PACKAGE_JSON, ENV_CSS_PATH, ENV_MANUAL_CSS,
    ENV_PACKAGE_JSON,
};
use autostyle_core::RenderOptions;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Generate a themed CSS stylesheet from a handful of brand colors
#[derive(Parser)]
#[command(name = "autostyle", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the stylesheet and write it (generated + manual CSS) to a file
    Generate {
        #[command(flatten)]
        theme: ThemeArgs,
        /// Output file
        #[arg(long, env = ENV_CSS_PATH, default_value = DEFAULT_CSS_PATH)]
        css_path: PathBuf,
    },
    /// Print the generated part of the stylesheet to stdout
    Print {
        #[command(flatten)]
        theme: ThemeArgs,
    },
    /// Show the ten shades derived from one color
    Palette {
        /// Hex color (#005260) or comma-separated channels (0,82,96)
        color: String,
    },
    /// Built-in themes
    Presets {
        #[command(subcommand)]
        action: PresetsAction,
    },
}

#[derive(Subcommand)]
pub enum PresetsAction {
    /// List built-in themes and their output paths
    List,
    /// Regenerate the stylesheet of every built-in theme
    Build {
        /// Build a single preset by name
        #[arg(long)]
        only: Option<String>,
        #[command(flatten)]
        sources: SourceArgs,
    },
}

/// Theme and render flags shared by `generate` and `print`.
#[derive(Args, Clone, Debug)]
pub struct ThemeArgs {
    /// JSON file with a partial theme ({"colors": {...}, "typography": {...}})
    #[arg(short, long)]
    pub theme: Option<PathBuf>,

    /// Emit only the :root color block (no body rule, no manual CSS)
    #[arg(long)]
    pub only_color_theming: bool,

    /// Reserved; accepted and ignored
    #[arg(long)]
    pub add_dark_mode: bool,

    #[command(flatten)]
    pub sources: SourceArgs,
}

impl ThemeArgs {
    pub fn options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_only_color_theming(self.only_color_theming)
            .with_dark_mode(self.add_dark_mode)
    }
}

/// Locations of package metadata and manual CSS.
#[derive(Args, Clone, Debug)]
pub struct SourceArgs {
    /// package.json supplying name, description, version and license
    #[arg(long, env = ENV_PACKAGE_JSON, default_value = DEFAULT_PACKAGE_JSON)]
    pub package: PathBuf,

    /// Manual CSS file containing the "/* END AUTO CSS */" line
    #[arg(long, env = ENV_MANUAL_CSS, default_value = DEFAULT_MANUAL_CSS)]
    pub manual_css: PathBuf,
}
