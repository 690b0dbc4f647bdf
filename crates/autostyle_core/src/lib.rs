//! autostyle core: turn a few brand colors into a themed stylesheet.
//!
//! A partial [`ThemeOverride`] is resolved against the defaults, each brand
//! color is expanded into ten tones, and the result is written as CSS custom
//! properties under `:root`. Unless only color theming is requested, a
//! `html, body` rule follows and the hand-written tail of the manual CSS
//! file (from `/* END AUTO CSS */` on) is appended.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use autostyle_core::{FsSources, RenderOptions, ThemeOverride, generate_css_file};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let theme = ThemeOverride::from_json(r##"{ "colors": { "primary": "#414681" } }"##)?;
//!     let options = RenderOptions::new().with_css_path("./themes/custom.css");
//!     let css = generate_css_file(&theme, &options, &FsSources::default())?;
//!     println!("{css}");
//!     Ok(())
//! }
//! ```

pub mod color;
pub mod config;
pub mod emitter;
pub mod error;
pub mod generate;
pub mod metadata;
pub mod presets;
pub mod render;
pub mod sources;
pub mod theme;

pub use color::{ColorInput, ColorVariants, Rgb, Shade};
pub use config::{RenderConfig, RenderOptions};
pub use emitter::CssWriter;
pub use error::{AutostyleError, Result};
pub use generate::{generate_css_file, generate_css_string};
pub use metadata::PackageMetadata;
pub use presets::Preset;
pub use render::render;
pub use sources::{FsSources, StaticSources, StyleSources};
pub use theme::{Theme, ThemeOverride};
