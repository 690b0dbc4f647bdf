//! `autostyle generate` and `autostyle print`.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use autostyle_core::{FsSources, ThemeOverride, generate_css_file, generate_css_string};
use autostyle_observability::{record_duration, record_error, render_span};

use crate::cli::{SourceArgs, ThemeArgs};
use crate::output;

pub fn handle_generate(args: &ThemeArgs, css_path: &Path) -> Result<()> {
    let span = render_span!("generate", css_path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let theme = load_theme(args.theme.as_deref())?;
    let options = args.options().with_css_path(css_path);
    generate_css_file(&theme, &options, &sources(&args.sources))
        .inspect_err(|e| record_error(e))
        .with_context(|| format!("failed to generate {}", css_path.display()))?;

    record_duration("duration_ms", start.elapsed());
    output::success(&format!("Wrote {}", css_path.display()));
    Ok(())
}

pub fn handle_print(args: &ThemeArgs) -> Result<()> {
    let span = render_span!("print", "stdout");
    let _guard = span.enter();
    let start = Instant::now();

    let theme = load_theme(args.theme.as_deref())?;
    let css = generate_css_string(&theme, &args.options(), &sources(&args.sources))
        .inspect_err(|e| record_error(e))
        .context("failed to generate stylesheet")?;

    record_duration("duration_ms", start.elapsed());
    output::css("print", &css);
    Ok(())
}

pub fn sources(args: &SourceArgs) -> FsSources {
    FsSources::new(&args.package, &args.manual_css)
}

/// Read a theme override from a JSON file; no file means all defaults.
pub fn load_theme(path: Option<&Path>) -> Result<ThemeOverride> {
    let Some(path) = path else {
        return Ok(ThemeOverride::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read theme {}", path.display()))?;
    ThemeOverride::from_json(&raw)
        .with_context(|| format!("invalid theme JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use autostyle_core::ColorInput;
    use tempfile::TempDir;

    #[test]
    fn no_theme_file_is_default() {
        assert_eq!(load_theme(None).unwrap(), ThemeOverride::default());
    }

    #[test]
    fn theme_file_is_parsed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, r##"{ "colors": { "primary": "#414681" } }"##).unwrap();
        let theme = load_theme(Some(&path)).unwrap();
        assert_eq!(theme.colors.primary, Some(ColorInput::from("#414681")));
    }

    #[test]
    fn bad_theme_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, "{ colors").unwrap();
        let err = load_theme(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("theme.json"));
    }
}
