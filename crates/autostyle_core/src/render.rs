//! Stylesheet rendering: `:root` variables, body boilerplate, manual CSS merge.

use std::fs;
use std::path::Path;

use autostyle_constant::app::END_AUTO_CSS;
use autostyle_constant::theme::{
    FONT_SIZES, PRIMARY_BACKGROUND_TINT, SPACINGS, STATUS_BACKGROUND_TINT,
};
use tracing::{debug, info, warn};

use crate::color::{ColorVariants, Rgb};
use crate::config::RenderConfig;
use crate::emitter::CssWriter;
use crate::error::{AutostyleError, Result};
use crate::metadata::PackageMetadata;
use crate::theme::Theme;

/// Render `theme` and return the generated CSS.
///
/// Unless `config.only_color_theming` is set, the manual fragment is merged
/// from its sentinel line on, and with `config.generate_file` the merged
/// stylesheet is written to `config.output_path`. The return value is always
/// the generated part alone.
pub fn render(
    theme: &Theme,
    config: &RenderConfig,
    metadata: &PackageMetadata,
    manual_css: &str,
) -> Result<String> {
    if config.add_dark_mode {
        warn!("addDarkMode is reserved and has no effect");
    }

    let mut w = CssWriter::new();
    write_header(&mut w, metadata);
    write_root(&mut w, theme);

    if config.only_color_theming {
        debug!("only color theming requested; skipping body rule and manual CSS");
        return Ok(w.finish());
    }

    write_body(&mut w, theme);
    let generated = w.finish();

    let manual = manual_tail(manual_css)?;
    if config.generate_file {
        write_stylesheet(&config.output_path, &format!("{generated}{manual}"))?;
    }
    Ok(generated)
}

/// The manual fragment from the sentinel line (inclusive) to the end.
pub fn manual_tail(fragment: &str) -> Result<&str> {
    fragment
        .find(END_AUTO_CSS)
        .map(|at| &fragment[at..])
        .ok_or(AutostyleError::MalformedFragment {
            sentinel: END_AUTO_CSS,
        })
}

fn write_header(w: &mut CssWriter, metadata: &PackageMetadata) {
    for line in metadata.header_lines() {
        w.emit(line);
    }
    w.blank();
}

fn write_root(w: &mut CssWriter, theme: &Theme) {
    let colors = &theme.colors;

    w.emit(":root {");
    w.emit("/* COLOR VARIANTS */");
    for (name, base) in colors.brand() {
        for (shade, rgb) in ColorVariants::derive(base).iter() {
            w.emit(var(&format!("{name}-color{}", shade.suffix()), rgb));
        }
    }
    w.blank();

    w.emit("/* SPECIFIC COLORS */");
    w.emit(var(
        "primary-background-color",
        colors.primary.tint(PRIMARY_BACKGROUND_TINT),
    ));
    w.emit(var("font-color", colors.font));
    w.emit(var("font-color-inverted", colors.font.invert()));
    w.emit(var("link-color", colors.link.base));
    w.emit(var("link-color-hover", colors.link.hover));
    for (name, rgb) in colors.status() {
        w.emit(var(&format!("{name}-color"), rgb));
        w.emit(var(
            &format!("{name}-background-color"),
            rgb.tint(STATUS_BACKGROUND_TINT),
        ));
    }
    w.blank();

    w.emit("/* SIZES */");
    for (name, value) in FONT_SIZES.iter().chain(SPACINGS) {
        w.emit(format!("--{name}: {value};"));
    }
    w.emit("}");
    w.blank();
}

fn write_body(w: &mut CssWriter, theme: &Theme) {
    w.emit("/* HTML BODY */");
    w.emit("html, body {");
    w.emit(format!("font-family: {};", theme.typography.font_family));
    w.emit("color: var(--font-color);");
    w.emit("background-color: var(--primary-background-color);");
    w.emit("margin: 0rem;");
    w.emit("padding: 0rem;");
    w.emit("min-height: 100vh;");
    w.emit("}");
    w.blank();
}

fn var(name: &str, rgb: Rgb) -> String {
    format!("--{name}: {rgb};")
}

/// Remove any existing file, then write. Not atomic.
fn write_stylesheet(path: &Path, css: &str) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| AutostyleError::io(path, e))?;
    }
    fs::write(path, css).map_err(|e| AutostyleError::io(path, e))?;
    info!(path = %path.display(), bytes = css.len(), "stylesheet written");
    Ok(())
}
