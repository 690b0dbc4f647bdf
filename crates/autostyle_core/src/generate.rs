//! The two entry points: render to a string, or render and write the file.

use tracing::debug;

use crate::config::{RenderConfig, RenderOptions};
use crate::error::Result;
use crate::render::render;
use crate::sources::StyleSources;
use crate::theme::ThemeOverride;

/// Render without touching the filesystem, whatever `generateCssFile` says.
pub fn generate_css_string(
    theme: &ThemeOverride,
    options: &RenderOptions,
    sources: &dyn StyleSources,
) -> Result<String> {
    let options = options.clone().with_generate_css_file(false);
    generate(theme, options, sources)
}

/// Render and write the merged stylesheet to `cssPath`.
pub fn generate_css_file(
    theme: &ThemeOverride,
    options: &RenderOptions,
    sources: &dyn StyleSources,
) -> Result<String> {
    let options = options.clone().with_generate_css_file(true);
    generate(theme, options, sources)
}

fn generate(
    theme: &ThemeOverride,
    options: RenderOptions,
    sources: &dyn StyleSources,
) -> Result<String> {
    let theme = theme.resolve()?;
    let config = RenderConfig::from(options);

    // Both reads happen before any rendering so a missing source never
    // leaves a half-written stylesheet behind.
    let metadata = sources.metadata()?;
    let manual_css = sources.manual_css()?;
    debug!(
        package = %metadata.name,
        output = %config.output_path.display(),
        write = config.generate_file,
        "rendering stylesheet"
    );

    render(&theme, &config, &metadata, &manual_css)
}
