//! Theme override (what callers pass) and resolved theme (what the renderer reads).
//!
//! Every leaf resolves on its own: a missing `colors.link.hover` falls back to
//! its default even when `colors.link.base` is set.

use autostyle_constant::theme::{FONT_FAMILY, colors};
use serde::Deserialize;

use crate::color::{ColorInput, Rgb};
use crate::error::Result;

/// Partial theme as read from JSON. Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeOverride {
    pub colors: ColorsOverride,
    pub typography: TypographyOverride,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorsOverride {
    pub primary: Option<ColorInput>,
    pub secondary: Option<ColorInput>,
    pub tertiary: Option<ColorInput>,
    pub link: LinkOverride,
    pub font: Option<ColorInput>,
    pub error: Option<ColorInput>,
    pub warning: Option<ColorInput>,
    pub success: Option<ColorInput>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkOverride {
    pub base: Option<ColorInput>,
    pub hover: Option<ColorInput>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographyOverride {
    pub font_family: Option<String>,
}

impl ThemeOverride {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Fill every missing leaf with its default and resolve all colors.
    pub fn resolve(&self) -> Result<Theme> {
        let c = &self.colors;
        Ok(Theme {
            colors: ThemeColors {
                primary: resolve_or(&c.primary, colors::PRIMARY)?,
                secondary: resolve_or(&c.secondary, colors::SECONDARY)?,
                tertiary: resolve_or(&c.tertiary, colors::TERTIARY)?,
                link: LinkColors {
                    base: resolve_or(&c.link.base, colors::LINK)?,
                    hover: resolve_or(&c.link.hover, colors::LINK_HOVER)?,
                },
                font: resolve_or(&c.font, colors::FONT)?,
                error: resolve_or(&c.error, colors::ERROR)?,
                warning: resolve_or(&c.warning, colors::WARNING)?,
                success: resolve_or(&c.success, colors::SUCCESS)?,
            },
            typography: Typography {
                font_family: self
                    .typography
                    .font_family
                    .clone()
                    .filter(|f| !f.is_empty())
                    .unwrap_or_else(|| FONT_FAMILY.to_string()),
            },
        })
    }
}

/// An empty hex string counts as unset, like an empty font family.
fn resolve_or(input: &Option<ColorInput>, default: (u8, u8, u8)) -> Result<Rgb> {
    match input {
        Some(ColorInput::Hex(hex)) if hex.is_empty() => Ok(default.into()),
        Some(input) => input.resolve(),
        None => Ok(default.into()),
    }
}

/// A fully resolved theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub colors: ThemeColors,
    pub typography: Typography,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub tertiary: Rgb,
    pub link: LinkColors,
    pub font: Rgb,
    pub error: Rgb,
    pub warning: Rgb,
    pub success: Rgb,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkColors {
    pub base: Rgb,
    pub hover: Rgb,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typography {
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: ThemeColors {
                primary: colors::PRIMARY.into(),
                secondary: colors::SECONDARY.into(),
                tertiary: colors::TERTIARY.into(),
                link: LinkColors {
                    base: colors::LINK.into(),
                    hover: colors::LINK_HOVER.into(),
                },
                font: colors::FONT.into(),
                error: colors::ERROR.into(),
                warning: colors::WARNING.into(),
                success: colors::SUCCESS.into(),
            },
            typography: Typography {
                font_family: FONT_FAMILY.to_string(),
            },
        }
    }
}

impl ThemeColors {
    /// The brand colors that get a full shade set, with their CSS names.
    pub fn brand(&self) -> [(&'static str, Rgb); 3] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("tertiary", self.tertiary),
        ]
    }

    /// Status colors that get a tinted background, with their CSS names.
    pub fn status(&self) -> [(&'static str, Rgb); 3] {
        [
            ("error", self.error),
            ("warning", self.warning),
            ("success", self.success),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutostyleError;
    use serde_json::json;

    #[test]
    fn empty_override_is_default_theme() {
        assert_eq!(ThemeOverride::default().resolve().unwrap(), Theme::default());
        let parsed = ThemeOverride::from_json("{}").unwrap();
        assert_eq!(parsed.resolve().unwrap(), Theme::default());
    }

    #[test]
    fn default_colors_match_hex() {
        let t = Theme::default();
        assert_eq!(t.colors.primary, Rgb::from_hex("#005260").unwrap());
        assert_eq!(t.colors.secondary, Rgb::from_hex("#1F9562").unwrap());
        assert_eq!(t.colors.tertiary, Rgb::from_hex("#009BC2").unwrap());
        assert_eq!(t.colors.error, Rgb::from_hex("#B7173D").unwrap());
        assert_eq!(t.colors.warning, Rgb::from_hex("#BC7726").unwrap());
        assert_eq!(t.colors.success, Rgb::from_hex("#2F7542").unwrap());
    }

    #[test]
    fn leaves_default_independently() {
        let o: ThemeOverride = serde_json::from_value(json!({
            "colors": { "primary": "#414681", "link": { "hover": [1, 2, 3] } },
            "typography": { "fontFamily": "Georgia, serif", "fontSize": "16px" }
        }))
        .unwrap();
        let t = o.resolve().unwrap();
        assert_eq!(t.colors.primary, Rgb(65, 70, 129));
        assert_eq!(t.colors.secondary, Rgb(31, 149, 98));
        assert_eq!(t.colors.link.base, Rgb(0, 82, 96));
        assert_eq!(t.colors.link.hover, Rgb(1, 2, 3));
        assert_eq!(t.typography.font_family, "Georgia, serif");
    }

    #[test]
    fn empty_font_family_falls_back() {
        let o: ThemeOverride =
            serde_json::from_value(json!({ "typography": { "fontFamily": "" } })).unwrap();
        assert_eq!(o.resolve().unwrap().typography.font_family, FONT_FAMILY);
    }

    #[test]
    fn empty_color_string_falls_back() {
        let o: ThemeOverride = serde_json::from_value(json!({
            "colors": { "primary": "", "link": { "hover": "" } }
        }))
        .unwrap();
        let t = o.resolve().unwrap();
        assert_eq!(t.colors.primary, Rgb(0, 82, 96));
        assert_eq!(t.colors.link.hover, Rgb(0, 0, 0));
    }

    #[test]
    fn bad_color_fails_whole_resolution() {
        let o: ThemeOverride =
            serde_json::from_value(json!({ "colors": { "warning": "orange" } })).unwrap();
        assert!(matches!(o.resolve(), Err(AutostyleError::InvalidFormat(_))));

        let o: ThemeOverride =
            serde_json::from_value(json!({ "colors": { "font": 0 } })).unwrap();
        assert!(matches!(
            o.resolve(),
            Err(AutostyleError::UnsupportedColorType(_))
        ));
    }

    #[test]
    fn brand_and_status_names() {
        let t = Theme::default();
        let brand: Vec<&str> = t.colors.brand().iter().map(|(n, _)| *n).collect();
        assert_eq!(brand, ["primary", "secondary", "tertiary"]);
        let status: Vec<&str> = t.colors.status().iter().map(|(n, _)| *n).collect();
        assert_eq!(status, ["error", "warning", "success"]);
    }
}
