//! Built-in themes and where their stylesheets live.

use crate::color::ColorInput;
use crate::theme::{ColorsOverride, LinkOverride, ThemeOverride};

/// A named theme with a fixed output path.
#[derive(Clone, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub css_path: &'static str,
    pub theme: ThemeOverride,
}

/// All presets, in build order. `dev` regenerates the manual CSS file itself,
/// so it runs first and the rest pick up its refreshed tail.
pub fn all() -> Vec<Preset> {
    vec![
        Preset {
            name: "dev",
            description: "Default theme into the development stylesheet",
            css_path: "./lib/css-components.css",
            theme: ThemeOverride::default(),
        },
        Preset {
            name: "example",
            description: "Example page stylesheet",
            css_path: "./example/style.css",
            theme: brand("#005260", "#1F9562", "#009BC2"),
        },
        Preset {
            name: "minelev",
            description: "MinElev: Vann, Gress, Himmel",
            css_path: "./themes/minelev.css",
            theme: brand("#005260", "#1F9562", "#009BC2"),
        },
        Preset {
            name: "elevdok",
            description: "Elevdok: Blåveis, Plomme, Korn",
            css_path: "./themes/elevdok.css",
            theme: brand("#414681", "#5A2E61", "#A5983A"),
        },
    ]
}

pub fn find(name: &str) -> Option<Preset> {
    all().into_iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

fn brand(primary: &str, secondary: &str, tertiary: &str) -> ThemeOverride {
    ThemeOverride {
        colors: ColorsOverride {
            primary: Some(ColorInput::from(primary)),
            secondary: Some(ColorInput::from(secondary)),
            tertiary: Some(ColorInput::from(tertiary)),
            link: LinkOverride {
                base: Some(ColorInput::from("#005260")),
                hover: Some(ColorInput::from("#000000")),
            },
            font: Some(ColorInput::from("#000000")),
            ..ColorsOverride::default()
        },
        ..ThemeOverride::default()
    }
}
