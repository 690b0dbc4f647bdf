//! Color deriver: hex parsing, tints toward white, inversion and tonal shades.
//!
//! All blending is linear in 8-bit sRGB. A blend at `percent` keeps that
//! fraction of the color's distance from white:
//!
//! ```text
//! channel + (255 - channel) * (1 - percent)
//! ```
//!
//! so `percent = 1.0` is the color itself and `percent = 0.0` is white.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AutostyleError, Result};

/// Fixed-point scale for blend weights. Working in basis points keeps exact
/// decimal halves (e.g. 25.5) from drifting below .5 in binary floats.
const BASIS_POINTS: u32 = 10_000;

/// RGB triplet. Displays as the CSS function `rgb(r, g, b)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    pub fn r(self) -> u8 {
        self.0
    }
    pub fn g(self) -> u8 {
        self.1
    }
    pub fn b(self) -> u8 {
        self.2
    }

    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }

    /// Parse `#RRGGBB` or `RRGGBB`, case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AutostyleError::InvalidFormat(format!(
                "input {hex:?} was not a 6-digit hex color"
            )));
        }
        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16)
                .map_err(|e| AutostyleError::InvalidFormat(format!("{hex:?}: {e}")))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Blend toward white, keeping `percent` (0.0–1.0, clamped) of the color.
    pub fn tint(self, percent: f64) -> Self {
        let keep = (percent.clamp(0.0, 1.0) * f64::from(BASIS_POINTS)).round() as u32;
        Rgb(
            blend_channel(self.0, keep),
            blend_channel(self.1, keep),
            blend_channel(self.2, keep),
        )
    }

    /// `255 - channel` on every channel.
    pub fn invert(self) -> Self {
        Rgb(255 - self.0, 255 - self.1, 255 - self.2)
    }

    /// The base color plus its nine tones, see [`ColorVariants`].
    pub fn variants(self) -> ColorVariants {
        ColorVariants::derive(self)
    }
}

/// Rounds half away from zero; every term is non-negative so adding half the
/// scale before the integer division does exactly that.
fn blend_channel(channel: u8, keep: u32) -> u8 {
    let c = u32::from(channel);
    let scaled = c * BASIS_POINTS + (255 - c) * (BASIS_POINTS - keep);
    u8::try_from((scaled + BASIS_POINTS / 2) / BASIS_POINTS).unwrap_or(u8::MAX)
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        c.tuple()
    }
}

// ---------------------------------------------------------------------------
// Shades
// ---------------------------------------------------------------------------

/// Key of one entry in a [`ColorVariants`] set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shade {
    /// The unmodified input color.
    Base,
    /// A tone keeping `n` percent of the color, `n` in 10..=90.
    Tone(u8),
}

impl Shade {
    /// Emission order: base first, then tones from darkest to lightest.
    pub const ALL: [Shade; 10] = [
        Shade::Base,
        Shade::Tone(90),
        Shade::Tone(80),
        Shade::Tone(70),
        Shade::Tone(60),
        Shade::Tone(50),
        Shade::Tone(40),
        Shade::Tone(30),
        Shade::Tone(20),
        Shade::Tone(10),
    ];

    /// `"base"`, `"90"`, ... `"10"`.
    pub fn key(self) -> String {
        match self {
            Shade::Base => "base".to_string(),
            Shade::Tone(n) => n.to_string(),
        }
    }

    /// Suffix for the custom property name; empty for the base color.
    pub fn suffix(self) -> String {
        match self {
            Shade::Base => String::new(),
            Shade::Tone(n) => format!("-{n}"),
        }
    }

    /// Fraction of the base color kept by this shade.
    pub fn percent(self) -> f64 {
        match self {
            Shade::Base => 1.0,
            Shade::Tone(n) => f64::from(n) / 100.0,
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// One brand color expanded into its base and nine tones, in [`Shade::ALL`] order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorVariants {
    entries: Vec<(Shade, Rgb)>,
}

impl ColorVariants {
    pub fn derive(base: Rgb) -> Self {
        let entries = Shade::ALL
            .iter()
            .map(|&shade| match shade {
                Shade::Base => (shade, base),
                Shade::Tone(_) => (shade, base.tint(shade.percent())),
            })
            .collect();
        Self { entries }
    }

    pub fn base(&self) -> Rgb {
        self.entries[0].1
    }

    pub fn get(&self, shade: Shade) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|(s, _)| *s == shade)
            .map(|(_, rgb)| *rgb)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Shade, Rgb)> + '_ {
        self.entries.iter().copied()
    }
}

// ---------------------------------------------------------------------------
// ColorInput
// ---------------------------------------------------------------------------

/// A color as a caller writes it in a theme override.
///
/// Deserializes from any JSON value; unsupported shapes land in
/// [`ColorInput::Other`] and fail at [`ColorInput::resolve`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Hex(String),
    Rgb(Rgb),
    Channels(Vec<f64>),
    Other(Value),
}

impl ColorInput {
    pub fn resolve(&self) -> Result<Rgb> {
        match self {
            ColorInput::Hex(hex) => Rgb::from_hex(hex),
            ColorInput::Rgb(rgb) => Ok(*rgb),
            ColorInput::Channels(channels) => {
                let &[r, g, b] = channels.as_slice() else {
                    return Err(AutostyleError::UnsupportedColorType(format!(
                        "expected 3 channels, got {channels:?}"
                    )));
                };
                Ok(Rgb(channel(r)?, channel(g)?, channel(b)?))
            }
            ColorInput::Other(value) => Err(AutostyleError::UnsupportedColorType(format!(
                "color on format {value} is not supported"
            ))),
        }
    }
}

fn channel(value: f64) -> Result<u8> {
    if value.fract() == 0.0 && (0.0..=255.0).contains(&value) {
        Ok(value as u8)
    } else {
        Err(AutostyleError::InvalidFormat(format!(
            "channel {value} is not an integer in 0..=255"
        )))
    }
}

impl From<Rgb> for ColorInput {
    fn from(rgb: Rgb) -> Self {
        ColorInput::Rgb(rgb)
    }
}

impl From<&str> for ColorInput {
    fn from(hex: &str) -> Self {
        ColorInput::Hex(hex.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(hex: String) -> Self {
        ColorInput::Hex(hex)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
