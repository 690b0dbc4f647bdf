//! Default theme values.
//!
//! Colors are (R, G, B) tuples so any crate can use them without pulling in
//! the core color type.

/// Default brand and semantic colors
pub mod colors {
    /// Primary, "Vann" — #005260
    pub const PRIMARY: (u8, u8, u8) = (0, 82, 96);
    /// Secondary, "Gress" — #1F9562
    pub const SECONDARY: (u8, u8, u8) = (31, 149, 98);
    /// Tertiary, "Himmel" — #009BC2
    pub const TERTIARY: (u8, u8, u8) = (0, 155, 194);
    /// Link — #005260
    pub const LINK: (u8, u8, u8) = (0, 82, 96);
    /// Link hover, "Sort" — #000000
    pub const LINK_HOVER: (u8, u8, u8) = (0, 0, 0);
    /// Body text — #000000
    pub const FONT: (u8, u8, u8) = (0, 0, 0);
    /// Error, "Nype" — #B7173D
    pub const ERROR: (u8, u8, u8) = (183, 23, 61);
    /// Warning, "Siv" — #BC7726
    pub const WARNING: (u8, u8, u8) = (188, 119, 38);
    /// Success, "Gran" — #2F7542
    pub const SUCCESS: (u8, u8, u8) = (47, 117, 66);
}

/// Default font stack for `html, body`
pub const FONT_FAMILY: &str = "'Nunito Sans', Lato, 'Trebuchet MS', sans-serif";

/// Tint applied to primary for the page background
pub const PRIMARY_BACKGROUND_TINT: f64 = 0.05;
/// Tint applied to error/warning/success for their backgrounds
pub const STATUS_BACKGROUND_TINT: f64 = 0.2;

/// Static typography scale, assuming 1rem = 16px.
pub const FONT_SIZES: &[(&str, &str)] = &[
    ("font-size-root", "1rem"),
    ("font-size-extra-large", "2rem"),
    ("font-size-large", "1.5rem"),
    ("font-size-small", "0.9rem"),
    ("font-size-extra-small", "0.8rem"),
];

/// Static spacing scale.
pub const SPACINGS: &[(&str, &str)] = &[
    ("spacing", "1rem"),
    ("spacing-extra-small", "0.25rem"),
    ("spacing-small", "0.5rem"),
    ("spacing-large", "1.5rem"),
    ("spacing-extra-large", "2rem"),
];
