//! Application metadata and default locations

pub const NAME: &str = "autostyle";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Generates a themed CSS stylesheet from a handful of brand colors";

/// Output path when the caller does not pass `cssPath`
pub const DEFAULT_CSS_PATH: &str = "./autoStyle.css";
/// Package metadata consulted for the header comment
pub const DEFAULT_PACKAGE_JSON: &str = "./package.json";
/// Hand-maintained CSS whose tail is appended after the generated block
pub const DEFAULT_MANUAL_CSS: &str = "./lib/css-components.css";

/// Marker line in the manual CSS; everything from here on is kept verbatim.
pub const END_AUTO_CSS: &str = "/* END AUTO CSS */";

/// Environment overrides read by the CLI
pub const ENV_CSS_PATH: &str = "AUTOSTYLE_CSS_PATH";
pub const ENV_PACKAGE_JSON: &str = "AUTOSTYLE_PACKAGE_JSON";
pub const ENV_MANUAL_CSS: &str = "AUTOSTYLE_MANUAL_CSS";
pub const ENV_LOG: &str = "AUTOSTYLE_LOG";
