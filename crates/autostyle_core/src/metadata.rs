//! Package metadata shown in the stylesheet header.

use serde::Deserialize;

/// The four `package.json` fields the header uses. Other fields are ignored;
/// missing ones render as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PackageMetadata {
    pub name: String,
    pub description: String,
    pub version: String,
    pub license: String,
}

impl PackageMetadata {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            version: version.into(),
            license: license.into(),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Header comment lines, without the trailing blank line.
    pub fn header_lines(&self) -> [String; 3] {
        [
            format!("/* {} - {} */", self.name, self.description),
            format!("/* VERSION: {} */", self.version),
            format!("/* License: {} */", self.license),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_package_json_ignoring_extra_fields() {
        let meta = PackageMetadata::from_json(
            r#"{
                "name": "@vtfk/autostyle",
                "description": "Shared styling",
                "version": "1.4.0",
                "license": "MIT",
                "type": "module",
                "scripts": { "build": "node scripts/update-dev.js" }
            }"#,
        )
        .unwrap();
        assert_eq!(meta, PackageMetadata::new("@vtfk/autostyle", "Shared styling", "1.4.0", "MIT"));
    }

    #[test]
    fn missing_fields_are_empty() {
        let meta = PackageMetadata::from_json(r#"{ "name": "x" }"#).unwrap();
        assert_eq!(meta.version, "");
        assert_eq!(meta.header_lines()[1], "/* VERSION:  */");
    }

    #[test]
    fn header_lines_format() {
        let meta = PackageMetadata::new("pkg", "desc", "0.1.0", "MIT");
        assert_eq!(
            meta.header_lines(),
            [
                "/* pkg - desc */".to_string(),
                "/* VERSION: 0.1.0 */".to_string(),
                "/* License: MIT */".to_string(),
            ]
        );
    }
}
