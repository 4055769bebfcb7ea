// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported data

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }

    /// Format implied by a file name's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }

    pub fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("yml"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::parse("toml"), None);
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("audit.YML")),
            Some(OutputFormat::Yaml)
        );
        assert_eq!(OutputFormat::from_path(Path::new("audit")), None);
    }

    #[test]
    fn serializes_both_formats() {
        let mut value = BTreeMap::new();
        value.insert("home", "Startseite");
        let json = OutputFormat::Json.serialize(&value).expect("json");
        assert!(json.contains("\"home\": \"Startseite\""));
        let yaml = OutputFormat::Yaml.serialize(&value).expect("yaml");
        assert!(yaml.contains("home: Startseite"));
    }
}
