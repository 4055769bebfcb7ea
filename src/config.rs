// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration
//!
//! Sources, lowest precedence first: built-in defaults, a YAML file
//! (`--config`, or `tour-i18n.yaml` in the working directory when present),
//! environment variables, then command-line flags applied by the caller.

use crate::i18n::{CatalogSet, Lang};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "tour-i18n.yaml";
pub const LOCALES_ENV: &str = "TOUR_I18N_LOCALES";
pub const LANG_ENV: &str = "TOUR_I18N_LANG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory of locale files; the bundled catalogs are used when unset
    pub locales_dir: Option<PathBuf>,
    /// Language used when a command is given none
    pub default_language: Option<String>,
    /// Make `audit` fail when any catalog is incomplete
    pub strict_audit: bool,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given, else the default file if it exists, then
    /// apply environment overrides.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)?
                } else {
                    Self::default()
                }
            }
        };
        let config = config.with_overrides(env::var(LOCALES_ENV).ok(), env::var(LANG_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Replace fields with any non-empty override value.
    pub fn with_overrides(mut self, locales_dir: Option<String>, language: Option<String>) -> Self {
        if let Some(dir) = locales_dir.filter(|v| !v.trim().is_empty()) {
            self.locales_dir = Some(PathBuf::from(dir));
        }
        if let Some(lang) = language.filter(|v| !v.trim().is_empty()) {
            self.default_language = Some(lang);
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(lang) = &self.default_language {
            if Lang::parse(lang).is_none() {
                return Err(anyhow!(
                    "unsupported default_language {:?} (expected one of {})",
                    lang,
                    supported_list()
                ));
            }
        }
        Ok(())
    }

    pub fn default_lang(&self) -> Lang {
        self.default_language
            .as_deref()
            .and_then(Lang::parse)
            .unwrap_or(Lang::REFERENCE)
    }

    /// Catalogs from `locales_dir`, or the bundled ones.
    pub fn catalog_set(&self) -> Result<CatalogSet> {
        match &self.locales_dir {
            Some(dir) => CatalogSet::load_dir(dir),
            None => CatalogSet::bundled(),
        }
    }
}

fn supported_list() -> String {
    Lang::all()
        .iter()
        .map(|lang| lang.code())
        .collect::<Vec<_>>()
        .join(", ")
}
