// SPDX-License-Identifier: PMPL-1.0-or-later

//! The fixed set of storefront languages.
//!
//! Codes are the two-letter ISO 639-1 identifiers written in upper case, the
//! form the storefront's language switcher persists (`"EN"`, `"DE"`, ...).
//! Membership checks are exact: `"de"` is not a supported code. Loose user
//! input goes through [`Lang::parse`] instead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported storefront languages.
///
/// [`Lang::REFERENCE`] is the source language: its catalog defines every key
/// and every other catalog falls back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Lang {
    En,
    De,
    Fr,
    Es,
    It,
    Nl,
    Ja,
}

impl Lang {
    /// The fallback language for every lookup.
    pub const REFERENCE: Lang = Lang::En;

    /// Canonical code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::De => "DE",
            Lang::Fr => "FR",
            Lang::Es => "ES",
            Lang::It => "IT",
            Lang::Nl => "NL",
            Lang::Ja => "JA",
        }
    }

    /// Exact lookup of a canonical code. Case-sensitive.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "EN" => Some(Lang::En),
            "DE" => Some(Lang::De),
            "FR" => Some(Lang::Fr),
            "ES" => Some(Lang::Es),
            "IT" => Some(Lang::It),
            "NL" => Some(Lang::Nl),
            "JA" => Some(Lang::Ja),
            _ => None,
        }
    }

    /// Tolerant parse for CLI flags, config values and file names.
    ///
    /// Trims whitespace, ignores case and drops region tags, so `"de"`,
    /// `" DE "` and `"de-CH"` all map to [`Lang::De`].
    pub fn parse(value: &str) -> Option<Lang> {
        let value = value.trim();
        let primary = value.split(['-', '_']).next().unwrap_or("");
        Lang::from_code(&primary.to_ascii_uppercase())
    }

    /// All supported languages, reference first.
    pub fn all() -> &'static [Lang] {
        &[
            Lang::En,
            Lang::De,
            Lang::Fr,
            Lang::Es,
            Lang::It,
            Lang::Nl,
            Lang::Ja,
        ]
    }

    /// English name, for logs and the `langs` listing.
    pub fn english_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::De => "German",
            Lang::Fr => "French",
            Lang::Es => "Spanish",
            Lang::It => "Italian",
            Lang::Nl => "Dutch",
            Lang::Ja => "Japanese",
        }
    }

    /// Name of the language written in itself, as shown in the language switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::De => "Deutsch",
            Lang::Fr => "Français",
            Lang::Es => "Español",
            Lang::It => "Italiano",
            Lang::Nl => "Nederlands",
            Lang::Ja => "日本語",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::REFERENCE
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// True iff `code` is exactly one of the supported codes.
///
/// # Examples
/// ```
/// use tour_i18n::i18n::is_supported_language;
/// assert!(is_supported_language("DE"));
/// assert!(!is_supported_language("de"));
/// assert!(!is_supported_language("XX"));
/// ```
pub fn is_supported_language(code: &str) -> bool {
    Lang::from_code(code).is_some()
}
