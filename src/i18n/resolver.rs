// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key-path resolution with English fallback.
//!
//! [`Translator::resolve_key`] walks the requested language's catalog, then
//! the reference catalog, and finally echoes the key path. It never fails:
//! unsupported codes, empty paths and paths that land on a subtree all have
//! a defined string result.

use super::catalog::{Catalog, CatalogSet};
use super::lang::{self, Lang};
use super::tree::{split_key_path, Namespace};
use anyhow::Result;
use std::collections::BTreeMap;
use std::fmt::{Display, Write};
use std::sync::Arc;

static EMPTY_NAMESPACE: Namespace = BTreeMap::new();

/// How a key path was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Leaf found in the catalog chosen for the requested code. For an
    /// unsupported code that catalog is the reference catalog.
    Found(&'a str),
    /// Leaf found only in the reference catalog.
    Fallback(&'a str),
    /// No leaf in either catalog.
    Missing,
}

impl<'a> Resolution<'a> {
    pub fn text(&self) -> Option<&'a str> {
        match *self {
            Resolution::Found(text) | Resolution::Fallback(text) => Some(text),
            Resolution::Missing => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Resolution::Found(_) => "found",
            Resolution::Fallback(_) => "fallback",
            Resolution::Missing => "missing",
        }
    }
}

/// Read-only view over a [`CatalogSet`].
///
/// Cheap to clone; clones share the same catalogs.
#[derive(Debug, Clone)]
pub struct Translator {
    catalogs: Arc<CatalogSet>,
}

impl Translator {
    pub fn new(catalogs: CatalogSet) -> Self {
        Self {
            catalogs: Arc::new(catalogs),
        }
    }

    /// Translator over the catalogs compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(CatalogSet::bundled()?))
    }

    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    /// Catalog for `code` when it is supported and loaded, else the
    /// reference catalog.
    pub fn resolve_catalog(&self, code: &str) -> &Catalog {
        Lang::from_code(code)
            .and_then(|lang| self.catalogs.get(lang))
            .unwrap_or_else(|| self.catalogs.reference())
    }

    /// Resolve `key_path` and report where the text came from.
    pub fn lookup(&self, code: &str, key_path: &str) -> Resolution<'_> {
        let segments = split_key_path(key_path);
        let primary = self.resolve_catalog(code);
        if let Some(text) = primary.leaf(&segments) {
            return Resolution::Found(text);
        }

        let reference = self.catalogs.reference();
        if !std::ptr::eq(primary, reference) {
            if let Some(text) = reference.leaf(&segments) {
                return Resolution::Fallback(text);
            }
        }
        Resolution::Missing
    }

    /// Localized text for `key_path`, falling back to the reference
    /// language and then to `key_path` itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_i18n::i18n::Translator;
    /// let translator = Translator::bundled().unwrap();
    /// assert_eq!(translator.resolve_key("DE", "nav.home"), "Startseite");
    /// assert_eq!(translator.resolve_key("XX", "nav.home"), "Home");
    /// assert_eq!(translator.resolve_key("EN", "nonexistent.path"), "nonexistent.path");
    /// ```
    pub fn resolve_key(&self, code: &str, key_path: &str) -> String {
        match self.lookup(code, key_path) {
            Resolution::Found(text) => text.to_string(),
            Resolution::Fallback(text) => {
                tracing::debug!(code, key_path, "translation fell back to reference language");
                text.to_string()
            }
            Resolution::Missing => {
                tracing::debug!(code, key_path, "translation missing");
                key_path.to_string()
            }
        }
    }

    /// Resolve `key_path` and substitute `{name}` placeholders.
    ///
    /// The resolved text is scanned once. Each placeholder takes the first
    /// argument with that name; placeholders with no matching argument are
    /// left as written. Substituted values are copied verbatim and never
    /// scanned again, so a value containing `{other}` stays literal.
    pub fn format_key(&self, code: &str, key_path: &str, args: &[(&str, &dyn Display)]) -> String {
        let template = self.resolve_key(code, key_path);
        let mut out = String::with_capacity(template.len());
        let mut rest = template.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                return out;
            };
            let name = &after[..close];
            if name.contains('{') {
                // `{` starts a new candidate; keep this one literal.
                out.push('{');
                rest = after;
                continue;
            }
            match args.iter().find(|(arg, _)| *arg == name) {
                Some((_, value)) => {
                    let _ = write!(out, "{}", value);
                }
                None => out.push_str(&rest[open..open + close + 2]),
            }
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        out
    }

    /// Top-level namespace `name` of the catalog for `code`.
    ///
    /// Absent namespaces yield an empty mapping. There is no fallback to
    /// the reference language here.
    pub fn resolve_namespace(&self, code: &str, name: &str) -> &Namespace {
        self.resolve_catalog(code)
            .namespace(name)
            .unwrap_or(&EMPTY_NAMESPACE)
    }

    pub fn is_supported_language(&self, code: &str) -> bool {
        lang::is_supported_language(code)
    }
}
