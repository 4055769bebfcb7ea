// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale catalogs and the set of catalogs a translator reads from.
//!
//! A [`Catalog`] is one language's full translation tree: namespace name to
//! namespace tree. A [`CatalogSet`] holds one catalog per loaded language and
//! always holds the reference (English) catalog; constructing a set without
//! it is an error, so lookups never have to handle a missing fallback.
//!
//! ## Sources
//!
//! - [`CatalogSet::bundled`]: the storefront's seven locale files, embedded
//!   at compile time from `locales/`.
//! - [`CatalogSet::load_dir`]: `<code>.json` / `<code>.yaml` / `<code>.yml`
//!   files from a directory, for deployments that ship their own copy.
//! - [`CatalogSet::builder`]: programmatic construction.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`] with its code and names
//! 2. Add `locales/<code>.json` (missing keys fall back to English)
//! 3. Add the file to `BUNDLED` below

use super::lang::Lang;
use super::tree::{self, Namespace, Tree};
use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// One language's translation tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    namespaces: Namespace,
}

impl Catalog {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Top-level subtree named `name`, if it is a subtree.
    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.get(name).and_then(Tree::as_node)
    }

    /// Node or leaf at `segments`.
    pub fn get(&self, segments: &[&str]) -> Option<&Tree> {
        tree::walk(&self.namespaces, segments)
    }

    /// Display text at `segments`. Subtrees do not count.
    pub fn leaf(&self, segments: &[&str]) -> Option<&str> {
        self.get(segments).and_then(Tree::as_leaf)
    }

    /// Dotted path of every leaf in this catalog.
    pub fn leaf_paths(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        for (name, child) in &self.namespaces {
            child.collect_leaf_paths(name, &mut out);
        }
        out
    }
}

const BUNDLED: &[(Lang, &str)] = &[
    (Lang::En, include_str!("../../locales/en.json")),
    (Lang::De, include_str!("../../locales/de.json")),
    (Lang::Fr, include_str!("../../locales/fr.json")),
    (Lang::Es, include_str!("../../locales/es.json")),
    (Lang::It, include_str!("../../locales/it.json")),
    (Lang::Nl, include_str!("../../locales/nl.json")),
    (Lang::Ja, include_str!("../../locales/ja.json")),
];

const CATALOG_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Immutable catalogs for every loaded language.
///
/// The reference catalog is stored apart from the others so it can be
/// handed out without an `Option`.
#[derive(Debug, Clone)]
pub struct CatalogSet {
    reference: Catalog,
    others: BTreeMap<Lang, Catalog>,
}

impl CatalogSet {
    pub fn builder() -> CatalogSetBuilder {
        CatalogSetBuilder::default()
    }

    /// Catalogs compiled into the binary from `locales/`.
    pub fn bundled() -> Result<Self> {
        let mut builder = Self::builder();
        for &(lang, content) in BUNDLED {
            let catalog = Catalog::from_json(content)
                .with_context(|| format!("bundled catalog {} is malformed", lang))?;
            builder = builder.insert(lang, catalog);
        }
        builder.build()
    }

    /// Load every recognised catalog file directly inside `dir`.
    ///
    /// File stems are parsed leniently (`de.json`, `DE.yaml`, `de-DE.yml`).
    /// Files whose stem is not a supported language are skipped. Two files
    /// for the same language are an error, as is a directory with no
    /// reference catalog.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(anyhow!("locale directory not found: {}", dir.display()));
        }

        let mut builder = Self::builder();
        let mut seen: BTreeMap<Lang, String> = BTreeMap::new();

        let mut paths = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry
                .with_context(|| format!("failed to read locale directory {}", dir.display()))?;
            if entry.file_type().is_file() {
                paths.push(entry.into_path());
            }
        }
        paths.sort();

        for path in paths {
            let Some(ext) = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.to_ascii_lowercase())
            else {
                continue;
            };
            if !CATALOG_EXTENSIONS.contains(&ext.as_str()) {
                continue;
            }
            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default();
            let Some(lang) = Lang::parse(stem) else {
                tracing::warn!(file = %path.display(), "skipping catalog for unsupported language");
                continue;
            };

            let file_name = path.display().to_string();
            if let Some(previous) = seen.insert(lang, file_name.clone()) {
                bail!(
                    "duplicate catalogs for {}: {} and {}",
                    lang,
                    previous,
                    file_name
                );
            }

            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read catalog {}", file_name))?;
            let catalog = match ext.as_str() {
                "json" => Catalog::from_json(&content),
                _ => Catalog::from_yaml(&content),
            }
            .with_context(|| format!("failed to parse catalog {}", file_name))?;

            tracing::debug!(lang = %lang, file = %file_name, leaves = catalog.leaf_paths().len(), "loaded catalog");
            builder = builder.insert(lang, catalog);
        }

        let set = builder
            .build()
            .with_context(|| format!("loading catalogs from {}", dir.display()))?;
        tracing::info!(dir = %dir.display(), languages = set.language_count(), "catalogs loaded");
        Ok(set)
    }

    /// The reference-language catalog.
    pub fn reference(&self) -> &Catalog {
        &self.reference
    }

    /// Catalog for `lang`, if one was loaded.
    pub fn get(&self, lang: Lang) -> Option<&Catalog> {
        if lang == Lang::REFERENCE {
            Some(&self.reference)
        } else {
            self.others.get(&lang)
        }
    }

    /// Loaded languages, reference first.
    pub fn languages(&self) -> Vec<Lang> {
        std::iter::once(Lang::REFERENCE)
            .chain(self.others.keys().copied())
            .collect()
    }

    /// Number of loaded languages, reference included.
    pub fn language_count(&self) -> usize {
        1 + self.others.len()
    }
}

/// Collects catalogs before validating them into a [`CatalogSet`].
#[derive(Debug, Default)]
pub struct CatalogSetBuilder {
    catalogs: BTreeMap<Lang, Catalog>,
}

impl CatalogSetBuilder {
    /// Add or replace the catalog for `lang`.
    pub fn insert(mut self, lang: Lang, catalog: Catalog) -> Self {
        self.catalogs.insert(lang, catalog);
        self
    }

    pub fn insert_json(self, lang: Lang, content: &str) -> Result<Self> {
        let catalog = Catalog::from_json(content)
            .with_context(|| format!("catalog {} is malformed", lang))?;
        Ok(self.insert(lang, catalog))
    }

    /// Fails when no reference catalog was inserted.
    pub fn build(mut self) -> Result<CatalogSet> {
        let reference = self.catalogs.remove(&Lang::REFERENCE).ok_or_else(|| {
            anyhow!(
                "no catalog for reference language {} ({} catalogs supplied)",
                Lang::REFERENCE,
                self.catalogs.len()
            )
        })?;
        Ok(CatalogSet {
            reference,
            others: self.catalogs,
        })
    }
}
