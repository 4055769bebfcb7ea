// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalogs and key resolution for the storefront.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | EN   | English  | English     |
//! | DE   | German   | Deutsch     |
//! | FR   | French   | Français    |
//! | ES   | Spanish  | Español     |
//! | IT   | Italian  | Italiano    |
//! | NL   | Dutch    | Nederlands  |
//! | JA   | Japanese | 日本語      |
//!
//! ## Design
//!
//! Each catalog is a nested tree of namespaces whose leaves are display
//! strings. Keys are dotted paths into that tree: `"hero.title"`,
//! `"features.expertGuides.title"`. Lookups fall back to English when a path
//! is missing in the requested language or lands on a subtree. If English has
//! no leaf there either, the key path itself is returned (fail-open, never
//! panics).
//!
//! Catalogs are loaded once and shared read-only through [`Translator`], so
//! lookups take no locks and any number of threads can resolve at once.

mod catalog;
mod lang;
mod resolver;
mod tree;

pub use catalog::{Catalog, CatalogSet, CatalogSetBuilder};
pub use lang::{is_supported_language, Lang};
pub use resolver::{Resolution, Translator};
pub use tree::{split_key_path, walk, Namespace, Tree};
