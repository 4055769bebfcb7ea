// SPDX-License-Identifier: PMPL-1.0-or-later

//! tour-i18n — translation catalogs for the multilingual tour storefront.
//!
//! The storefront renders every UI string through a dotted key path
//! (`"hero.title"`) and the visitor's selected language. This crate owns
//! that mapping:
//!
//! 1. **Catalogs**: one translation tree per language, embedded at build time
//!    or loaded from a directory of JSON/YAML files.
//! 2. **Resolution**: key path to display text, falling back to English and
//!    then to the key path itself, so rendering never fails.
//! 3. **Audit**: which keys each language still lacks.

pub mod audit;
pub mod config;
pub mod i18n;
pub mod output;
pub mod telemetry;
