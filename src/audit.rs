// SPDX-License-Identifier: PMPL-1.0-or-later

//! Coverage audit: how closely each catalog mirrors the reference catalog
//!
//! Every leaf path of the reference catalog is expected in every other
//! language. A path counts as translated only when the language has a leaf
//! there; a subtree in its place is as good as missing, matching what
//! [`Translator::resolve_key`](crate::i18n::Translator::resolve_key) would do.
//! Leaves the reference catalog lacks are reported as extras, since nothing
//! resolves them for English visitors.

use crate::i18n::{CatalogSet, Lang};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Coverage of one language against the reference catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageCoverage {
    pub language: Lang,
    /// False when no catalog was loaded for the language at all
    pub loaded: bool,
    pub translated: usize,
    /// Percentage of reference leaves translated, 0.0..=100.0
    pub coverage: f64,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
}

impl LanguageCoverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Complete audit report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub created_at: String,
    pub reference: Lang,
    pub reference_keys: usize,
    pub languages: Vec<LanguageCoverage>,
}

impl AuditReport {
    pub fn is_complete(&self) -> bool {
        self.languages.iter().all(LanguageCoverage::is_complete)
    }

    pub fn total_missing(&self) -> usize {
        self.languages.iter().map(|l| l.missing.len()).sum()
    }

    pub fn coverage_for(&self, lang: Lang) -> Option<&LanguageCoverage> {
        self.languages.iter().find(|l| l.language == lang)
    }
}

/// Audit every supported non-reference language, loaded or not.
pub fn audit(catalogs: &CatalogSet) -> AuditReport {
    let reference = catalogs.reference().leaf_paths();

    let languages = Lang::all()
        .iter()
        .copied()
        .filter(|lang| *lang != Lang::REFERENCE)
        .map(|lang| {
            let (loaded, paths) = match catalogs.get(lang) {
                Some(catalog) => (true, catalog.leaf_paths()),
                None => (false, BTreeSet::new()),
            };
            coverage(lang, loaded, &reference, &paths)
        })
        .collect();

    AuditReport {
        created_at: Utc::now().to_rfc3339(),
        reference: Lang::REFERENCE,
        reference_keys: reference.len(),
        languages,
    }
}

fn coverage(
    lang: Lang,
    loaded: bool,
    reference: &BTreeSet<String>,
    paths: &BTreeSet<String>,
) -> LanguageCoverage {
    let missing: Vec<String> = reference.difference(paths).cloned().collect();
    let extra: Vec<String> = paths.difference(reference).cloned().collect();
    let translated = reference.len() - missing.len();
    let coverage = if reference.is_empty() {
        100.0
    } else {
        translated as f64 * 100.0 / reference.len() as f64
    };

    if !missing.is_empty() {
        tracing::debug!(lang = %lang, missing = missing.len(), "catalog incomplete");
    }

    LanguageCoverage {
        language: lang,
        loaded,
        translated,
        coverage,
        missing,
        extra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> CatalogSet {
        CatalogSet::builder()
            .insert_json(
                Lang::En,
                r#"{ "hero": { "title": "Discover", "cta": "Plan" }, "nav": { "home": "Home" } }"#,
            )
            .and_then(|b| {
                b.insert_json(
                    Lang::De,
                    r#"{ "hero": { "title": "Entdecken", "cta": { "short": "Los" } }, "nav": { "home": "Start", "shop": "Laden" } }"#,
                )
            })
            .and_then(|b| b.build())
            .expect("catalogs build")
    }

    #[test]
    fn subtree_in_place_of_leaf_is_missing() {
        let report = audit(&set());
        let de = report.coverage_for(Lang::De).expect("DE audited");
        assert!(de.loaded);
        assert_eq!(de.missing, vec!["hero.cta".to_string()]);
        assert_eq!(de.translated, 2);
        assert_eq!(
            de.extra,
            vec!["hero.cta.short".to_string(), "nav.shop".to_string()]
        );
    }

    #[test]
    fn unloaded_languages_miss_everything() {
        let report = audit(&set());
        assert_eq!(report.reference_keys, 3);
        assert_eq!(report.languages.len(), Lang::all().len() - 1);
        let fr = report.coverage_for(Lang::Fr).expect("FR audited");
        assert!(!fr.loaded);
        assert_eq!(fr.missing.len(), 3);
        assert_eq!(fr.coverage, 0.0);
        assert!(!report.is_complete());
    }

    #[test]
    fn reference_is_not_audited_against_itself() {
        let report = audit(&set());
        assert!(report.coverage_for(Lang::En).is_none());
    }

    #[test]
    fn coverage_percentage() {
        let reference: BTreeSet<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let paths: BTreeSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let cov = coverage(Lang::It, true, &reference, &paths);
        assert_eq!(cov.coverage, 75.0);
        assert!(!cov.is_complete());
    }
}
