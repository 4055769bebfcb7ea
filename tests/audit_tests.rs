// SPDX-License-Identifier: PMPL-1.0-or-later

//! Coverage audit over the bundled catalogs

use tour_i18n::audit::{audit, AuditReport};
use tour_i18n::i18n::{CatalogSet, Lang};
use tour_i18n::output::OutputFormat;

fn bundled_report() -> AuditReport {
    audit(&CatalogSet::bundled().expect("bundled catalogs load"))
}

#[test]
fn test_bundled_coverage() {
    let report = bundled_report();
    assert_eq!(report.reference, Lang::En);
    assert_eq!(report.reference_keys, 52);

    for lang in [Lang::De, Lang::Fr, Lang::Es] {
        let entry = report.coverage_for(lang).expect("audited");
        assert!(entry.is_complete(), "{} should be complete: {:?}", lang, entry.missing);
        assert_eq!(entry.coverage, 100.0);
    }

    let it = report.coverage_for(Lang::It).expect("audited");
    assert_eq!(it.missing.len(), 4);
    assert!(it.missing.contains(&"enquiry.error".to_string()));

    let nl = report.coverage_for(Lang::Nl).expect("audited");
    assert_eq!(nl.missing.len(), 5);
    assert_eq!(nl.translated, 47);

    let ja = report.coverage_for(Lang::Ja).expect("audited");
    assert_eq!(
        ja.missing,
        vec![
            "features.support.description".to_string(),
            "features.support.title".to_string(),
            "footer.newsletter".to_string(),
        ]
    );

    assert!(!report.is_complete());
    assert_eq!(report.total_missing(), 12);
    assert!(report.languages.iter().all(|l| l.loaded && l.extra.is_empty()));
}

#[test]
fn test_report_serializes() {
    let report = bundled_report();

    let json = OutputFormat::Json.serialize(&report).expect("json");
    let parsed: AuditReport = serde_json::from_str(&json).expect("json parses back");
    assert_eq!(parsed.reference_keys, report.reference_keys);
    assert!(json.contains("\"language\": \"JA\""));

    let yaml = OutputFormat::Yaml.serialize(&report).expect("yaml");
    assert!(yaml.contains("reference: EN"));
}
