// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for loading catalogs from a locale directory

use std::fs;
use tempfile::TempDir;
use tour_i18n::i18n::{CatalogSet, Lang, Translator};

const EN: &str = r#"{ "nav": { "home": "Home", "blog": "Blog" }, "hero": { "title": "Discover Sri Lanka" } }"#;

#[test]
fn test_load_json_and_yaml() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("en.json"), EN).unwrap();
    fs::write(dir.path().join("de.yaml"), "nav:\n  home: Startseite\n").unwrap();
    fs::write(dir.path().join("FR.yml"), "nav:\n  home: Accueil\n").unwrap();

    let set = CatalogSet::load_dir(dir.path()).expect("catalogs load");
    assert_eq!(set.languages(), vec![Lang::En, Lang::De, Lang::Fr]);

    let t = Translator::new(set);
    assert_eq!(t.resolve_key("DE", "nav.home"), "Startseite");
    assert_eq!(t.resolve_key("FR", "nav.home"), "Accueil");
    assert_eq!(t.resolve_key("FR", "nav.blog"), "Blog");
    // Not loaded: falls straight to the reference catalog.
    assert_eq!(t.resolve_key("JA", "hero.title"), "Discover Sri Lanka");
}

#[test]
fn test_unrelated_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("en.json"), EN).unwrap();
    fs::write(dir.path().join("pt.json"), "{}").unwrap();
    fs::write(dir.path().join("README.md"), "# locales").unwrap();
    fs::write(dir.path().join("notes"), "no extension").unwrap();
    fs::create_dir_all(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/de.json"), "{}").unwrap();

    let set = CatalogSet::load_dir(dir.path()).expect("catalogs load");
    assert_eq!(set.languages(), vec![Lang::En]);
}

#[test]
fn test_missing_reference_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("de.json"), r#"{ "nav": { "home": "Startseite" } }"#).unwrap();

    let err = CatalogSet::load_dir(dir.path()).expect_err("no en catalog");
    let message = format!("{:#}", err);
    assert!(message.contains("reference language EN"), "{}", message);
}

#[test]
fn test_duplicate_language_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("en.json"), EN).unwrap();
    fs::write(dir.path().join("de.json"), "{}").unwrap();
    fs::write(dir.path().join("de.yaml"), "{}").unwrap();

    let err = CatalogSet::load_dir(dir.path()).expect_err("two DE catalogs");
    assert!(format!("{:#}", err).contains("duplicate catalogs for DE"));
}

#[test]
fn test_non_string_leaf_names_the_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("en.json"), EN).unwrap();
    fs::write(dir.path().join("nl.json"), r#"{ "testimonials": { "rating": 5 } }"#).unwrap();

    let err = CatalogSet::load_dir(dir.path()).expect_err("numbers are not leaves");
    let message = format!("{:#}", err);
    assert!(message.contains("failed to parse catalog"), "{}", message);
    assert!(message.contains("nl.json"), "{}", message);
}

#[test]
fn test_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let err = CatalogSet::load_dir(&dir.path().join("absent")).expect_err("no directory");
    assert!(err.to_string().contains("locale directory not found"));
}

#[test]
fn test_bundled_files_load_from_disk() {
    let locales = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("locales");
    let from_disk = CatalogSet::load_dir(&locales).expect("locales/ loads");
    let bundled = CatalogSet::bundled().expect("bundled loads");
    assert_eq!(from_disk.languages(), bundled.languages());
    for lang in bundled.languages() {
        assert_eq!(from_disk.get(lang), bundled.get(lang), "{} differs", lang);
    }
}
