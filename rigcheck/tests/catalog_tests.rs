//! Integration tests for catalog loading and the resolve-then-evaluate flow.

use std::io::Write;
use std::path::PathBuf;

use rigcheck::prelude::*;
use rigcheck::CatalogError;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_builtin_catalog_has_every_category() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 16);
    for category in Category::ALL {
        assert_eq!(
            catalog.by_category(category).len(),
            2,
            "expected two builtin parts for {category}"
        );
    }
}

#[test]
fn test_catalog_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "cpu-x", "name": "Custom CPU", "category": "CPU", "price": 200, "socket": "AM5", "tdp": 105}},
            {{"id": "mb-x", "name": "Custom Board", "category": "Motherboard", "price": "180.5", "socket": "AM5"}}
        ]"#
    )
    .unwrap();

    let catalog = Catalog::from_file(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("cpu-x").unwrap().tdp, Some(105));
    assert_eq!(catalog.get("mb-x").unwrap().price, 180.5);
}

#[test]
fn test_catalog_from_file_malformed_field_aborts() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": "cpu-x", "name": "Custom CPU", "category": "CPU", "tdp": {{"watts": 65}}}}]"#
    )
    .unwrap();

    let err = Catalog::from_file(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::MalformedField { .. }));
}

#[test]
fn test_catalog_from_missing_file() {
    let err = Catalog::from_file(&PathBuf::from("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn test_evaluate_valid_build_file() {
    let catalog = Catalog::builtin();
    let report =
        RigCheckCore::evaluate_build_file(&catalog, &fixture_path("valid_am4.build.json")).unwrap();

    assert_eq!(report.name.as_deref(), Some("Budget AM4 gaming build"));
    assert!(report.is_valid, "issues: {:?}", report.issues);
    assert_eq!(report.estimated_power_w, 310);
    assert_eq!(report.total_price, 913.0);
}

#[test]
fn test_evaluate_socket_mismatch_build_file() {
    let catalog = Catalog::builtin();
    let report =
        RigCheckCore::evaluate_build_file(&catalog, &fixture_path("socket_mismatch.build.json"))
            .unwrap();

    assert!(!report.is_valid);
    assert_eq!(
        report.issues,
        vec!["CPU and Motherboard sockets do not match".to_string()]
    );
}

#[test]
fn test_evaluate_multi_issue_build_file() {
    let catalog = Catalog::builtin();
    let report =
        RigCheckCore::evaluate_build_file(&catalog, &fixture_path("incompatible.build.json"))
            .unwrap();

    assert_eq!(
        report.issues,
        vec![
            "CPU and Motherboard sockets do not match".to_string(),
            "RAM type incompatible with Motherboard".to_string(),
            "RAM speed exceeds motherboard maximum".to_string(),
        ]
    );
}

#[test]
fn test_evaluate_build_file_with_bad_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json at all").unwrap();

    let catalog = Catalog::builtin();
    let err = RigCheckCore::evaluate_build_file(&catalog, file.path()).unwrap_err();
    assert!(matches!(err, RigCheckError::Parse(_)));
}

#[test]
fn test_evaluate_build_dir_finds_fixtures() {
    let catalog = Catalog::builtin();
    let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");

    let reports = RigCheckCore::evaluate_build_dir(&catalog, &fixtures).unwrap();
    assert_eq!(reports.len(), 3);

    // Sorted discovery: incompatible, socket_mismatch, valid_am4.
    assert!(reports[0].0.ends_with("incompatible.build.json"));
    assert!(!reports[0].1.is_valid);
    assert!(reports[2].0.ends_with("valid_am4.build.json"));
    assert!(reports[2].1.is_valid);
}

#[test]
fn test_report_serializes_expected_shape() {
    let catalog = Catalog::builtin();
    let report =
        RigCheckCore::evaluate_build_file(&catalog, &fixture_path("socket_mismatch.build.json"))
            .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["is_valid"], serde_json::json!(false));
    assert_eq!(json["estimated_power_w"], serde_json::json!(140));
    assert!(json["issues"].is_array());
    assert!(json["evaluated_at"].is_string());
}
