//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

/// Build command for the rigcheck-cli binary (found in target/debug when run via cargo test).
fn rigcheck_cli() -> Command {
    cargo_bin_cmd!("rigcheck-cli")
}

/// Path to rigcheck library test fixtures (relative to workspace).
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("rigcheck")
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_cli_help() {
    let mut cmd = rigcheck_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("compatibility"));
}

#[test]
fn test_cli_version() {
    let mut cmd = rigcheck_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_check_valid_build() {
    let mut cmd = rigcheck_cli();
    let path = fixtures_dir().join("valid_am4.build.json");

    cmd.arg("check").arg(path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No compatibility issues"))
        .stdout(predicate::str::contains("310W"));
}

#[test]
fn test_cli_check_socket_mismatch() {
    let mut cmd = rigcheck_cli();
    let path = fixtures_dir().join("socket_mismatch.build.json");

    cmd.arg("check").arg(path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sockets do not match"));
}

#[test]
fn test_cli_check_fail_on_issues() {
    let path = fixtures_dir().join("socket_mismatch.build.json");

    let mut cmd = rigcheck_cli();
    cmd.arg("check").arg(&path).arg("--fail-on-issues");
    cmd.assert().code(1);

    let valid = fixtures_dir().join("valid_am4.build.json");
    let mut cmd = rigcheck_cli();
    cmd.arg("check").arg(&valid).arg("--fail-on-issues");
    cmd.assert().code(0);
}

#[test]
fn test_cli_check_json_output() {
    let mut cmd = rigcheck_cli();
    let path = fixtures_dir().join("incompatible.build.json");

    cmd.arg("check").arg(path).arg("--format").arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"is_valid\": false"))
        .stdout(predicate::str::contains("RAM type incompatible with Motherboard"));
}

#[test]
fn test_cli_check_nonexistent_file() {
    let mut cmd = rigcheck_cli();

    cmd.arg("check").arg("does_not_exist.build.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_cli_check_unknown_component_id() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"selections": {{"CPU": "cpu-does-not-exist"}}}}"#
    )
    .unwrap();

    let mut cmd = rigcheck_cli();
    cmd.arg("check").arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown component id"));
}

#[test]
fn test_cli_check_custom_catalog() {
    let mut catalog = tempfile::NamedTempFile::new().unwrap();
    write!(
        catalog,
        r#"[
            {{"id": "cpu-a", "name": "Custom CPU", "category": "CPU", "price": 100, "socket": "AM5", "tdp": 65}},
            {{"id": "mb-a", "name": "Custom Board", "category": "Motherboard", "price": 150, "socket": "AM5"}}
        ]"#
    )
    .unwrap();

    let mut build = tempfile::NamedTempFile::new().unwrap();
    write!(
        build,
        r#"{{"selections": {{"CPU": "cpu-a", "Motherboard": "mb-a"}}}}"#
    )
    .unwrap();

    let mut cmd = rigcheck_cli();
    cmd.arg("check")
        .arg(build.path())
        .arg("--catalog")
        .arg(catalog.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("$250.00"))
        .stdout(predicate::str::contains("No compatibility issues"));
}

#[test]
fn test_cli_project_command() {
    let mut cmd = rigcheck_cli();
    let dir = fixtures_dir();

    cmd.arg("project").arg(dir);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("valid_am4.build.json"))
        .stdout(predicate::str::contains("socket_mismatch.build.json"));
}

#[test]
fn test_cli_project_fail_on_issues() {
    let mut cmd = rigcheck_cli();
    let dir = fixtures_dir();

    cmd.arg("project").arg(dir).arg("--fail-on-issues");

    cmd.assert().code(1);
}

#[test]
fn test_cli_components_command() {
    let mut cmd = rigcheck_cli();

    cmd.arg("components");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cpu-ryzen-5-5600"))
        .stdout(predicate::str::contains("16 components"));
}

#[test]
fn test_cli_components_category_filter() {
    let mut cmd = rigcheck_cli();

    cmd.arg("components").arg("--category").arg("psu");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("psu-corsair-rm650x"))
        .stdout(predicate::str::contains("2 components"))
        .stdout(predicate::str::contains("cpu-ryzen-5-5600").not());
}

#[test]
fn test_cli_components_bad_category() {
    let mut cmd = rigcheck_cli();

    cmd.arg("components").arg("--category").arg("Monitor");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn test_cli_components_json() {
    let mut cmd = rigcheck_cli();

    cmd.arg("components").arg("--format").arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"gpu-rtx-3060\""));
}

#[test]
fn test_cli_rules_command() {
    let mut cmd = rigcheck_cli();

    cmd.arg("rules");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("socket_match"))
        .stdout(predicate::str::contains("psu_wattage"));
}

#[test]
fn test_cli_rules_verbose() {
    let mut cmd = rigcheck_cli();

    cmd.arg("rules").arg("--verbose");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1.5x"));
}

#[test]
fn test_cli_output_formats_are_different() {
    let path = fixtures_dir().join("incompatible.build.json");

    let mut cmd_human = rigcheck_cli();
    cmd_human.arg("check").arg(&path).arg("--format").arg("human");
    let human_output = cmd_human.output().unwrap();

    let mut cmd_json = rigcheck_cli();
    cmd_json.arg("check").arg(&path).arg("--format").arg("json");
    let json_output = cmd_json.output().unwrap();

    assert_ne!(
        human_output.stdout, json_output.stdout,
        "Different formats should produce different output"
    );
}
