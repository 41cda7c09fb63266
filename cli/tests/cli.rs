use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write test file");
}

#[test]
fn check_reports_ok_for_a_clean_file() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("set.mse-set");
    write_file(&input, "mse version: 0.1.0\ngame: magic\n");

    cargo_bin_cmd!("mse-text")
        .arg("check")
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("ok:").and(contains("version 0.1.0")));
}

#[test]
fn check_reports_warnings() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("set.mse-set");
    write_file(&input, "mse version: 0.1.0\nbroken line without separator\n");

    cargo_bin_cmd!("mse-text")
        .arg("check")
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("1 warning(s)"))
        .stderr(contains("Missing ':'"));
}

#[test]
fn check_lenient_suppresses_warnings() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("set.mse-set");
    write_file(&input, "mse version: 0.1.0\nbroken line without separator\n");

    cargo_bin_cmd!("mse-text")
        .arg("check")
        .arg(&input)
        .arg("--lenient")
        .assert()
        .success()
        .stdout(contains("ok:"))
        .stderr("");
}

#[test]
fn check_reports_newer_file_version() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("set.mse-set");
    write_file(&input, "mse version: 9.0.0\ngame: magic\n");

    cargo_bin_cmd!("mse-text")
        .arg("check")
        .arg(&input)
        .args(["--app-version", "2.0.0"])
        .assert()
        .success()
        .stderr(contains("newer version"));
}

#[test]
fn check_fails_on_invalid_utf8() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("set.mse-set");
    fs::write(&input, b"mse version: 0.1.0\nbad: \xFF\xFE\n").expect("write test file");

    cargo_bin_cmd!("mse-text")
        .arg("check")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("Invalid UTF-8"));
}

#[test]
fn dump_prints_json() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("set.mse-set");
    write_file(
        &input,
        "mse version: 0.1.0\nset info:\n\ttitle: Alpha\ngame: magic\n",
    );

    cargo_bin_cmd!("mse-text")
        .arg("dump")
        .arg(&input)
        .assert()
        .success()
        .stdout(
            contains("\"key\": \"set_info\"")
                .and(contains("\"title\""))
                .and(contains("\"value\": \"magic\"")),
        );
}

#[test]
fn dump_writes_to_output_file() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("set.mse-set");
    let output = dir.path().join("out.json");
    write_file(&input, "mse version: 0.1.0\ngame: magic\n");

    cargo_bin_cmd!("mse-text")
        .arg("dump")
        .arg(&input)
        .args(["-o", output.to_str().expect("output path")])
        .assert()
        .success();

    let json = fs::read_to_string(&output).expect("read output");
    assert!(json.contains("\"game\""));
}

#[test]
fn reads_from_stdin() {
    cargo_bin_cmd!("mse-text")
        .args(["check", "-"])
        .write_stdin("mse version: 0.1.0\ngame: magic\n")
        .assert()
        .success()
        .stdout(contains("<stdin>"));
}
