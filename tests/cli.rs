//! CLI behavior over saved introspection dumps

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn text_report_from_saved_dump() {
    let mut cmd = Command::cargo_bin("altgen").unwrap();
    cmd.arg("Swift")
        .arg("--input")
        .arg(fixture_path("swift_lookup.txt"));

    let output_pred = predicate::str::contains("===== Swift TYPES =====")
        .and(predicate::str::contains(
            "(?:Codable|FloatingPointSign|Int|Never|Sequence|UnorderedRange)",
        ))
        .and(predicate::str::contains("m(?:ax|in)"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn json_report_lists_labeled_sections() {
    let mut cmd = Command::cargo_bin("altgen").unwrap();
    cmd.arg("Swift")
        .arg("--input")
        .arg(fixture_path("swift_lookup.txt"))
        .arg("--format")
        .arg("json");

    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let reports: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(reports[0]["module"], "Swift");
    assert_eq!(reports[0]["sections"][0]["category"], "TYPES");
    assert_eq!(reports[0]["sections"][4]["pattern"], "m(?:ax|in)");
    assert_eq!(reports[0]["sections"][4]["identifiers"], 2);
}

#[test]
fn unknown_format_is_rejected() {
    let mut cmd = Command::cargo_bin("altgen").unwrap();
    cmd.arg("--input")
        .arg(fixture_path("swift_lookup.txt"))
        .arg("--format")
        .arg("xml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn dump_written_at_runtime_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lookup.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "struct Bool {{").unwrap();
    writeln!(file, "}}").unwrap();
    writeln!(file, "func print(_ items: Any...)").unwrap();
    drop(file);

    let mut cmd = Command::cargo_bin("altgen").unwrap();
    cmd.arg("Core").arg("--input").arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("===== Core TYPES ====="))
        .stdout(predicate::str::contains("print"));
}

#[test]
fn input_dump_covers_a_single_module_only() {
    let mut cmd = Command::cargo_bin("altgen").unwrap();
    cmd.arg("Swift")
        .arg("Foundation")
        .arg("--input")
        .arg(fixture_path("swift_lookup.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--input"));
}
