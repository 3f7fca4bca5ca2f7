use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_parse-test-results"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run parse-test-results")
}

fn write_report(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn junit_report() {
    let dir = TempDir::new().unwrap();
    let path = write_report(
        &dir,
        "results.xml",
        r#"<testsuite tests="10" failures="2" errors="1"></testsuite>"#,
    );

    let output = run(&[&path]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "7 10\n");
}

#[test]
fn tap_report() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "results.tap", "ok 1\nnot ok 2\nok 3\n");

    let output = run(&[&path]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2 3\n");
}

#[test]
fn empty_tap_report() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "empty.tap", "");

    let output = run(&[&path]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0 0\n");
}

#[test]
fn text_report() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "results.txt", "Tests: 15\n10 passed\n");

    let output = run(&[&path]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "10 15\n");
}

#[test]
fn unknown_extension_falls_back_to_text() {
    let dir = TempDir::new().unwrap();
    // TAP content, but the suffix decides
    let path = write_report(&dir, "results.log", "ok 1\nok 2\n3 passed of 4 tests\n");

    let output = run(&[&path]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3 4\n");
}

#[test]
fn same_file_gives_same_output() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "results.tap", "ok 1\nnot ok 2\n");

    assert_eq!(stdout(&run(&[&path])), stdout(&run(&[&path])));
}

#[test]
fn missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.xml");

    let output = run(&[&path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("File not found:"));
    assert!(stdout(&output).contains("nope.xml"));
}

#[test]
fn missing_argument() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Usage:"));
}

#[test]
fn malformed_xml_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "broken.xml", r#"<testsuite tests="3">"#);

    let output = run(&[&path]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn non_numeric_attribute_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "bad.xml", r#"<testsuite tests="ten"/>"#);

    let output = run(&[&path]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("reports.tap");
    std::fs::create_dir(&sub).unwrap();

    let output = run(&[&sub]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn extra_arguments_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "results.tap", "ok 1\nnot ok 2\nok 3\n");

    let output = run(&[path.as_path(), Path::new("ignored"), Path::new("also-ignored.xml")]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2 3\n");
}

#[test]
fn hyphen_path_is_treated_as_a_file_name() {
    let output = run(&[Path::new("-missing-report.xml")]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "File not found: -missing-report.xml\n");
}

#[test]
fn latin1_junit_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.xml");
    std::fs::write(
        &path,
        b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<testsuite name=\"r\xe9sum\xe9\" tests=\"6\" failures=\"1\"/>\n",
    )
    .unwrap();

    let output = run(&[&path]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5 6\n");
}

#[test]
fn cr_only_tap_report() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, "mac.tap", "ok 1\rnot ok 2\rok 3\r");

    let output = run(&[&path]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2 3\n");
}
