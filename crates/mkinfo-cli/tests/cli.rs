//! End-to-end tests driving the `mkinfo` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mkinfo(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mkinfo"));
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn shows_help() {
    let dir = tempfile::tempdir().unwrap();
    mkinfo(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("__VERSION__"));
}

#[test]
fn renders_with_default_version_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("version.txt"), "2.0.0").unwrap();
    std::fs::write(dir.path().join("in.txt"), "build __VERSION__ now\n").unwrap();

    mkinfo(&dir)
        .args(["in.txt", "out.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK]"));

    let out = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert_eq!(out, "build 2.0.0 now\n");
}

#[test]
fn strips_newline_from_version_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("version.txt"), "1.2.3\r\n").unwrap();
    std::fs::write(dir.path().join("in.txt"), "v__VERSION__").unwrap();

    mkinfo(&dir).args(["-q", "in.txt", "out.txt"]).assert().success();

    let out = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert_eq!(out, "v1.2.3");
}

#[test]
fn quiet_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("version.txt"), "1\n").unwrap();
    std::fs::write(dir.path().join("in.txt"), "__VERSION__\n").unwrap();

    mkinfo(&dir)
        .args(["--quiet", "in.txt", "out.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn custom_version_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("build")).unwrap();
    std::fs::write(dir.path().join("build/VERSION"), "4.5.6\n").unwrap();
    std::fs::write(dir.path().join("in.txt"), "__VERSION__-__VERSION__\n").unwrap();

    mkinfo(&dir)
        .args(["--version-file", "build/VERSION", "in.txt", "out.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4.5.6"));

    let out = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert_eq!(out, "4.5.6-4.5.6\n");
}

#[test]
fn no_arguments_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("version.txt"), "1.0\n").unwrap();

    mkinfo(&dir).assert().code(1);

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn one_argument_exits_one_without_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("version.txt"), "1.0\n").unwrap();
    std::fs::write(dir.path().join("in.txt"), "__VERSION__\n").unwrap();

    mkinfo(&dir).arg("in.txt").assert().code(1);

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 2);
}

#[test]
fn missing_input_fails_and_leaves_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("version.txt"), "1.0\n").unwrap();

    mkinfo(&dir)
        .args(["missing.txt", "out.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.txt"));

    let out = dir.path().join("out.txt");
    if out.exists() {
        assert!(std::fs::read(&out).unwrap().is_empty());
    }
}

#[test]
fn missing_version_file_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("in.txt"), "__VERSION__\n").unwrap();

    mkinfo(&dir)
        .args(["in.txt", "out.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("version.txt"));

    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn extra_arguments_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("version.txt"), "2.0.0\n").unwrap();
    std::fs::write(dir.path().join("in.txt"), "build __VERSION__ now\n").unwrap();

    mkinfo(&dir)
        .args(["in.txt", "out.txt", "extra", "more"])
        .assert()
        .success();

    let out = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert_eq!(out, "build 2.0.0 now\n");
    assert!(!dir.path().join("extra").exists());
}

#[test]
fn error_reports_cause_chain() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("version.txt"), "1.0\n").unwrap();

    mkinfo(&dir)
        .args(["missing.txt", "out.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("[ERROR] failed to open input file missing.txt"))
        .stderr(predicate::str::contains("caused by:"));
}
