//! Argument handling and the version banner.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_version_prints_banner() {
    let t = Test::new();

    let output = t.version();
    assert_exit_code(&output, 0);

    let out = stdout(&output);
    assert!(out.starts_with(&format!("Version:    {}\n", env!("CARGO_PKG_VERSION"))));
    assert!(out.contains("Git Hash:   "));
    assert!(out.contains("Build Time: "));
}

#[test]
fn test_short_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("-v")
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("Version:"));
}

#[test]
fn test_version_skips_export() {
    let t = Test::new();

    t.cmd()
        .args(["--version", "db/creds", "out.txt"])
        .assert()
        .code(0);
    assert!(!t.out("out.txt").exists());
}

#[test]
fn test_help_exits_with_usage_code() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .code(64)
        .stdout(predicate::str::contains("Secrets Manager"));
}

#[test]
fn test_missing_arguments() {
    let t = Test::new();

    t.cmd().assert().code(64);
    t.cmd().arg("db/creds").assert().code(64);
}

#[test]
fn test_unknown_flag() {
    let t = Test::new();

    t.cmd()
        .args(["--bogus", "db/creds", "out.json"])
        .assert()
        .code(64);
}

#[test]
fn test_type_outside_choices() {
    let t = Test::new();

    t.cmd()
        .args(["--type", "toml", "db/creds", "out.toml"])
        .assert()
        .code(64);
    assert!(!t.out("out.toml").exists());
}
