//! Exit codes for each failure family.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_unsupported_extension_is_usage_error() {
    let t = Test::new();

    let output = t.export("db/creds", "out.txt");
    assert_exit_code(&output, 64);
    assert_stderr_contains(&output, "unsupported file type: .txt");
    assert!(!t.out("out.txt").exists());
}

#[test]
fn test_missing_extension_is_usage_error() {
    let t = Test::new();

    let output = t.export("db/creds", "secret");
    assert_exit_code(&output, 64);
    assert!(!t.out("secret").exists());
}

#[test]
fn test_unsupported_extension_never_resolves_config() {
    let t = Test::new();

    // No region anywhere: a config lookup would exit 78 instead.
    let output = t.export("db/creds", "out.ini");
    assert_exit_code(&output, 64);
    assert!(!stderr(&output).contains("aws:"));
}

#[test]
fn test_unresolvable_region_is_config_error() {
    let t = Test::new();

    t.cmd()
        .args(["db/creds", "out.json"])
        .assert()
        .code(78)
        .stderr(predicate::str::contains(
            "aws: failed to load region from instance metadata",
        ));
    assert!(!t.out("out.json").exists());
}

#[test]
fn test_hint_stays_on_the_diagnostic_line() {
    let t = Test::new();

    let output = t.export("db/creds", "out.yaml");
    assert_exit_code(&output, 78);
    assert!(stdout(&output).is_empty(), "stdout: {}", stdout(&output));

    let err = stderr(&output);
    assert_eq!(err.trim_end().lines().count(), 1, "stderr: {}", err);
    assert_stderr_contains(&output, "AWS_REGION");
}

#[test]
fn test_fetch_failure_is_usage_error() {
    let t = Test::new();

    t.cmd_with_endpoint("http://127.0.0.1:1")
        .args(["db/creds", "out.json"])
        .assert()
        .code(64)
        .stderr(predicate::str::is_empty().not());
    assert!(!t.out("out.json").exists());
}

#[test]
fn test_single_diagnostic_line() {
    let t = Test::new();

    let output = t.export("db/creds", "out.txt");
    let err = stderr(&output);
    assert_eq!(err.trim_end().lines().count(), 1, "stderr: {}", err);
}
