//! Logging and verbosity tests.

use crate::support::*;

#[test]
fn test_verbose_flag_accepted() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--verbose", "db/creds", "out.txt"])
        .output()
        .unwrap();
    assert_exit_code(&output, 64);
}

#[test]
fn test_default_no_log_output() {
    let t = Test::new();

    let output = t.export("db/creds", "out.json");
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "default mode should not show debug/trace output: {}",
        err
    );
}

#[test]
fn test_smexp_log_env_var() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("SMEXP_LOG", "smexp=debug")
        .args(["db/creds", "out.json"])
        .output()
        .unwrap();
    assert_exit_code(&output, 78);
    assert_stderr_contains(&output, "DEBUG");
}

#[test]
fn test_logs_stay_off_stdout() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--verbose", "db/creds", "out.json"])
        .output()
        .unwrap();
    assert_stdout_excludes(&output, "DEBUG");
}
