// Regression test: the demonstration binary's exit code must reflect the
// aggregate outcome, and its report must name the test and its status.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn passing_suite_exits_zero_with_pass_line() {
    let mut cmd = Command::cargo_bin("sample_run").unwrap();
    cmd.assert()
        .success()
        .stdout(contains("PASS").and(contains("sample test")).and(contains("a group")));
}

#[test]
fn failing_suite_exits_nonzero_with_fail_line() {
    let mut cmd = Command::cargo_bin("sample_run").unwrap();
    cmd.arg("--fail");
    cmd.assert()
        .failure()
        .stderr(contains("FAIL").and(contains("sample test")));
}
