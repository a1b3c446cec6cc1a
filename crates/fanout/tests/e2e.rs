//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn fanout() -> Command {
    let mut cmd = Command::cargo_bin("fanout").expect("binary not found");
    cmd.env_remove("RUST_LOG")
        .env_remove("FANOUT_LOG")
        .env_remove("FANOUT_HOST")
        .env_remove("FANOUT_PORT");
    cmd
}

fn quiet_results(op: &str, numbers: &str) -> Value {
    let output = fanout()
        .args(["--op", op, "-n", numbers, "-q"])
        .output()
        .expect("run fanout");
    assert!(output.status.success(), "{op} failed: {output:?}");
    let stdout = String::from_utf8(output.stdout).expect("utf-8");
    serde_json::from_str(stdout.trim()).expect("results JSON")
}

#[test]
fn help_flag() {
    fanout()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--numbers"))
        .stdout(predicate::str::contains("--op"));
}

#[test]
fn version_flag() {
    fanout()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fanout"));
}

#[test]
fn linear_factorial_is_exact() {
    let results = quiet_results("linear_factorial", "5,0,-2,21");
    assert_eq!(
        results,
        serde_json::json!(["120", "1", "0", "51090942171709440000"])
    );
}

#[test]
fn concurrent_factorial_wraps() {
    let results = quiet_results("concurrent_factorial", "5,0,-2,66");
    assert_eq!(results, serde_json::json!([120, 1, 0, 0]));
}

#[test]
fn fib_both_strategies_agree() {
    let linear = quiet_results("linear_fib", "25,1,10,0,2");
    let concurrent = quiet_results("concurrent_fib", "25,1,10,0,2");
    assert_eq!(linear, serde_json::json!([75025, 1, 55, 0, 1]));
    assert_eq!(linear, concurrent);
}

#[test]
fn primechecker_results() {
    let results = quiet_results("concurrent_primechecker", "10,12,17,18");
    assert_eq!(results, serde_json::json!([false, false, true, false]));
}

#[test]
fn empty_batch() {
    let results = quiet_results("concurrent_fib", "");
    assert_eq!(results, serde_json::json!([]));
}

#[test]
fn all_operations_quiet() {
    fanout()
        .args(["--op", "all", "-n", "7", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[5040]"))
        .stdout(predicate::str::contains("[\"5040\"]"))
        .stdout(predicate::str::contains("[13]"))
        .stdout(predicate::str::contains("[true]"));
}

#[test]
fn normal_output_lists_inputs() {
    fanout()
        .args(["--op", "linear_fib", "-n", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation: linear_fib"))
        .stdout(predicate::str::contains("-> 55"));
}

#[test]
fn details_shows_completion_order() {
    fanout()
        .args(["--op", "concurrent_fib", "-n", "20,1", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completion order"));
}

#[test]
fn compare_mode_succeeds() {
    fanout()
        .args(["--op", "concurrent_primechecker", "-n", "97,100", "--compare"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparison Results"))
        .stdout(predicate::str::contains("concurrent"));
}

#[test]
fn output_file_holds_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.json");
    fanout()
        .args(["--op", "linear_fib", "-n", "10,11", "-q", "-o"])
        .arg(&path)
        .assert()
        .success();

    let report: Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("report")).expect("json");
    assert_eq!(report["results"], serde_json::json!([55, 89]));
    assert!(report["execution_time"].is_string());
}

#[test]
fn unknown_operation_is_config_error() {
    fanout()
        .args(["--op", "linear_sqrt", "-n", "4"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("linear_sqrt"));
}

#[test]
fn invalid_numbers_is_config_error() {
    fanout()
        .args(["--op", "linear_fib", "-n", "1,two"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid --numbers"));
}

#[test]
fn fib_too_deep_is_rejected_not_aborted() {
    for op in ["linear_fib", "concurrent_fib"] {
        fanout()
            .args(["--op", op, "-n", "5,100000"])
            .assert()
            .code(4)
            .stderr(predicate::str::contains("Error: "))
            .stderr(predicate::str::contains("input 100000 at index 1"));
    }
}

#[test]
fn details_shows_computed_values() {
    fanout()
        .args(["--op", "linear_fib", "-n", "10", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("value {:<12} -> 55", 10)));
}

#[test]
fn completion_bash() {
    fanout()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fanout"));
}
