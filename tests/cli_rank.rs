//! CLI tests for `student_toppers rank`.
//!
//! Spawns the binary and checks exit status, stdout and the failure
//! diagnostic on stderr.

use std::process::{Command, Output};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn run_rank(args: &[&str]) -> Output {
    let temp = tempfile::tempdir().expect("tempdir");
    Command::new(env!("CARGO_BIN_EXE_student_toppers"))
        .current_dir(temp.path())
        .env("LOG_FILE_PATH", temp.path().join("logs/test.log"))
        .env("RUST_LOG", "info")
        .arg("rank")
        .args(args)
        .output()
        .expect("student_toppers rank")
}

#[test]
fn rank_prints_toppers() {
    let output = run_rank(&[&fixture("students.csv")]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Overall topper: Ann Lee (X Univ) final score 75.00, grade A"));
    assert!(stdout.contains("  Y Univ: Cy Park final score 55.00, grade B"));
}

#[test]
fn rank_failure_reports_the_error_once() {
    let output = run_rank(&[&fixture("bad_score.csv")]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("line 3").count(), 1, "stderr: {stderr}");
    assert_eq!(
        stderr.matches("invalid digit found in string").count(),
        1,
        "stderr: {stderr}"
    );
    assert!(stderr.contains("thirty"));
}

#[test]
fn rank_collect_errors_lists_rejected_rows() {
    let output = run_rank(&["--collect-errors", &fixture("bad_score.csv")]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rejected rows (1):"));
    assert!(stdout.contains("line 3: invalid score in test2 (\"thirty\")"));
}
