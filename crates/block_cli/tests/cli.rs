//! End-to-end tests for the `blk` binary.
//!
//! Propagation terminates the process, so these tests observe it from the
//! outside: stdout, stderr and the exit status of a child process.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SAMPLE: &str = "let a = 1;\nlet b = 2;\nx = a + b;\n";

/// Creates a temporary directory containing `sample.src`.
fn sample_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sample.src"), SAMPLE).unwrap();
    dir
}

/// Runs `blk` in `dir` with logging left at its default level.
fn blk(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_blk"))
        .args(args)
        .current_dir(dir)
        .env_remove("BLOCK_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

#[test]
fn render_rich_sample() {
    let dir = sample_dir();
    let output = blk(dir.path(), &["render", "OverflowError", "sample.src", "3", "5"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "sample.src:3:5 OverflowError\nx = a + b;\n");
}

#[test]
fn render_with_context() {
    let dir = sample_dir();
    let output = blk(
        dir.path(),
        &["render", "Error", "sample.src", "1", "--context", "bad literal"],
    );
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "sample.src:1:0 Error: bad literal\nlet a = 1;\n");
}

#[test]
fn render_prefix_only() {
    let dir = sample_dir();
    let output = blk(
        dir.path(),
        &["render", "DeprecationError", "missing.src", "7", "2", "--prefix"],
    );
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "missing.src:7:2 DeprecationError\n");
}

#[test]
fn render_missing_file_fails() {
    let dir = sample_dir();
    let output = blk(dir.path(), &["render", "NotImplementedError", "missing.src", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.starts_with("error: source file 'missing.src' is unavailable"));
}

#[test]
fn render_line_out_of_range_fails() {
    let dir = sample_dir();
    let output = blk(dir.path(), &["render", "Error", "sample.src", "4"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output)
        .contains("error: line 4 is out of range for 'sample.src' (3 lines read)"));
}

#[test]
fn render_truncates_to_configured_width() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("long.src"), format!("{}\n", "q".repeat(100))).unwrap();
    let output = blk(
        dir.path(),
        &["--max-line-width", "10", "render", "Error", "long.src", "1"],
    );
    assert_eq!(stdout(&output), "long.src:1:0 Error\nqqqqqqq...\n");
}

#[test]
fn render_truncates_to_default_width() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("long.src"), format!("{}\n", "q".repeat(100))).unwrap();
    let output = blk(dir.path(), &["render", "Error", "long.src", "1"]);
    let out = stdout(&output);
    let source = out.lines().nth(1).unwrap();
    assert_eq!(source.len(), 80);
    assert!(source.ends_with("..."));
}

#[test]
fn render_json() {
    let dir = sample_dir();
    let output = blk(
        dir.path(),
        &["render", "OverflowError", "sample.src", "3", "5", "--format", "json"],
    );
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["kind"], "OverflowError");
    assert_eq!(value["file"], "sample.src");
    assert_eq!(value["line"], 3);
    assert_eq!(value["column"], 5);
    assert_eq!(value["message"], "sample.src:3:5 OverflowError\nx = a + b;");
}

#[test]
fn render_is_repeatable() {
    let dir = sample_dir();
    let args = ["render", "Error", "sample.src", "2"];
    assert_eq!(stdout(&blk(dir.path(), &args)), stdout(&blk(dir.path(), &args)));
}

// ---------------------------------------------------------------------------
// throw
// ---------------------------------------------------------------------------

#[test]
fn throw_pass_is_silent() {
    let dir = sample_dir();
    let output = blk(dir.path(), &["throw", "Pass", "sample.src", "1"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).is_empty());
}

#[test]
fn throw_pass_reported_when_enabled() {
    let dir = sample_dir();
    let output = blk(dir.path(), &["--report-pass", "throw", "Pass", "sample.src", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "sample.src:2:0 Pass\nlet b = 2;\n");
}

#[test]
fn throw_pass_reported_from_config_file() {
    let dir = sample_dir();
    std::fs::write(
        dir.path().join("block.toml"),
        "[diagnostics]\nreport_pass_diagnostics = true\n",
    )
    .unwrap();
    let output = blk(
        dir.path(),
        &["--config", "block.toml", "throw", "Pass", "sample.src", "1"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("sample.src:1:0 Pass\n"));
}

#[test]
fn throw_error_with_source_context() {
    let dir = sample_dir();
    let output = blk(
        dir.path(),
        &["throw", "OverflowError", "sample.src", "3", "5", "--context", "u8 sum"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output),
        "sample.src:3:5 OverflowError: u8 sum\nx = a + b;\n"
    );
}

#[test]
fn throw_missing_file_falls_back_to_prefix() {
    let dir = sample_dir();
    let output = blk(dir.path(), &["throw", "NotImplementedError", "missing.src", "1", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "missing.src:1:0 NotImplementedError\n");
}

#[test]
fn throw_line_out_of_range_falls_back_to_prefix() {
    let dir = sample_dir();
    let output = blk(dir.path(), &["throw", "Error", "sample.src", "99"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "sample.src:99:0 Error\n");
}

#[test]
fn throw_every_failure_kind_terminates() {
    let dir = sample_dir();
    for kind in ["Error", "NotImplementedError", "DeprecationError", "OverflowError"] {
        let output = blk(dir.path(), &["throw", kind, "sample.src", "1"]);
        assert_eq!(output.status.code(), Some(1), "{kind} should terminate");
        assert!(stderr(&output).starts_with(&format!("sample.src:1:0 {kind}\n")));
    }
}

#[test]
fn empty_source_path_is_a_usage_error() {
    let dir = sample_dir();
    for args in [
        &["throw", "Error", "", "1"][..],
        &["render", "Error", "", "1", "--prefix"][..],
    ] {
        let output = blk(dir.path(), args);
        assert_eq!(output.status.code(), Some(2), "{args:?}");
        assert!(stdout(&output).is_empty());
        let err = stderr(&output);
        assert!(err.starts_with("error:"), "{err}");
        assert!(!err.contains("panicked"));
    }
}

// ---------------------------------------------------------------------------
// kinds and configuration errors
// ---------------------------------------------------------------------------

#[test]
fn kinds_lists_all() {
    let dir = sample_dir();
    let output = blk(dir.path(), &["kinds"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Pass\nError\nNotImplementedError\nDeprecationError\nOverflowError\n"
    );
}

#[test]
fn invalid_config_reports_error() {
    let dir = sample_dir();
    std::fs::write(dir.path().join("block.toml"), "[diagnostics]\nmax_line_width = 0\n").unwrap();
    let output = blk(dir.path(), &["--config", "block.toml", "kinds"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: validation error:"));
}
