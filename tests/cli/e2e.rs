//! Runs the compiled binary end to end.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const SAMPLE_TERMS: &str = "4\n     0\tbear\n     2\tbearish\n     1\tbeat\n     5\tcat\n";

fn binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_termrank"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn sample_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("sample.txt");
    fs::write(&path, SAMPLE_TERMS).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn search_prints_count_and_results() {
    let dir = TempDir::new().unwrap();
    let file = sample_file(&dir);

    let output = binary().arg("search").arg(&file).arg("bea").output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "3 matches\n2\tbearish\n1\tbeat\n0\tbear\n");
}

#[test]
fn search_limit_truncates_but_count_does_not() {
    let dir = TempDir::new().unwrap();
    let file = sample_file(&dir);

    let output = binary()
        .args(["search", "--limit", "2"])
        .arg(&file)
        .arg("")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "4 matches\n5\tcat\n2\tbearish\n");
}

#[test]
fn search_json_output() {
    let dir = TempDir::new().unwrap();
    let file = sample_file(&dir);

    let output = binary()
        .arg("search")
        .arg(&file)
        .arg("cat")
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["prefix"], "cat");
    assert_eq!(value["count"], 1);
    assert_eq!(value["matches"][0]["text"], "cat");
    assert_eq!(value["matches"][0]["weight"], 5);
}

#[test]
fn interactive_answers_each_line() {
    let dir = TempDir::new().unwrap();
    let file = sample_file(&dir);

    let mut child = binary()
        .args(["interactive", "-l", "1"])
        .arg(&file)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"bea\nzzz\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "3 matches\n2\tbearish\n0 matches\n");
}

#[test]
fn inspect_summarizes_file() {
    let dir = TempDir::new().unwrap();
    let file = sample_file(&dir);

    let output = binary().arg("inspect").arg(&file).output().unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("entries"));
    assert!(text.contains("total weight"));
    assert!(text.contains('8'));
}

#[test]
fn bad_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "1\nnot-a-weight\tx\n").unwrap();

    let output = binary().arg("search").arg(&path).arg("x").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("line 2"));
}
