//! The command line driver, run as a separate process.
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("fourier_motzkin_driver_{}_{}", prefix, nanos));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_problem(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fourier-motzkin"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn answers() {
    let dir = temp_dir("answers");
    let feasible = write_problem(&dir, "feasible.txt", "2 1\n0\n5 -3\n1\n-1\n");
    let infeasible = write_problem(&dir, "infeasible.txt", "2 1\n0\n1 -2\n1\n-1\n");

    let output = run(&[feasible.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "4\n");

    let output = run(&[infeasible.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "empty 1 1\n");

    let output = run(&["--format", "value", "--prune", infeasible.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "INFEASIBLE\n");
}

#[test]
fn bad_arguments() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let output = run(&["--format", "bogus", "problem.txt"]);
    assert_eq!(output.status.code(), Some(1));

    let output = run(&["--no-such-flag", "problem.txt"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn help_and_version() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("--prune"));

    let output = run(&["--version"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn bad_input() {
    let dir = temp_dir("bad_input");

    let output = run(&[dir.join("missing.txt").to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: "));

    let short = write_problem(&dir, "short.txt", "2 2\n1 1\n5 -3\n1 0\n-1\n");
    let output = run(&[short.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
