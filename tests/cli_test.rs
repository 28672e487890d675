// tests/cli_test.rs
use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--bin", "semver-rollup", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_help() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("semver-rollup"));
    assert!(stdout.contains("parent"));
}

#[test]
fn test_cli_bare_version_flag() {
    // --version must work without a parent argument
    let output = run(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_rollup_pairs() {
    let output = run(&["--quiet", "3.3.3", "1.2.3=1.3.0", "2.1.0=3.0.0"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "4.0.0");
}

#[test]
fn test_cli_no_pairs_echoes_parent() {
    let output = run(&["--quiet", "3.3.3"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "3.3.3");
}

#[test]
fn test_cli_invalid_parent_fails() {
    let output = run(&["--quiet", "not-a-version", "1.0.0=1.0.1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("parent version"));
}

#[test]
fn test_cli_pair_without_separator_fails() {
    let output = run(&["--quiet", "3.3.3", "1.2.3"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Malformed child pair"));
}
