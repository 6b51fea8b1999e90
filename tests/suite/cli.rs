//! Runs the `knight` binary as a judge would: transcript on stdin, jumps on stdout.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use knight_engine::{AxisPolicy, CONFIG_ENV_VAR};

fn knight(config: &Path, envs: &[(&str, &str)], stdin: &str) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_knight"));
    command
        .env(CONFIG_ENV_VAR, config)
        .env("RUST_LOG", "off")
        .env_remove(AxisPolicy::ENV_VAR)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in envs {
        command.env(key, value);
    }

    let mut child = command.spawn().expect("spawn knight");
    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        // The binary may bail out before reading everything.
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().expect("wait for knight")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("stdout is UTF-8")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn plays_a_full_game_over_stdio() {
    let dir = tempfile::tempdir().unwrap();
    let output = knight(
        &dir.path().join("missing.toml"),
        &[],
        "10 5\n20\n0 0\nDR\nDR\nL\nFOUND\n",
    );

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "5 2\n7 3\n6 3\n");
}

#[test]
fn exhausting_the_budget_is_not_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = knight(&dir.path().join("missing.toml"), &[], "10 5\n2\n0 0\nDR\nDR\n");

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "5 2\n7 3\n");
}

#[test]
fn invalid_building_exits_with_a_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let output = knight(&dir.path().join("missing.toml"), &[], "0 5\n20\n0 0\n");

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains("error[invalid-argument]"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn contradictory_hint_exits_with_a_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let output = knight(&dir.path().join("missing.toml"), &[], "10 5\n20\n3 0\nU\n");

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains("error[data-integrity]"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn axis_policy_comes_from_the_environment() {
    let dir = tempfile::tempdir().unwrap();
    let output = knight(
        &dir.path().join("missing.toml"),
        &[(AxisPolicy::ENV_VAR, "sequential")],
        "10 5\n20\n0 0\nDR\nDR\nFOUND\n",
    );

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "5 1\n6 3\n");
}

#[test]
fn axis_policy_comes_from_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[search]\naxis_policy = \"sequential\"\n").unwrap();

    let output = knight(&path, &[], "10 5\n20\n0 0\nDR\nDR\nFOUND\n");
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "5 1\n6 3\n");

    // The environment wins over the file.
    let output = knight(
        &path,
        &[(AxisPolicy::ENV_VAR, "simultaneous")],
        "10 5\n20\n0 0\nDR\nDR\nL\nFOUND\n",
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "5 2\n7 3\n6 3\n");
}

#[test]
fn broken_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[search\n").unwrap();

    let output = knight(&path, &[], "10 5\n20\n0 0\nDR\nFOUND\n");
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "5 2\n");
}
