//! CLI contract tests
//!
//! Runs the real binary from a temp working directory so no local
//! mindcare.toml is picked up.

use serde_json::Value;
use std::path::PathBuf;
use std::process::{Command, Output};

fn mindcare_bin() -> &'static str {
    env!("CARGO_BIN_EXE_mindcare")
}

fn model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models/emotion")
}

fn run_in(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(mindcare_bin())
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "error")
        .env_remove("MINDCARE_HOST")
        .env_remove("MINDCARE_PORT")
        .env_remove("MINDCARE_MODEL_PATH")
        .output()
        .expect("failed to run mindcare")
}

#[test]
fn test_analyze_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let model = model_path();
    let output = run_in(
        dir.path(),
        &[
            "analyze",
            "I feel so hopeless and worthless today",
            "   ",
            "What a wonderful day",
            "--json",
            "--model",
            model.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let results: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["emotion"]["primary"], "sadness");
    assert_eq!(results[1]["emotion"]["primary"], "joy");
}

#[test]
fn test_analyze_fails_without_model() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["analyze", "hello", "--model", "no-such-model"]);
    assert!(!output.status.success());
}

#[test]
fn test_check_model() {
    let dir = tempfile::tempdir().unwrap();
    let model = model_path();

    let ok = run_in(dir.path(), &["check-model", model.to_str().unwrap()]);
    assert!(ok.status.success());
    let stdout = String::from_utf8_lossy(&ok.stdout);
    assert!(stdout.contains("config.json"));
    assert!(stdout.contains("weights.json"));

    let missing = run_in(dir.path(), &["check-model", "no-such-model"]);
    assert!(!missing.status.success());
}

#[test]
fn test_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();

    let init = run_in(dir.path(), &["config", "init"]);
    assert!(init.status.success());
    assert!(dir.path().join("mindcare.toml").exists());

    // second init refuses to overwrite
    let again = run_in(dir.path(), &["config", "init"]);
    assert!(!again.status.success());

    std::fs::write(dir.path().join("mindcare.toml"), "[server]\nport = 9123\n").unwrap();
    let show = run_in(dir.path(), &["config", "show"]);
    assert!(show.status.success());
    let stdout = String::from_utf8_lossy(&show.stdout);
    assert!(stdout.contains("port = 9123"));
}

#[test]
fn test_version() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("mindcare "));
}

#[test]
fn test_bad_environment_only_affects_commands_that_read_config() {
    let dir = tempfile::tempdir().unwrap();
    let run = |args: &[&str]| {
        Command::new(mindcare_bin())
            .args(args)
            .current_dir(dir.path())
            .env("RUST_LOG", "error")
            .env("MINDCARE_PORT", "not-a-port")
            .output()
            .expect("failed to run mindcare")
    };

    assert!(run(&["version"]).status.success());
    assert!(run(&["config", "init"]).status.success());
    assert!(run(&["check-model", model_path().to_str().unwrap()]).status.success());

    let show = run(&["config", "show"]);
    assert!(!show.status.success());
    assert!(String::from_utf8_lossy(&show.stderr).contains("MINDCARE_PORT"));
}
