//! E2E tests for `lytics watch`
//!
//! The API url points at a closed local port so no request leaves the machine.

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::Duration;
use tempfile::tempdir;

fn lytics(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lytics"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("LYTICS_API_URL", "http://127.0.0.1:9")
        .env_remove("LIOKEY")
        .env_remove("LYTICSFORMAT")
        .env_remove("RUST_LOG");
    cmd
}

/// Run `lytics watch`, let it settle, optionally touch files, then kill it
fn run_watch(cmd: &mut Command, after_start: impl FnOnce()) -> Output {
    let mut child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start lytics watch");

    thread::sleep(Duration::from_millis(500));
    after_start();
    thread::sleep(Duration::from_millis(500));

    let _ = child.kill();
    child.wait_with_output().expect("Failed to get output")
}

#[test]
fn watch_without_path_is_a_usage_error() {
    let home = tempdir().unwrap();
    let output = lytics(home.path()).arg("watch").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
}

#[test]
fn watch_missing_directory_fails() {
    let home = tempdir().unwrap();
    let output = lytics(home.path())
        .args(["watch", "does-not-exist", "--key", "test"])
        .current_dir(home.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("directory not found"), "stderr: {}", stderr);
}

#[test]
fn watch_without_api_key_fails_before_starting() {
    let home = tempdir().unwrap();
    let project = tempdir().unwrap();
    let output = lytics(home.path())
        .arg("watch")
        .arg(project.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no api key configured"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn watch_produces_json_start_event() {
    let home = tempdir().unwrap();
    let project = tempdir().unwrap();
    fs::write(project.path().join("orders.json"), r#"{"id": "1"}"#).unwrap();
    fs::write(project.path().join("notes.txt"), "not a sample").unwrap();

    let mut cmd = lytics(home.path());
    cmd.env("LIOKEY", "test").arg("watch").arg(project.path()).arg("--json");
    let output = run_watch(&mut cmd, || {});

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.lines().next().unwrap_or_default();
    let event: serde_json::Value = serde_json::from_str(first)
        .unwrap_or_else(|e| panic!("Expected a JSON event line ({}). Got: {}", e, stdout));
    assert_eq!(event["event"], "watch_started");
    assert_eq!(event["command"], "watch");
    assert_eq!(event["files"], 1);
}

#[test]
fn watch_reports_changed_sample_file() {
    let home = tempdir().unwrap();
    let project = tempdir().unwrap();
    let root = project.path().to_path_buf();

    let mut cmd = lytics(home.path());
    cmd.env("LIOKEY", "test").arg("watch").arg(&root).arg("--json");
    let output = run_watch(&mut cmd, || {
        fs::write(root.join("orders.csv"), "id,name\n1,a\n").unwrap();
    });

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("\"event\":\"file_changed\""),
        "Expected a file_changed event. Got: {}",
        stdout
    );
    assert!(stdout.contains("orders.csv"));
}
