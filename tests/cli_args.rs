//! Tests that run the built binary.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn login_pad_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_login-pad"));
    // Keep the user's real config out of the way.
    cmd.arg("--config").arg(temp_dir.path().join("config.toml"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_options() {
    let temp_dir = TempDir::new().unwrap();
    let output = login_pad_cmd(&temp_dir)
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--locale"));
    assert!(stdout.contains("--script"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn test_invalid_locale_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = login_pad_cmd(&temp_dir)
        .args(["--locale", "klingon", "--script", "-"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
}

#[test]
fn test_script_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("session.txt");
    fs::write(
        &script,
        "username test\npassword 123\nlogin\nclick 2\nstate\n",
    )
    .unwrap();

    let output = login_pad_cmd(&temp_dir)
        .arg("--script")
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let state: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(state["screen"], "home");
    assert_eq!(state["click_count"], 2);
}

#[test]
fn test_script_from_stdin_with_english_locale() {
    let temp_dir = TempDir::new().unwrap();
    let mut child = login_pad_cmd(&temp_dir)
        .args(["--locale", "en", "--script", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"username test\nlogin\nstate\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let state: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(state["error_message"], "password required");
}

#[test]
fn test_bad_script_line_fails() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("bad.txt");
    fs::write(&script, "login\nwarp 9\n").unwrap();

    let output = login_pad_cmd(&temp_dir)
        .arg("--script")
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.toml"), "[ui]\ntick_rate_ms = 0\n").unwrap();

    let output = login_pad_cmd(&temp_dir)
        .args(["--script", "-"])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tick_rate_ms"));
}

#[test]
fn test_config_source_is_logged() {
    let temp_dir = TempDir::new().unwrap();
    let output = login_pad_cmd(&temp_dir)
        .env("RUST_LOG", "debug")
        .args(["--script", "-"])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No config at"), "stderr was: {stderr}");
}
