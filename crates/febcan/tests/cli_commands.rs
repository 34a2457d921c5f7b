#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::Command;

fn make_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "febcan-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn febcan() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_febcan"));
    cmd.env_remove("FEBCAN_PROFILE");
    cmd
}

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).expect("stdout should be json")
}

#[test]
fn generate_writes_dbc() {
    let dir = make_temp_dir("generate");
    let path = dir.join("gen").join("FEB_CAN.dbc");

    let output = febcan()
        .args(["--format", "json", "generate", "--output"])
        .arg(&path)
        .output()
        .expect("generate should run");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let payload = json_stdout(&output);
    assert_eq!(payload["ok"], serde_json::Value::Bool(true));
    assert_eq!(payload["messages"].as_u64(), Some(43));

    let text = std::fs::read_to_string(&path).expect("dbc should exist");
    assert!(text.starts_with("VERSION"));
    assert!(text.contains("BO_ 11 "));
    assert!(text.contains("BO_ 1280 "));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn reserving_a_used_id_fails_check_with_60() {
    let output = febcan()
        .args(["--format", "json", "check", "--reserve", "11"])
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(60));
    let payload = json_stdout(&output);
    assert_eq!(payload["ok"], serde_json::Value::Bool(false));

    let violations = payload["violations"].as_array().expect("violations array");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["rule"], "reserved-id");
    assert_eq!(violations[0]["ids"][0].as_u64(), Some(11));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: check"));
}

#[test]
fn failed_generate_leaves_no_artifact() {
    let dir = make_temp_dir("rejected");
    let path = dir.join("FEB_CAN.dbc");

    let output = febcan()
        .args(["--format", "json", "generate", "--reserve", "0x500", "-o"])
        .arg(&path)
        .output()
        .expect("generate should run");

    assert_eq!(output.status.code(), Some(60));
    assert!(!path.exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unwritable_output_reports_sink_failure() {
    let dir = make_temp_dir("unwritable");
    let blocker = dir.join("not-a-dir");
    std::fs::write(&blocker, "file").expect("blocker should be writable");
    let path = blocker.join("FEB_CAN.dbc");

    let output = febcan()
        .args(["--format", "json", "generate", "-o"])
        .arg(&path)
        .output()
        .expect("generate should run");

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(60));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: generate:"));
    assert!(!path.exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn default_registry_passes_check() {
    let output = febcan()
        .args(["--format", "json", "check"])
        .output()
        .expect("check should run");

    assert!(output.status.success());
    let payload = json_stdout(&output);
    assert_eq!(payload["profile"], "canopen");
    assert!(payload.get("path").is_none());
}

#[test]
fn list_reports_every_slot() {
    let output = febcan()
        .args(["--format", "json", "list"])
        .output()
        .expect("list should run");

    assert!(output.status.success());
    let payload = json_stdout(&output);
    assert!(payload["schema_id"]
        .as_str()
        .is_some_and(|id| id.ends_with("registry.schema.json")));
    let slots = payload["slots"].as_array().expect("slots array");
    assert_eq!(slots.len(), 43);
    assert_eq!(slots[0]["id"].as_u64(), Some(11));
    assert_eq!(slots[0]["group"], "res");
}

#[test]
fn profile_file_is_loaded_and_overridden() {
    let dir = make_temp_dir("profile");
    let path = dir.join("bus.json");
    std::fs::write(
        &path,
        r#"{"name":"bench","addressing":"standard","reserved":[{"start":1792,"end":2047,"label":"bootloader"}]}"#,
    )
    .expect("profile should be writable");

    let output = febcan()
        .args(["--format", "json", "profile", "--extended", "--profile"])
        .arg(&path)
        .output()
        .expect("profile should run");

    assert!(output.status.success());
    let payload = json_stdout(&output);
    assert!(payload["schema_id"]
        .as_str()
        .is_some_and(|id| id.ends_with("bus-profile.schema.json")));
    assert_eq!(payload["name"], "bench");
    assert_eq!(payload["addressing"], "extended");
    assert_eq!(payload["reserved"][0]["label"], "bootloader");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn malformed_profile_is_usage_error() {
    let dir = make_temp_dir("bad-profile");
    let path = dir.join("bus.json");
    std::fs::write(&path, r#"{"addressing":"wide"}"#).expect("profile should be writable");

    let output = febcan()
        .args(["check", "--profile"])
        .arg(&path)
        .output()
        .expect("check should run");

    assert_eq!(output.status.code(), Some(64));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn version_prints_package_version() {
    let output = febcan()
        .arg("version")
        .output()
        .expect("version should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("febcan {}", env!("CARGO_PKG_VERSION"))
    );
}
