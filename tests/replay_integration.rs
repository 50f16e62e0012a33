//! Integration tests for the gqlog binary
//!
//! These tests run the built binary against recorded requests:
//! - Default bindings for resolved operations and errors
//! - Introspection suppression
//! - Overrides from flags and config files
//! - Event listing

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Helper to run gqlog with an isolated config location and no colors
fn run_gqlog(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gqlog"))
        .env("GQLOG_CONFIG", dir.join("gqlog.yaml"))
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("RUST_LOG")
        .current_dir(dir)
        .arg("--color")
        .arg("never")
        .args(args)
        .output()
        .expect("Failed to execute gqlog")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Write a records file and return its path as a string
fn write_records(dir: &Path, content: &str) -> String {
    let path = dir.join("requests.yaml");
    fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

const REQUESTS: &str = r#"
- snapshot:
    operationName: GetUser
    operation: { name: GetUser, operation: query }
  events: [parsingDidStart, didResolveOperation, willSendResponse]
- snapshot:
    operationName: IntrospectionQuery
    operation: { name: IntrospectionQuery, operation: query }
  events: [didResolveOperation]
- snapshot:
    operationName: CreatePost
    operation: { name: CreatePost, operation: mutation }
    errors: [boom, bang]
  events: [didEncounterErrors]
"#;

#[test]
fn test_replay_default_bindings() {
    let temp = TempDir::new().unwrap();
    let file = write_records(temp.path(), REQUESTS);

    let output = run_gqlog(temp.path(), &["replay", &file]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[0].starts_with("GetUser query - success ["));
    assert!(lines[1].starts_with("CreatePost mutation - error ["));
    assert_eq!(&lines[2..], &["Errors: ", "boom", "bang"]);
    assert!(!stdout.contains("IntrospectionQuery"));
}

#[test]
fn test_replay_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let temp = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_gqlog"))
        .env("GQLOG_CONFIG", temp.path().join("gqlog.yaml"))
        .env("XDG_CONFIG_HOME", temp.path())
        .current_dir(temp.path())
        .args(["--color", "never", "replay"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"[{"events": ["didResolveOperation"]}]"#)
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("unknown  - success ["));
}

#[test]
fn test_replay_with_bind_flag() {
    let temp = TempDir::new().unwrap();
    let file = write_records(temp.path(), REQUESTS);

    let output = run_gqlog(
        temp.path(),
        &["--bind", "didResolveOperation=info", "--bind", "parsingDidStart=info", "replay", &file],
    );
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("GetUser query - info ["));
    assert!(lines[1].starts_with("GetUser query - info ["));
    // Default error binding stays active
    assert!(stdout.contains("CreatePost mutation - error ["));
    assert!(!stdout.contains("- success"));
}

#[test]
fn test_replay_with_config_bindings() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("gqlog.yaml"), "bindings:\n  willSendResponse: info\n").unwrap();
    let file = write_records(temp.path(), REQUESTS);

    let output = run_gqlog(temp.path(), &["replay", &file]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("GetUser query - success ["));
    assert!(stdout.contains("GetUser query - info ["));
}

#[test]
fn test_replay_rejects_bad_records() {
    let temp = TempDir::new().unwrap();
    let file = write_records(temp.path(), "- events: [requestDidExplode]\n");

    let output = run_gqlog(temp.path(), &["replay", &file]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse request records"));
}

#[test]
fn test_events_json() {
    let temp = TempDir::new().unwrap();

    let output = run_gqlog(temp.path(), &["events", "-o", "json", "--bind", "willSendResponse=info"]);
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 10);

    let level_of = |name: &str| {
        entries
            .iter()
            .find(|e| e["event"] == name)
            .map(|e| e["level"].clone())
            .unwrap()
    };
    assert_eq!(level_of("didEncounterErrors"), "error");
    assert_eq!(level_of("didResolveOperation"), "success");
    assert_eq!(level_of("willSendResponse"), "info");
    assert!(level_of("parsingDidStart").is_null());
}

#[test]
fn test_events_text() {
    let temp = TempDir::new().unwrap();

    let output = run_gqlog(temp.path(), &["events", "-o", "text"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Lifecycle events:"));
    assert!(stdout.contains("didEncounterErrors"));
    assert!(stdout.contains("willSendSubsequentPayload"));
}
