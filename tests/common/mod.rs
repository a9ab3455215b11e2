#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Binary under test, isolated in `dir`: its own state file, no config file,
/// and the offline mock source in case a fetch happens.
pub fn userdash_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("userdash").expect("userdash binary not found");
    cmd.current_dir(dir.path())
        .env("USERDASH_STATE_PATH", state_path(dir))
        .env("USERDASH__CONNECTORS__USER_SERVICE__ENABLED", "false")
        .env_remove("RUST_LOG");
    cmd
}

pub fn state_path(dir: &TempDir) -> PathBuf {
    dir.path().join("state.json")
}

/// `count` viewers named User1..UserN; every third one is an admin.
pub fn sample_users(count: u64) -> Value {
    let users: Vec<Value> = (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "firstName": format!("User{id}"),
                "lastName": "Sample",
                "email": format!("user{id}@example.com"),
                "role": if id % 3 == 0 { "admin" } else { "viewer" },
                "isActive": true
            })
        })
        .collect();
    Value::Array(users)
}

/// Write a state file the way the dashboard stores it: string values only.
pub fn seed_state(dir: &TempDir, users: &Value, extra: &[(&str, &str)]) {
    let mut state = serde_json::Map::new();
    state.insert("users".to_string(), Value::String(users.to_string()));
    for (key, value) in extra {
        state.insert(key.to_string(), Value::String(value.to_string()));
    }
    std::fs::write(state_path(dir), Value::Object(state).to_string()).unwrap();
}

pub fn read_state(path: &Path) -> serde_json::Map<String, Value> {
    let raw = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&raw).unwrap()
}

pub fn stored_users(dir: &TempDir) -> Vec<Value> {
    let state = read_state(&state_path(dir));
    let raw = state["users"].as_str().unwrap();
    serde_json::from_str(raw).unwrap()
}
