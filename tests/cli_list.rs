//! Integration tests for `userdash list`.

mod common;

use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();

    common::userdash_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("set-role"))
        .stdout(predicate::str::contains("browse"));
}

#[test]
fn test_list_renders_first_page_from_state() {
    let dir = TempDir::new().unwrap();
    common::seed_state(&dir, &common::sample_users(16), &[]);

    common::userdash_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("User1 Sample"))
        .stdout(predicate::str::contains("User15 Sample"))
        .stdout(predicate::str::contains("User16 Sample").not())
        .stdout(predicate::str::contains("[1] 2"));
}

#[test]
fn test_list_json_reports_pagination() {
    let dir = TempDir::new().unwrap();
    common::seed_state(&dir, &common::sample_users(16), &[("currentPage", "2")]);

    let output = common::userdash_cmd(&dir)
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let view: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["currentPage"], 2);
    assert_eq!(view["totalPages"], 2);
    assert_eq!(view["filteredCount"], 16);
    assert_eq!(view["users"].as_array().unwrap().len(), 1);
    assert_eq!(view["users"][0]["id"], 16);
}

#[test]
fn test_list_sort_descending_by_id() {
    let dir = TempDir::new().unwrap();
    common::seed_state(&dir, &common::sample_users(5), &[]);

    let output = common::userdash_cmd(&dir)
        .args(["list", "--json", "--sort", "id", "--desc"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let view: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["users"][0]["id"], 5);
    assert_eq!(view["sort"]["key"], "id");
    assert_eq!(view["sort"]["direction"], "desc");
}

#[test]
fn test_list_cards_view() {
    let dir = TempDir::new().unwrap();
    common::seed_state(&dir, &common::sample_users(2), &[]);

    common::userdash_cmd(&dir)
        .args(["list", "--view", "cards"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:   User2 Sample"))
        .stdout(predicate::str::contains("Status: Active"));
}

#[test]
fn test_desc_requires_sort() {
    let dir = TempDir::new().unwrap();

    common::userdash_cmd(&dir)
        .args(["list", "--desc"])
        .assert()
        .failure();
}

#[test]
fn test_first_run_fetches_and_saves_users() {
    let dir = TempDir::new().unwrap();

    common::userdash_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Emily Johnson"));

    let users = common::stored_users(&dir);
    assert_eq!(users.len(), 5);
    assert!(users
        .iter()
        .all(|u| u["role"] == "viewer" && u["isActive"] == true));
}

#[test]
fn test_malformed_state_is_replaced_by_fetch() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        common::state_path(&dir),
        r#"{"users": "[{\"id\": 1, \"role\": \"owner\"}]", "currentPage": "x"}"#,
    )
    .unwrap();

    common::userdash_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Emily Johnson"));

    assert_eq!(common::stored_users(&dir).len(), 5);
}

#[test]
fn test_unreachable_source_reports_load_error() {
    let dir = TempDir::new().unwrap();

    common::userdash_cmd(&dir)
        .env("USERDASH__CONNECTORS__USER_SERVICE__ENABLED", "true")
        .env(
            "USERDASH__CONNECTORS__USER_SERVICE__USERS_URL",
            "http://127.0.0.1:9/users",
        )
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to load users"));

    assert!(!common::state_path(&dir).exists());
}
