//! Integration tests for the `shelf` CLI.
//!
//! Each test points `shelf` at a temp data directory, runs it as a
//! subprocess, and verifies stdout and/or the stored JSON.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `shelf` binary.
fn shelf_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("shelf");
    path
}

/// Seed a data directory with Work[Ship release (done), Plan sprint] and Home[Water plants].
fn create_test_data(dir: &Path) {
    fs::write(
        dir.join("todoCategories.json"),
        r#"[
  {"id":100,"title":"Work","items":[
    {"id":101,"description":"Ship release","completed":true},
    {"id":102,"description":"Plan sprint","completed":false}
  ]},
  {"id":200,"title":"Home","items":[
    {"id":201,"description":"Water plants","completed":false}
  ]}
]"#,
    )
    .unwrap();
}

/// Run `shelf` against the given data directory, returning (stdout, stderr, success).
fn run_shelf(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(shelf_bin())
        .arg("-C")
        .arg(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run shelf");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `shelf` expecting success, return stdout.
fn run_shelf_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_shelf(dir, args);
    if !success {
        panic!(
            "shelf {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

fn stored(dir: &Path) -> serde_json::Value {
    let text = fs::read_to_string(dir.join("todoCategories.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

/// Last line of stdout (where create commands print the new ID)
fn last_line(out: &str) -> &str {
    out.lines().last().unwrap_or("").trim()
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

#[test]
fn test_list_empty_data_dir() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_shelf_ok(tmp.path(), &["list"]);
    assert!(out.contains("All Tasks"));
    assert!(out.contains("0 out of 0 Tasks Completed"));
}

#[test]
fn test_list_all() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_data(tmp.path());
    let out = run_shelf_ok(tmp.path(), &["list"]);
    assert!(out.contains("[x] 101 Ship release (Work)"));
    assert!(out.contains("[ ] 201 Water plants (Home)"));
    assert!(out.contains("1 out of 3 Tasks Completed"));
}

#[test]
fn test_filter_pending() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_data(tmp.path());
    run_shelf_ok(tmp.path(), &["filter", "pending"]);

    let out = run_shelf_ok(tmp.path(), &["list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["title"], "Pending Tasks");
    assert_eq!(parsed["summary"], "2 Tasks Pending");
    let ids: Vec<i64> = parsed["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![102, 201]);
}

#[test]
fn test_filter_unknown_status() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_stdout, stderr, success) = run_shelf(tmp.path(), &["filter", "blocked"]);
    assert!(!success);
    assert!(stderr.contains("unknown status"));
}

#[test]
fn test_overview_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_data(tmp.path());
    let out = run_shelf_ok(tmp.path(), &["overview", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["counts"]["total"], 3);
    assert_eq!(parsed["counts"]["completed"], 1);
    assert_eq!(parsed["counts"]["pending"], 2);
    assert_eq!(parsed["categories"].as_array().unwrap().len(), 2);
}

#[test]
fn test_whose() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_data(tmp.path());
    assert_eq!(run_shelf_ok(tmp.path(), &["whose", "201"]).trim(), "Home");
    assert_eq!(run_shelf_ok(tmp.path(), &["whose", "999"]).trim(), "Unknown");
}

// ---------------------------------------------------------------------------
// Category commands
// ---------------------------------------------------------------------------

#[test]
fn test_category_add_with_tasks() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_shelf_ok(
        tmp.path(),
        &["category", "add", "Groceries", "--task", "Milk", "-t", "Eggs"],
    );
    assert!(out.contains("Category added successfully."));
    let id: i64 = last_line(&out).parse().unwrap();

    let data = stored(tmp.path());
    assert_eq!(data[0]["id"], id);
    assert_eq!(data[0]["title"], "Groceries");
    assert_eq!(data[0]["items"][1]["description"], "Eggs");
    assert_eq!(data[0]["items"][1]["completed"], false);
}

#[test]
fn test_category_add_duplicate() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_data(tmp.path());
    let before = stored(tmp.path());
    let (_stdout, stderr, success) = run_shelf(tmp.path(), &["category", "add", "work"]);
    assert!(!success);
    assert!(stderr.contains("already exists"));
    assert_eq!(stored(tmp.path()), before);
}

#[test]
fn test_category_add_repeated_task() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_stdout, stderr, success) = run_shelf(
        tmp.path(),
        &["category", "add", "Work", "--task", "Buy milk", "--task", "buy MILK"],
    );
    assert!(!success);
    assert!(stderr.contains("more than once"));
    assert!(!tmp.path().join("todoCategories.json").exists());
}

#[test]
fn test_category_rename() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_data(tmp.path());
    run_shelf_ok(tmp.path(), &["category", "rename", "200", "House"]);
    assert_eq!(stored(tmp.path())[1]["title"], "House");
}

#[test]
fn test_category_rm_not_found() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_data(tmp.path());
    let before = stored(tmp.path());
    let (_stdout, stderr, success) = run_shelf(tmp.path(), &["category", "rm", "12345"]);
    assert!(!success);
    assert!(stderr.contains("not found"));
    assert_eq!(stored(tmp.path()), before);
}

#[test]
fn test_category_rm_clears_selection() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_data(tmp.path());
    run_shelf_ok(tmp.path(), &["select", "100"]);
    run_shelf_ok(tmp.path(), &["category", "rm", "100"]);

    let data = stored(tmp.path());
    assert_eq!(data.as_array().unwrap().len(), 1);
    assert_eq!(data[0]["title"], "Home");
    let out = run_shelf_ok(tmp.path(), &["list"]);
    assert!(out.starts_with("All Tasks"));
}

// ---------------------------------------------------------------------------
// Task commands
// ---------------------------------------------------------------------------

#[test]
fn test_add_requires_selection() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_data(tmp.path());
    let (_stdout, stderr, success) = run_shelf(tmp.path(), &["add", "Buy milk"]);
    assert!(!success);
    assert!(stderr.contains("no category selected"));
}

#[test]
fn test_select_then_add() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_data(tmp.path());
    run_shelf_ok(tmp.path(), &["select", "200"]);
    let out = run_shelf_ok(tmp.path(), &["add", "Buy milk"]);
    let id: i64 = last_line(&out).parse().unwrap();

    let data = stored(tmp.path());
    let home = data[1]["items"].as_array().unwrap();
    assert_eq!(home.len(), 2);
    assert_eq!(home[1]["id"], id);
    assert_eq!(home[1]["description"], "Buy milk");

    let (_stdout, stderr, success) = run_shelf(tmp.path(), &["add", "buy MILK"]);
    assert!(!success);
    assert!(stderr.contains("already exists"));
    assert_eq!(stored(tmp.path())[1]["items"].as_array().unwrap().len(), 2);
}

#[test]
fn test_edit_and_rm() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_data(tmp.path());
    run_shelf_ok(tmp.path(), &["edit", "102", "Plan retro"]);
    assert_eq!(stored(tmp.path())[0]["items"][1]["description"], "Plan retro");

    run_shelf_ok(tmp.path(), &["rm", "101"]);
    let work = stored(tmp.path())[0]["items"].clone();
    assert_eq!(work.as_array().unwrap().len(), 1);
    assert_eq!(work[0]["id"], 102);
}

#[test]
fn test_toggle() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_data(tmp.path());
    let out = run_shelf_ok(tmp.path(), &["toggle", "201"]);
    assert!(out.contains("completed"));
    assert_eq!(stored(tmp.path())[1]["items"][0]["completed"], true);

    run_shelf_ok(tmp.path(), &["toggle", "201"]);
    assert_eq!(stored(tmp.path())[1]["items"][0]["completed"], false);
}

#[test]
fn test_toggle_unknown_is_silent() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_data(tmp.path());
    let before = fs::read_to_string(tmp.path().join("todoCategories.json")).unwrap();
    let out = run_shelf_ok(tmp.path(), &["toggle", "999"]);
    assert!(out.is_empty());
    let after = fs::read_to_string(tmp.path().join("todoCategories.json")).unwrap();
    assert_eq!(before, after);
}

// ---------------------------------------------------------------------------
// Storage and config
// ---------------------------------------------------------------------------

#[test]
fn test_corrupt_storage_starts_empty() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("todoCategories.json"), "not json {{{").unwrap();

    let out = run_shelf_ok(tmp.path(), &["categories"]);
    assert!(out.contains("(no categories)"));
    let bak = fs::read_to_string(tmp.path().join("todoCategories.json.bak")).unwrap();
    assert_eq!(bak, "not json {{{");
}

#[test]
fn test_config_storage_key() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "[storage]\nkey = \"lists\"\n",
    )
    .unwrap();
    run_shelf_ok(tmp.path(), &["category", "add", "Work"]);
    assert!(tmp.path().join("lists.json").exists());
    assert!(!tmp.path().join("todoCategories.json").exists());
}

#[test]
fn test_malformed_config_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[storage\n").unwrap();
    let (_stdout, stderr, success) = run_shelf(tmp.path(), &["list"]);
    assert!(!success);
    assert!(stderr.contains("config.toml"));
}
