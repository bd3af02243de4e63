//! Basic CLI E2E tests.
//!
//! Tests run the built binary against a throwaway data directory and verify
//! outputs and persisted files.

use std::path::Path;
use std::process::Command;

/// Run a CLI command with `data_dir` as its data directory.
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_habitgrid"))
        .env("HABITGRID_DATA_DIR", data_dir)
        .env_remove("HABITGRID_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_ok(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    stdout
}

fn stored_month(data_dir: &Path, month: &str) -> serde_json::Value {
    let path = data_dir.join("months").join(format!("habits-{month}.json"));
    let raw = std::fs::read_to_string(path).expect("month file");
    serde_json::from_str(&raw).expect("month json")
}

#[test]
fn test_habit_add_and_list() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();

    let out = run_ok(dir, &["habit", "add", "Read", "--description", "20 pages", "--month", "2025-6"]);
    assert!(out.contains("Habit added: 0"));

    let out = run_ok(dir, &["habit", "list", "--month", "2025-6", "--json"]);
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(rows[0]["name"], "Read");
    assert_eq!(rows[0]["description"], "20 pages");

    let stored = stored_month(dir, "2025-6");
    assert_eq!(stored[0]["progress"], serde_json::json!({}));
}

#[test]
fn test_habit_add_rejects_blank_name() {
    let tmp = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(tmp.path(), &["habit", "add", "  ", "--month", "2025-6"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_habit_toggle_cycles_and_persists() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    run_ok(dir, &["habit", "add", "Read", "--month", "2025-6"]);

    let out = run_ok(dir, &["habit", "toggle", "0", "1", "--month", "2025-6"]);
    assert!(out.contains("complete"));
    run_ok(dir, &["habit", "toggle", "0", "2", "--month", "2025-6"]);
    let out = run_ok(dir, &["habit", "toggle", "0", "2", "--month", "2025-6"]);
    assert!(out.contains("half"));
    run_ok(dir, &["habit", "toggle", "0", "3", "--month", "2025-6"]);
    run_ok(dir, &["habit", "toggle", "0", "3", "--month", "2025-6"]);
    run_ok(dir, &["habit", "toggle", "0", "3", "--month", "2025-6"]);

    let stored = stored_month(dir, "2025-6");
    assert_eq!(
        stored[0]["progress"],
        serde_json::json!({"1": true, "2": "half", "3": false})
    );
    assert_eq!(stored[0]["longestStreak"], 1.5);
    assert_eq!(stored[0]["successRate"], 50);
}

#[test]
fn test_habit_toggle_rejects_day_outside_month() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    run_ok(dir, &["habit", "add", "Read", "--month", "2025-2"]);
    let (_, stderr, code) = run_cli(dir, &["habit", "toggle", "0", "30", "--month", "2025-2"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("outside"));
}

#[test]
fn test_habit_edit_and_remove() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    run_ok(dir, &["habit", "add", "Read", "--month", "2025-6"]);
    run_ok(dir, &["habit", "add", "Walk", "--month", "2025-6"]);

    run_ok(dir, &["habit", "edit", "0", "--name", "Read more", "--month", "2025-6"]);
    let out = run_ok(dir, &["habit", "remove", "1", "--month", "2025-6"]);
    assert!(out.contains("Walk"));

    let stored = stored_month(dir, "2025-6");
    assert_eq!(stored.as_array().unwrap().len(), 1);
    assert_eq!(stored[0]["name"], "Read more");
}

#[test]
fn test_month_show_renders_grid() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    run_ok(dir, &["habit", "add", "Read", "--month", "2025-6"]);
    run_ok(dir, &["habit", "toggle", "0", "1", "--month", "2025-6"]);

    let out = run_ok(dir, &["month", "show", "--month", "2025-6"]);
    assert!(out.starts_with("June 2025"));
    assert!(out.contains("[0] Read"));
    assert!(out.contains('✓'));
}

#[test]
fn test_month_copy_forward() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    run_ok(dir, &["habit", "add", "Read", "--month", "2025-6"]);
    run_ok(dir, &["habit", "toggle", "0", "1", "--month", "2025-6"]);

    let out = run_ok(dir, &["month", "copy-forward", "--month", "2025-7"]);
    assert!(out.contains("Copied 1 habit(s) from 2025-6 to 2025-7"));

    let stored = stored_month(dir, "2025-7");
    assert_eq!(stored[0]["name"], "Read");
    assert_eq!(stored[0]["progress"], serde_json::json!({}));
}

#[test]
fn test_month_copy_forward_guards_populated_target() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    run_ok(dir, &["habit", "add", "Read", "--month", "2025-6"]);
    run_ok(dir, &["habit", "add", "Keep", "--month", "2025-7"]);

    let (_, stderr, code) = run_cli(dir, &["month", "copy-forward", "--month", "2025-7"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("--force"));
    assert_eq!(stored_month(dir, "2025-7")[0]["name"], "Keep");

    run_ok(dir, &["month", "copy-forward", "--month", "2025-7", "--force"]);
    assert_eq!(stored_month(dir, "2025-7")[0]["name"], "Read");
}

#[test]
fn test_month_copy_forward_from_empty_source_adds_placeholder() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    run_ok(dir, &["month", "copy-forward", "--month", "2025-9"]);
    let stored = stored_month(dir, "2025-9");
    assert_eq!(stored.as_array().unwrap().len(), 1);
    assert_eq!(stored[0]["name"], "New Habit");
}

#[test]
fn test_month_navigation() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    assert_eq!(run_ok(dir, &["month", "next", "--month", "2025-12"]).trim(), "2026-1");
    assert_eq!(run_ok(dir, &["month", "prev", "--month", "2025-1"]).trim(), "2024-12");
}

#[test]
fn test_invalid_month_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(tmp.path(), &["habit", "list", "--month", "2025-13"]);
    assert_ne!(code, 0);
}

#[test]
fn test_stats_reports_overview() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    run_ok(dir, &["habit", "add", "Read", "--month", "2025-6"]);
    run_ok(dir, &["habit", "toggle", "0", "1", "--month", "2025-6"]);

    let out = run_ok(dir, &["stats", "--month", "2025-6"]);
    let overview: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(overview["month"], "2025-6");
    assert_eq!(overview["success_rate"], 100);
    assert_eq!(overview["most_check_marks"], 1.0);
    assert_eq!(overview["habit_count"], 1);
}

#[test]
fn test_seed_month_lists_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_ok(tmp.path(), &["habit", "list", "--month", "2025-5", "--json"]);
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["name"], "Practice German");
}

#[test]
fn test_config_get_set_list() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    assert_eq!(run_ok(dir, &["config", "get", "stats.recent_window_days"]).trim(), "5");
    run_ok(dir, &["config", "set", "copy_forward.placeholder_name", "Stretch"]);
    assert_eq!(
        run_ok(dir, &["config", "get", "copy_forward.placeholder_name"]).trim(),
        "Stretch"
    );

    run_ok(dir, &["month", "copy-forward", "--month", "2025-9"]);
    assert_eq!(stored_month(dir, "2025-9")[0]["name"], "Stretch");

    let (_, _, code) = run_cli(dir, &["config", "get", "nope"]);
    assert_eq!(code, 1);

    let out = run_ok(dir, &["config", "list"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(json.get("display").is_some());
}

#[test]
fn test_completions() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_ok(tmp.path(), &["completions", "bash"]);
    assert!(out.contains("habitgrid"));
}
