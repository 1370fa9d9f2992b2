use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PLAN_JSON: &str = r#"{
  "name": "Introduction to Basic Physics",
  "desc": "Explore fundamental concepts of physics.",
  "category": "Physics",
  "daily_lessons": [
    {"name": "Motion", "desc": "Speed and velocity.", "tasks": ["Measure your walking speed", "Plot distance over time"]},
    {"name": "Forces", "desc": "Newton's laws.", "tasks": ["Push a box"]}
  ]
}"#;

const RESPONSE: &str = "Here is your plan!\n<¤§<STUDYPLAN>§¤>\nname: A\ndesc: B\ncategory: C\ndaily_lessons:\n### 1\nname: L1\ndesc: D1\ntasks:\n- t1\n- t2\n<¤§</STUDYPLAN>§¤>\nHave fun!";

/// Helper function to create a Command with --no-color flag for testing
fn sm_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sm").expect("Failed to find sm binary");
    cmd.arg("--no-color");
    cmd
}

/// Helper function to write a fixture file into a fresh temporary directory
fn fixture(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    (temp_dir, path)
}

/// Helper function to start the fixture plan into a file
fn started_plan() -> (TempDir, PathBuf) {
    let (temp_dir, plan_path) = fixture("plan.json", PLAN_JSON);
    let output = sm_cmd()
        .args(["start", plan_path.to_str().unwrap(), "--original-id", "physics-101"])
        .output()
        .expect("Failed to run start");
    assert!(output.status.success());

    let started_path = temp_dir.path().join("started.json");
    fs::write(&started_path, output.stdout).expect("Failed to write started plan");
    (temp_dir, started_path)
}

#[test]
fn test_cli_parse_prints_markdown_and_plan() {
    let (_temp_dir, path) = fixture("response.txt", RESPONSE);

    sm_cmd()
        .args(["parse", path.to_str().unwrap(), "--chunk-size", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Here is your plan!"))
        .stdout(predicate::str::contains("Have fun!"))
        .stdout(predicate::str::contains("## Day 1: L1"))
        .stdout(predicate::str::contains("<¤§<").not());
}

#[test]
fn test_cli_parse_json_from_stdin() {
    let output = sm_cmd()
        .args(["parse", "--json"])
        .write_stdin(RESPONSE)
        .output()
        .expect("Failed to run parse");
    assert!(output.status.success());

    let messages: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(messages[0]["role"], "assistant");
    assert_eq!(messages[1]["role"], "studyplan");
    assert_eq!(messages[1]["content"]["name"], "A");
    assert_eq!(messages[1]["content"]["daily_lessons"][0]["tasks"][1], "t2");
    assert_eq!(messages[2]["content"], "\nHave fun!");
}

#[test]
fn test_cli_parse_invalid_plan_fails() {
    let broken = RESPONSE.replace("category: C\n", "");
    let (_temp_dir, path) = fixture("response.txt", &broken);

    sm_cmd()
        .args(["parse", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid studyplan"))
        .stderr(predicate::str::contains("category"));
}

#[test]
fn test_cli_parse_rejects_zero_chunk_size() {
    sm_cmd()
        .args(["parse", "--chunk-size", "0"])
        .write_stdin(RESPONSE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("chunk_size"));
}

#[test]
fn test_cli_start() {
    let (_temp_dir, path) = fixture("plan.json", PLAN_JSON);

    sm_cmd()
        .args(["start", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""goal": "Push a box""#))
        .stdout(predicate::str::contains(r#""completed_at": null"#));
}

#[test]
fn test_cli_progress_json() {
    let (_temp_dir, path) = started_plan();

    sm_cmd()
        .args([
            "progress",
            path.to_str().unwrap(),
            "--timezone",
            "Europe/Paris",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""currentDay": 1"#))
        .stdout(predicate::str::contains(r#""studyplanIsCompleted": false"#));
}

#[test]
fn test_cli_complete_then_progress() {
    let (_temp_dir, path) = started_plan();
    let file = path.to_str().unwrap();

    for index in ["0", "1"] {
        sm_cmd()
            .args(["complete", file, index, "--timezone", "UTC", "--now", "2024-03-14T18:00:00Z"])
            .assert()
            .success()
            .stdout(predicate::str::contains("of day 1"))
            .stdout(predicate::str::contains("2024-03-14 18:00:00 UTC"));
    }

    // Same evening: day 1 is done, nothing more today.
    sm_cmd()
        .args(["complete", file, "0", "--timezone", "UTC", "--now", "2024-03-14T20:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wait until tomorrow"));

    // Next day: day 2.
    sm_cmd()
        .args(["progress", file, "--timezone", "UTC", "--now", "2024-03-15T09:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Day 2 (0/1)"))
        .stdout(predicate::str::contains("[ ] Push a box"));

    let saved = fs::read_to_string(&path).expect("Failed to read saved plan");
    assert!(saved.contains("2024-03-14T18:00:00Z"));
    assert!(saved.contains("physics-101"));
}

#[test]
fn test_cli_progress_invalid_timezone() {
    let (_temp_dir, path) = started_plan();

    sm_cmd()
        .args(["progress", path.to_str().unwrap(), "--timezone", "Mars/Base"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Mars/Base"));
}

#[test]
fn test_cli_prompt() {
    let (_temp_dir, path) = fixture("plan.json", PLAN_JSON);

    sm_cmd()
        .args(["prompt", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<¤§<STUDYPLAN>§¤>\nname: Introduction to Basic Physics"))
        .stdout(predicate::str::contains("### 2\nname: Forces\ndesc: Newton's laws.\ntasks:\n- Push a box"));
}

#[test]
fn test_cli_missing_file() {
    sm_cmd()
        .args(["progress", "/nonexistent/started.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load started studyplan"));
}
