//! End-to-end tests for the `budget` binary, run offline against a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_LEDGER_DATA_DIR", dir.path())
        .env_remove("BUDGET_LEDGER_ACCESS_TOKEN")
        .env_remove("BUDGET_LEDGER_FILE")
        .env_remove("RUST_LOG")
        .arg("--offline");
    cmd
}

fn read_ledger(dir: &TempDir) -> serde_json::Value {
    let text = std::fs::read_to_string(dir.path().join("budget.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn track_session_prints_summary_and_saves() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .write_stdin("1000\nRent\nHousing\n400\nFood\nGroceries\n150\ndone\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Summary"))
        .stdout(predicate::str::contains("$550.00"))
        .stdout(predicate::str::contains("$450.00"));

    let saved = read_ledger(&dir);
    assert_eq!(saved["income"], 1000);
    assert_eq!(saved["expenses"].as_array().unwrap().len(), 2);
    assert_eq!(saved["expenses"][0]["description"], "Rent");
    assert_eq!(saved["expenses"][1]["category"], "Groceries");
}

#[test]
fn negative_income_is_reprompted() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .write_stdin("-1\n250\ndone\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income cannot be negative"));

    assert_eq!(read_ledger(&dir)["income"], 250);
}

#[test]
fn summary_creates_default_file() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));

    assert_eq!(
        read_ledger(&dir),
        serde_json::json!({"income": 0, "expenses": []})
    );
}

#[test]
fn second_run_continues_from_local_file() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .write_stdin("800\nRent\nHousing\n500\ndone\n")
        .assert()
        .success();

    budget(&dir)
        .write_stdin("\nBus\nTransport\n20\ndone\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("$520.00"))
        .stdout(predicate::str::contains("$280.00"));

    assert_eq!(read_ledger(&dir)["expenses"].as_array().unwrap().len(), 2);
}

#[test]
fn custom_file_flag() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("march.json");

    budget(&dir)
        .arg("--file")
        .arg(&file)
        .write_stdin("300\ndone\n")
        .assert()
        .success();

    assert!(file.exists());
    assert!(!dir.path().join("budget.json").exists());
}

#[test]
fn config_command_shows_paths() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Worksheet:     Budget"))
        .stdout(predicate::str::contains("Income cell:   A2"));
}
