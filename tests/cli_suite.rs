//! Smoke tests for the `subtrack_cli` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cli(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("subtrack_cli").unwrap();
    cmd.env("SUBTRACK_HOME", home);
    cmd
}

#[test]
fn help_lists_the_command_surface() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("upcoming").and(predicate::str::contains("paid")));
}

#[test]
fn unknown_command_fails() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path()).arg("frobnicate").assert().failure();
}

#[test]
fn add_list_total_flow() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .args([
            "add",
            "title=Netflix",
            "price=9.99",
            "category=Media",
            "cycle=Monthly",
            "anchor=2025-06-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Netflix"));

    cli(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Netflix"));

    cli(dir.path())
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("9.99"));
}

#[test]
fn add_requires_a_title() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .args(["add", "price=9.99"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("title"));
}

#[test]
fn add_rejects_bad_price_text() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .args(["add", "title=News", "price=free"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("price"));
}

#[test]
fn unknown_category_degrades_with_a_warning() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .args(["add", "title=Game", "price=5", "category=Gaming"])
        .assert()
        .success()
        .stdout(predicate::str::contains("using Other"));

    cli(dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Other"));
}

#[test]
fn reset_with_yes_clears_everything() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .args(["add", "title=Gym", "price=20"])
        .assert()
        .success();
    cli(dir.path()).args(["reset", "--yes"]).assert().success();
    cli(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No subscriptions"));
}

#[test]
fn config_round_trips_window_setting() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .args(["config", "window=14"])
        .assert()
        .success();
    cli(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("14 days"));
}
