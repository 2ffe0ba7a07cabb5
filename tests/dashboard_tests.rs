//! Integration tests for stats, calendar and tags views

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{add_entry, init_journal, journal_cmd};

#[test]
fn test_stats_on_empty_journal() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    journal_cmd(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries : 0"))
        .stdout(predicate::str::contains("Average rating : -"));
}

#[test]
fn test_stats_average_and_recent() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    add_entry(temp.path(), &["oldest", "-r", "4", "--date", "2025-01-01"]);
    add_entry(temp.path(), &["unrated", "--date", "2025-01-02"]);
    add_entry(temp.path(), &["good", "-r", "5", "--date", "2025-01-03"]);
    add_entry(temp.path(), &["great", "-r", "5/5", "--date", "2025-01-04"]);

    journal_cmd(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries : 4"))
        .stdout(predicate::str::contains("Average rating : 4.67"))
        .stdout(predicate::str::contains("great"))
        .stdout(predicate::str::contains("oldest").not());
}

#[test]
fn test_stats_respects_recent_count() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    journal_cmd(temp.path())
        .args(["config", "recent_count", "1"])
        .assert()
        .success();
    add_entry(temp.path(), &["older", "--date", "2025-01-01"]);
    add_entry(temp.path(), &["newer", "--date", "2025-01-02"]);

    journal_cmd(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("newer"))
        .stdout(predicate::str::contains("older").not());
}

#[test]
fn test_calendar_marks_entry_days() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    add_entry(temp.path(), &["x", "--date", "2025-01-17"]);

    journal_cmd(temp.path())
        .args(["calendar", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("January 2025"))
        .stdout(predicate::str::contains("Mo  Tu  We  Th  Fr  Sa  Su"))
        .stdout(predicate::str::contains("17*"))
        .stdout(predicate::str::contains("18*").not());
}

#[test]
fn test_calendar_rejects_bad_month() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    journal_cmd(temp.path())
        .args(["calendar", "2025-13"])
        .assert()
        .failure();
}

#[test]
fn test_tags_empty() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    journal_cmd(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found"));
}

#[test]
fn test_calendar_prev_crosses_year() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    add_entry(temp.path(), &["x", "--date", "2024-12-24"]);

    journal_cmd(temp.path())
        .args(["calendar", "2025-01", "--prev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("December 2024"))
        .stdout(predicate::str::contains("24*"));
}

#[test]
fn test_calendar_out_of_range_year_fails_cleanly() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    journal_cmd(temp.path())
        .args(["calendar", "2147483647-12", "--next"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid month"))
        .stderr(predicate::str::contains("panicked").not());
}
