use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_due_date_with_fixed_now() {
    let mut cmd = Command::new(cargo_bin!("bytebank"));
    cmd.args(["due-date", "--now", "2022-08-07T10:30:00Z"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("Due in 3 weeks\n"));
}

#[test]
fn test_due_date_custom_due() {
    let mut cmd = Command::new(cargo_bin!("bytebank"));
    cmd.args([
        "due-date",
        "--due",
        "2024-01-01",
        "--now",
        "2024-01-03T00:00:00Z",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("Due in 2 days\n"));
}

#[test]
fn test_due_date_defaults_to_current_time() {
    let mut cmd = Command::new(cargo_bin!("bytebank"));
    cmd.arg("due-date");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Due in "))
        .stdout(predicate::str::contains("weeks"));
}

#[test]
fn test_due_date_pause_waits_for_enter() {
    let mut cmd = assert_cmd::Command::new(cargo_bin!("bytebank"));
    cmd.args(["due-date", "--now", "2022-07-18T00:00:00Z", "--pause"])
        .write_stdin("\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Due in 1 day"))
        .stdout(predicate::str::contains("Press ENTER to exit"));
}

#[test]
fn test_due_date_invalid_input() {
    let mut cmd = Command::new(cargo_bin!("bytebank"));
    cmd.args(["due-date", "--due", "17/07/2022"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid date `17/07/2022`"));
}
