use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_describes_the_server() {
    let mut cmd = Command::cargo_bin("tavola").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookings"))
        .stdout(predicate::str::contains("--port"));
}

#[test]
fn test_unknown_flag_fails() {
    let mut cmd = Command::cargo_bin("tavola").unwrap();
    cmd.arg("--no-such-flag").assert().failure();
}
