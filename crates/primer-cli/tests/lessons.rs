use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn primer() -> Command {
    let mut cmd = Command::cargo_bin("primer").unwrap();
    cmd.env_remove("PRIMER_LESSON").env_remove("PRIMER_LOG");
    cmd
}

#[test]
fn runs_types_lesson() {
    let mut cmd = primer();
    cmd.arg("types");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Integers: 42 127 32767 2147483647 9223372036854775807"))
        .stdout(predicate::str::contains("Channel value: 10"))
        .stdout(predicate::str::contains("Function result: 8"))
        .stdout(predicate::str::contains("Hello, world!").not());
}

#[test]
fn runs_packages_lesson() {
    let mut cmd = primer();
    cmd.arg("packages");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Hello, world!"))
        .stdout(predicate::str::contains("user@example.com: no error"))
        .stdout(predicate::str::contains("not-an-email: invalid format"));
}

#[test]
fn runs_variables_lesson() {
    let mut cmd = primer();
    cmd.arg("variables");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Variable 5 Variable 6"))
        .stdout(predicate::str::contains("Variable 6 Variable 5"));
}

#[test]
fn default_runs_every_lesson() {
    let mut cmd = primer();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# packages"))
        .stdout(predicate::str::contains("# variables"))
        .stdout(predicate::str::contains("# types"));
}

#[test]
fn lesson_can_come_from_environment() {
    let mut cmd = primer();
    cmd.env("PRIMER_LESSON", "variables");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# variables"))
        .stdout(predicate::str::contains("# packages").not());
}

#[test]
fn piped_output_has_no_colour() {
    let mut cmd = primer();
    cmd.arg("packages");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn unknown_lesson_is_nonzero() {
    let mut cmd = primer();
    cmd.arg("maps");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn bad_log_filter_is_nonzero() {
    let mut cmd = primer();
    cmd.env("PRIMER_LOG", "primer=notalevel").arg("packages");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid log filter"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let mut cmd = primer();
    cmd.args(["--verbose", "--no-color", "packages"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("starting lesson"))
        .stdout(predicate::str::contains("starting lesson").not());
}
