//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn quizscore() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizscore").unwrap()
}

#[test]
fn score_partial_match() {
    quizscore()
        .arg(r#"["A","B","C"]"#)
        .arg(r#"["A","B","D"]"#)
        .assert()
        .success()
        .stdout("2");
}

#[test]
fn score_ignores_case_and_whitespace() {
    quizscore()
        .arg(r#"["a", " b ", "c d"]"#)
        .arg(r#"["A", "B", "CD"]"#)
        .assert()
        .success()
        .stdout("3");
}

#[test]
fn score_empty_sets() {
    quizscore()
        .arg("[]")
        .arg("[]")
        .assert()
        .success()
        .stdout("0");
}

#[test]
fn score_ignores_extra_answers() {
    quizscore()
        .arg(r#"["A","B","C"]"#)
        .arg(r#"["A","B"]"#)
        .assert()
        .success()
        .stdout("2");
}

#[test]
fn malformed_input_is_treated_as_empty() {
    quizscore()
        .arg("not json")
        .arg(r#"["A"]"#)
        .assert()
        .success()
        .stdout("0")
        .stderr(predicate::str::contains("error parsing answer set"));
}

#[test]
fn non_string_elements_are_treated_as_empty() {
    quizscore()
        .arg(r#"["A"]"#)
        .arg("[1, 2]")
        .assert()
        .success()
        .stdout("0");
}

#[test]
fn hyphen_leading_input_is_treated_as_empty() {
    quizscore()
        .arg("-1")
        .arg(r#"["A"]"#)
        .assert()
        .success()
        .stdout("0");
}

#[test]
fn extra_arguments_are_ignored() {
    quizscore()
        .arg(r#"["A"]"#)
        .arg(r#"["A"]"#)
        .arg("extra")
        .assert()
        .success()
        .stdout("1");
}

#[test]
fn non_breaking_space_is_not_stripped() {
    quizscore()
        .arg(r#"["A\u00A0"]"#)
        .arg(r#"["A"]"#)
        .assert()
        .success()
        .stdout("0");
}

#[test]
fn json_format() {
    quizscore()
        .arg("--format")
        .arg("json")
        .arg(r#"["A","x"]"#)
        .arg(r#"["a","B","C"]"#)
        .assert()
        .success()
        .stdout(r#"{"score":1,"total":3}"#);
}

#[test]
fn verbose_logs_to_stderr_only() {
    quizscore()
        .arg("--verbose")
        .arg(r#"["A"]"#)
        .arg(r#"["A","B"]"#)
        .assert()
        .success()
        .stdout("1")
        .stderr(predicate::str::contains("answer count mismatch"));
}

#[test]
fn missing_arguments_prints_usage() {
    quizscore()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("Example: quizscore"));
}

#[test]
fn single_argument_prints_usage() {
    quizscore()
        .arg(r#"["A"]"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_format_is_a_usage_error() {
    quizscore()
        .arg("--format")
        .arg("xml")
        .arg("[]")
        .arg("[]")
        .assert()
        .code(1);
}

#[test]
fn help_output() {
    quizscore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score quiz answers against an answer key"));
}
