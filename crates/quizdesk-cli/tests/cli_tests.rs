//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizdesk() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizdesk").unwrap()
}

fn write_answers(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("answers.json");
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn validate_single_quiz() {
    quizdesk()
        .arg("validate")
        .arg("--catalog")
        .arg("../../catalogs/exercise-3.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise 3"))
        .stdout(predicate::str::contains("2 questions, 15 points"))
        .stdout(predicate::str::contains("All quizzes valid"));
}

#[test]
fn validate_directory() {
    quizdesk()
        .arg("validate")
        .arg("--catalog")
        .arg("../../catalogs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz 0: Exercise 4"))
        .stdout(predicate::str::contains("Quiz 1: Exercise 3"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("sloppy.toml"),
        r#"
[quiz]
title = "Sloppy"

[[questions]]
id = "q1"
type = "text"
prompt = "Anything?"
points = 0
answer = "yes"
"#,
    )
    .unwrap();

    quizdesk()
        .arg("validate")
        .arg("--catalog")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[q1] WARNING"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    quizdesk()
        .arg("validate")
        .arg("--catalog")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn grade_text_output() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(
        &dir,
        r#"{"question_1": "Cash only", "question_2": "$213,000"}"#,
    );

    quizdesk()
        .arg("grade")
        .arg("--catalog")
        .arg("../../catalogs/exercise-3.toml")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("question_2"))
        .stdout(predicate::str::contains("Score: 5 / 15 (1 of 2 correct)"));
}

#[test]
fn grade_json_output() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(&dir, r#"{"question_2": "abc"}"#);

    let output = quizdesk()
        .arg("grade")
        .arg("--catalog")
        .arg("../../catalogs/exercise-3.toml")
        .arg("--answers")
        .arg(&answers)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let graded: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(graded["score"], 0);
    assert_eq!(graded["total_points"], 15);
    assert_eq!(graded["results"][1]["user_answer"], "abc");
    assert_eq!(graded["results"][1]["is_correct"], false);
}

#[test]
fn grade_html_output() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(&dir, r#"{"question_2": 213000}"#);
    let output = dir.path().join("results.html");

    quizdesk()
        .arg("grade")
        .arg("--catalog")
        .arg("../../catalogs/exercise-3.toml")
        .arg("--answers")
        .arg(&answers)
        .arg("--format")
        .arg("html")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Results page"));

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("Score: <strong>5 / 15</strong>"));
}

#[test]
fn grade_unknown_quiz() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(&dir, "{}");

    quizdesk()
        .arg("grade")
        .arg("--catalog")
        .arg("../../catalogs/exercise-3.toml")
        .arg("--quiz")
        .arg("3")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .failure()
        .stderr(predicate::str::contains("quiz not found: 3"));
}

#[test]
fn grade_unknown_format() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(&dir, "{}");

    quizdesk()
        .arg("grade")
        .arg("--catalog")
        .arg("../../catalogs/exercise-3.toml")
        .arg("--answers")
        .arg(&answers)
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizdesk()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizdesk.toml"))
        .stdout(predicate::str::contains("Created catalogs/example.toml"));

    assert!(dir.path().join("quizdesk.toml").exists());
    assert!(dir.path().join("catalogs/example.toml").exists());

    // The generated quiz must itself be valid
    quizdesk()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--catalog")
        .arg("catalogs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Example Quiz"))
        .stdout(predicate::str::contains("All quizzes valid"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    quizdesk()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init should skip
    quizdesk()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn serve_with_missing_config_fails() {
    quizdesk()
        .arg("serve")
        .arg("--config")
        .arg("no_such_config.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn help_output() {
    quizdesk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz-taking web application"));
}

#[test]
fn version_output() {
    quizdesk()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizdesk"));
}
