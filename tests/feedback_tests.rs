mod support;

use predicates::prelude::*;
use support::{setup_store, skillrank, stdout_json};

#[test]
fn test_accuracy_without_feedback() {
    let dir = setup_store();

    skillrank()
        .current_dir(dir.path())
        .arg("accuracy")
        .assert()
        .success()
        .stdout(predicate::str::contains("No feedback recorded yet"));

    let output = skillrank()
        .current_dir(dir.path())
        .args(["--format", "json", "accuracy"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["accuracy"], 0.0);
    assert!(json["history"].as_array().unwrap().is_empty());
}

#[test]
fn test_feedback_then_accuracy() {
    let dir = setup_store();

    skillrank()
        .current_dir(dir.path())
        .args(["feedback", "0", "yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Feedback received for course 0"));

    skillrank()
        .current_dir(dir.path())
        .args(["feedback", "1", "no"])
        .assert()
        .success();

    let output = skillrank()
        .current_dir(dir.path())
        .args(["--format", "json", "accuracy"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["accuracy"], 50.0);
    assert_eq!(json["history"], serde_json::json!([50.0]));

    // Every report appends a snapshot
    skillrank()
        .current_dir(dir.path())
        .args(["feedback", "1", "positive"])
        .assert()
        .success();

    skillrank()
        .current_dir(dir.path())
        .arg("accuracy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Accuracy: 66.7%"))
        .stdout(predicate::str::contains("History (2 points): 50.0 66.7"));
}

#[test]
fn test_feedback_json_output() {
    let dir = setup_store();

    let output = skillrank()
        .current_dir(dir.path())
        .args(["--format", "json", "feedback", "3", "TRUE"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["message"], "Feedback received!");
    assert_eq!(json["positive"], true);
    assert_eq!(json["course_total"], 1);
}

#[test]
fn test_feedback_rejects_non_numeric_course_id() {
    let dir = setup_store();

    skillrank()
        .current_dir(dir.path())
        .args(["feedback", "abc", "yes"])
        .assert()
        .code(2);
}

#[test]
fn test_recommended_courses_count_toward_accuracy() {
    let dir = setup_store();

    skillrank()
        .current_dir(dir.path())
        .args(["recommend", "java"])
        .assert()
        .success();

    // Registered but unrated courses yield 0% accuracy, and a snapshot
    skillrank()
        .current_dir(dir.path())
        .args(["--format", "records", "accuracy"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H skillrank=1 records=1 mode=accuracy accuracy=0.00 points=1",
        ));
}
