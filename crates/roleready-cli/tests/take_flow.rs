//! End-to-end tests driving `roleready take` over piped stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn roleready() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("roleready").unwrap()
}

/// Console inputs answering every question in the bundled bank with its
/// best-scoring option. Choice answers are 1-based on the console.
fn perfect_inputs() -> Vec<&'static str> {
    vec![
        // psychometric: four likerts and one scenario (correct option 2)
        "5", "5", "2", "5", "5", //
        // technical: correct options
        "1", "3", "2", "3", "2", //
        // wiscar: likerts at 5, skill/realworld best-first, scenario correct
        "5", "5", "5", "5", "1", "2", "5", "1",
    ]
}

fn stdin_from(inputs: &[&str]) -> String {
    let mut s = inputs.join("\n");
    s.push('\n');
    s
}

#[test]
fn full_run_through_the_bundled_bank() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("results");

    roleready()
        .arg("take")
        .arg("--bank")
        .arg("../../banks/social-media-manager.toml")
        .arg("--output")
        .arg(&output)
        .write_stdin(stdin_from(&perfect_inputs()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Personality & Motivation"))
        .stdout(predicate::str::contains("Technical Knowledge"))
        .stdout(predicate::str::contains("WISCAR Framework"))
        .stdout(predicate::str::contains("Recommendation: YES"));

    let report_written = std::fs::read_dir(&output)
        .unwrap()
        .filter_map(|e| e.ok())
        .any(|e| e.path().extension().is_some_and(|ext| ext == "json"));
    assert!(report_written);
}

#[test]
fn invalid_input_reprompts() {
    let dir = TempDir::new().unwrap();

    let mut inputs = vec!["9", "oops"];
    inputs.extend(perfect_inputs());

    roleready()
        .arg("take")
        .arg("--bank")
        .arg("../../banks/social-media-manager.toml")
        .arg("--output")
        .arg(dir.path().join("results"))
        .write_stdin(stdin_from(&inputs))
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a rating from 1 to 5"));
}

#[test]
fn back_navigation_revises_an_answer() {
    let dir = TempDir::new().unwrap();

    // Answer the first question low, step back from the second, revise it,
    // then finish the run perfectly.
    let mut inputs = vec!["1", "b", "5"];
    inputs.extend(perfect_inputs().into_iter().skip(1));

    roleready()
        .arg("take")
        .arg("--bank")
        .arg("../../banks/social-media-manager.toml")
        .arg("--output")
        .arg(dir.path().join("results"))
        .write_stdin(stdin_from(&inputs))
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommendation: YES"))
        .stdout(predicate::str::contains("Overall Confidence"))
        .stdout(predicate::str::contains("100%"));
}

#[test]
fn truncated_input_fails_cleanly() {
    let dir = TempDir::new().unwrap();

    roleready()
        .arg("take")
        .arg("--bank")
        .arg("../../banks/social-media-manager.toml")
        .arg("--output")
        .arg(dir.path().join("results"))
        .write_stdin("5\n5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input ended"));
}
