//! CLI integration tests using the REAL reazy binary

mod common;

use common::TestProject;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    let project = TestProject::new();
    project
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: reazy [command] [options]"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_short_help_output() {
    let project = TestProject::new();
    project
        .cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_version_outside_project() {
    let project = TestProject::new();
    project
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "reazy-cli: {}",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains(
            "reazy: n/a - not inside a Reazy project directory",
        ));
}

#[test]
fn test_version_inside_project() {
    let project = TestProject::new();
    project.install_reazy("0.9.1");
    project
        .cmd()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("reazy: 0.9.1"));
}

#[test]
fn test_no_command() {
    let project = TestProject::new();
    project
        .cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("You did not pass any commands"));
}

#[test]
fn test_unrecognized_command() {
    let project = TestProject::new();
    project
        .cmd()
        .arg("deploy")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Command `deploy` unrecognized"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let project = TestProject::new();
    project
        .cmd()
        .args(["init", "--bogus"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unexpected argument `--bogus` for `init`"));
    assert!(project.entries().is_empty());
}

#[test]
fn test_generate_unknown_target() {
    let project = TestProject::new();
    project
        .cmd()
        .args(["generate", "hook"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown generator `hook`"));
}

#[test]
fn test_add_requires_plugin() {
    let project = TestProject::new();
    project
        .cmd()
        .arg("add")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing plugin name"));
}

#[test]
fn test_generate_without_runtime() {
    let project = TestProject::new();
    project
        .cmd()
        .arg("g")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Runtime `node` not found"));
}

#[cfg(unix)]
#[test]
fn test_generate_runs_app_generator() {
    let project = TestProject::new();
    project.stub("node", "printf '%s' \"$3\" > \"$PWD/job.json\"");

    project.cmd().arg("g").assert().success();

    let job: serde_json::Value = serde_json::from_str(&project.read_file("job.json")).unwrap();
    assert_eq!(job["namespace"], "reazy:app");
    assert_eq!(job["options"]["disableNotifyUpdate"], true);
    let namespaces: Vec<&str> = job["generators"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["namespace"].as_str().unwrap())
        .collect();
    assert!(namespaces.contains(&"reazy:service"));
}
