//! End-to-end tests for the create-taujs binary
//!
//! Every invocation passes enough flags that no prompt is shown.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

fn cli_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("create-taujs").expect("Failed to locate create-taujs binary");
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

fn file_count(root: &Path) -> usize {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

#[test]
fn creates_project_without_installing() {
    let tmp = TempDir::new().unwrap();

    cli_in(tmp.path())
        .args(["demo-app", "--package-manager", "pnpm", "--no-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cd demo-app"))
        .stdout(predicate::str::contains("pnpm install"))
        .stdout(predicate::str::contains("pnpm run dev"));

    let project = tmp.path().join("demo-app");
    assert_eq!(file_count(&project), 18);
    assert!(project.join("src/client/public/favicon.svg").is_file());
    assert!(project.join(".gitignore").is_file());

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(project.join("package.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["name"], "demo-app");
}

#[test]
fn yes_uses_default_project_name() {
    let tmp = TempDir::new().unwrap();

    cli_in(tmp.path())
        .args(["--yes", "--no-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("npm run dev"));

    assert!(tmp.path().join("my-taujs-app/package.json").is_file());
}

#[test]
fn existing_directory_fails_without_writing() {
    let tmp = TempDir::new().unwrap();
    let existing = tmp.path().join("demo-app");
    std::fs::create_dir(&existing).unwrap();

    cli_in(tmp.path())
        .args(["demo-app", "-p", "npm", "--no-install"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(std::fs::read_dir(&existing).unwrap().count(), 0);
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[test]
fn invalid_project_name_fails() {
    let tmp = TempDir::new().unwrap();

    cli_in(tmp.path())
        .args(["Demo-App", "-p", "npm", "--no-install"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name"));

    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn unknown_package_manager_is_a_usage_error() {
    let tmp = TempDir::new().unwrap();

    cli_in(tmp.path())
        .args(["demo-app", "-p", "deno"])
        .assert()
        .code(1);

    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn unknown_flag_exits_with_failure_code() {
    let tmp = TempDir::new().unwrap();

    cli_in(tmp.path())
        .args(["demo-app", "--no-install", "--verbose"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--verbose"));

    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn second_positional_argument_exits_with_failure_code() {
    let tmp = TempDir::new().unwrap();

    cli_in(tmp.path())
        .args(["demo-app", "extra", "--no-install", "-p", "npm"])
        .assert()
        .code(1);

    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn version_flag_succeeds() {
    let tmp = TempDir::new().unwrap();

    cli_in(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("create-taujs"));
}

#[test]
fn help_lists_flags() {
    let tmp = TempDir::new().unwrap();

    cli_in(tmp.path())
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("--package-manager"))
        .stdout(predicate::str::contains("--no-install"));
}
