//! CLI integration tests using the REAL claude-commands binary

mod common;

use common::{TestConfigDir, claude_commands_cmd};
use predicates::prelude::*;

#[test]
fn test_help_output() {
    claude_commands_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("uninstall"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("restore"));
}

#[test]
fn test_version_output() {
    claude_commands_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("claude-commands"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_output() {
    claude_commands_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("claude-commands"));
}

#[test]
fn test_completions_unknown_shell() {
    claude_commands_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shell"));
}

#[test]
fn test_list_shows_both_types() {
    let config = TestConfigDir::new();
    config
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("active (13 commands)"))
        .stdout(predicate::str::contains("experimental (44 commands)"))
        .stdout(predicate::str::contains("xgit"))
        .stdout(predicate::str::contains("xaws"));
}

#[test]
fn test_list_type_filter() {
    let config = TestConfigDir::new();
    config
        .cmd()
        .args(["list", "--type", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("xgit"))
        .stdout(predicate::str::contains("xaws").not());
}

#[test]
fn test_list_installed_empty() {
    let config = TestConfigDir::new();
    config
        .cmd()
        .args(["list", "--installed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No commands installed."));
}

#[test]
fn test_list_installed_after_install() {
    let config = TestConfigDir::new();
    config.cmd().args(["install", "xgit"]).assert().success();

    config
        .cmd()
        .args(["list", "--installed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("xgit"))
        .stdout(predicate::str::contains("xtest").not());
}

#[test]
fn test_list_json() {
    let config = TestConfigDir::new();
    let output = config
        .cmd()
        .args(["--json", "list", "--type", "experimental"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 44);
    assert!(entries.iter().all(|e| e["commandType"] == "experimental"));
}

#[test]
fn test_status_without_config_dir() {
    let config = TestConfigDir::new();
    config
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config directory:"))
        .stdout(predicate::str::contains("none"));
}

#[test]
fn test_status_json_after_install() {
    let config = TestConfigDir::new();
    config.cmd().args(["install", "xgit"]).assert().success();

    let output = config.cmd().args(["status", "--json"]).output().unwrap();
    assert!(output.status.success());

    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(status["configExists"], true);
    assert_eq!(status["commandsDirExists"], true);
    assert_eq!(status["writable"], true);
    assert_eq!(status["manifest"]["installedCommands"][0], "xgit");
}

#[test]
fn test_validate_names() {
    let config = TestConfigDir::new();
    config
        .cmd()
        .args(["validate", "xgit", "xaws"])
        .assert()
        .success();

    config
        .cmd()
        .args(["validate", "xgit", "xnope"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("xnope"))
        .stderr(predicate::str::contains("1 unknown command(s)"));
}

#[test]
fn test_validate_files() {
    let config = TestConfigDir::new();
    let good = config.write_file("good.md", "# Good\n\ndescription: fine\n");
    let bad = config.write_file("bad.md", "no heading here\n");

    config
        .cmd()
        .arg("validate")
        .arg("--file")
        .arg(&good)
        .assert()
        .success();

    config
        .cmd()
        .arg("validate")
        .arg("--file")
        .arg(&bad)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Command must start with markdown header"))
        .stdout(predicate::str::contains("Command must include description"));
}

#[test]
fn test_validate_requires_input() {
    let config = TestConfigDir::new();
    config
        .cmd()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No commands selected"));
}

#[test]
fn test_config_dir_from_env() {
    let config = TestConfigDir::new();
    claude_commands_cmd()
        .env("CLAUDE_COMMANDS_CONFIG_DIR", &config.config_dir)
        .args(["install", "xgit"])
        .assert()
        .success();

    assert!(config.command_file("xgit").is_file());
}

#[test]
fn test_catalog_dir_adds_commands() {
    let config = TestConfigDir::new();
    config.write_file(
        "catalog/active/xmine.md",
        "---\ncategory: custom\ndescription: My own command\n---\n# XMINE\n\ndescription: mine\n",
    );
    let catalog = config.temp.path().join("catalog");

    config
        .cmd()
        .arg("--catalog-dir")
        .arg(&catalog)
        .args(["list", "--type", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("xmine"))
        .stdout(predicate::str::contains("My own command"));

    config
        .cmd()
        .arg("--catalog-dir")
        .arg(&catalog)
        .arg("--no-builtin")
        .args(["install", "--category", "custom"])
        .assert()
        .success();

    assert!(config.command_file("xmine").is_file());
    assert_eq!(config.manifest_names(), vec!["xmine"]);
}

#[test]
fn test_missing_catalog_dir_is_an_error() {
    let config = TestConfigDir::new();
    config
        .cmd()
        .arg("--catalog-dir")
        .arg(config.temp.path().join("absent"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
