//! Backup before install and restore from a snapshot

mod common;

use std::path::PathBuf;

use common::TestConfigDir;
use predicates::prelude::*;

fn backup_location(config: &TestConfigDir, args: &[&str]) -> PathBuf {
    let output = config.cmd().arg("--json").args(args).output().unwrap();
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    PathBuf::from(
        result["backupLocation"]
            .as_str()
            .expect("install should report a backup location"),
    )
}

#[test]
fn test_backup_snapshots_commands_dir() {
    let config = TestConfigDir::new();
    config.seed_command("xgit", "# local edits\n");

    let location = backup_location(&config, &["install", "xtest", "--backup"]);

    assert!(location.starts_with(&config.backup_dir));
    let saved = location.join("commands").join("xgit.md");
    assert_eq!(std::fs::read_to_string(saved).unwrap(), "# local edits\n");
    assert!(!location.join("commands").join("xtest.md").exists());
}

#[test]
fn test_backup_of_missing_commands_dir() {
    let config = TestConfigDir::new();

    let location = backup_location(&config, &["install", "xgit", "--backup"]);

    assert!(location.join("commands").is_dir());
    assert!(config.command_file("xgit").is_file());
}

#[test]
fn test_restore_replaces_commands_dir() {
    let config = TestConfigDir::new();
    config.seed_command("xgit", "# local edits\n");

    let location = backup_location(&config, &["install", "xtest", "xgit", "--overwrite", "--backup"]);
    assert_ne!(
        std::fs::read_to_string(config.command_file("xgit")).unwrap(),
        "# local edits\n"
    );

    config
        .cmd()
        .arg("restore")
        .arg(&location)
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored"));

    assert_eq!(
        std::fs::read_to_string(config.command_file("xgit")).unwrap(),
        "# local edits\n"
    );
    assert!(!config.command_file("xtest").exists());
}

#[test]
fn test_restore_unknown_location_fails() {
    let config = TestConfigDir::new();
    config.cmd().args(["install", "xgit"]).assert().success();

    config
        .cmd()
        .arg("restore")
        .arg(config.temp.path().join("no-such-backup"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    assert!(config.command_file("xgit").is_file());
}
