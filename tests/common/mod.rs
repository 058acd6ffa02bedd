//! Common test utilities for claude-commands integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into tests
const ISOLATED_ENV: &[&str] = &[
    "CLAUDE_COMMANDS_CONFIG_DIR",
    "CLAUDE_COMMANDS_CATALOG_DIR",
    "CLAUDE_COMMANDS_BACKUP_DIR",
    "RUST_LOG",
];

/// A throwaway configuration directory plus a place for backups and catalogs
#[allow(dead_code)]
pub struct TestConfigDir {
    /// Temporary directory
    pub temp: TempDir,
    /// Configuration directory passed via --config-dir
    pub config_dir: PathBuf,
    /// Backup base passed via CLAUDE_COMMANDS_BACKUP_DIR
    pub backup_dir: PathBuf,
}

#[allow(dead_code)]
impl TestConfigDir {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let config_dir = temp.path().join(".claude");
        let backup_dir = temp.path().join("backups");
        Self {
            temp,
            config_dir,
            backup_dir,
        }
    }

    /// claude-commands binary bound to this configuration directory
    pub fn cmd(&self) -> Command {
        let mut cmd = claude_commands_cmd();
        cmd.arg("--config-dir")
            .arg(&self.config_dir)
            .env("CLAUDE_COMMANDS_BACKUP_DIR", &self.backup_dir);
        cmd
    }

    pub fn commands_dir(&self) -> PathBuf {
        self.config_dir.join("commands")
    }

    pub fn command_file(&self, name: &str) -> PathBuf {
        self.commands_dir().join(format!("{name}.md"))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.config_dir.join("installed_commands.json")
    }

    /// Parsed manifest JSON, if present
    pub fn manifest(&self) -> Option<serde_json::Value> {
        let content = std::fs::read_to_string(self.manifest_path()).ok()?;
        Some(serde_json::from_str(&content).expect("Manifest should be valid JSON"))
    }

    /// Sorted `installedCommands` from the manifest (empty when absent)
    pub fn manifest_names(&self) -> Vec<String> {
        self.manifest()
            .and_then(|m| m["installedCommands"].as_array().cloned())
            .unwrap_or_default()
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    }

    /// Write a file relative to the temp root
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.temp.path().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Pre-seed an installed command file with custom content
    pub fn seed_command(&self, name: &str, content: &str) {
        std::fs::create_dir_all(self.commands_dir()).expect("Failed to create commands dir");
        std::fs::write(self.command_file(name), content).expect("Failed to seed command");
    }

    /// Snapshot of every file below the config dir with its content
    pub fn snapshot(&self) -> Vec<(PathBuf, Vec<u8>)> {
        let mut files = Vec::new();
        collect_files(&self.config_dir, &self.config_dir, &mut files);
        files.sort();
        files
    }
}

impl Default for TestConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<(PathBuf, Vec<u8>)>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            let content = std::fs::read(&path).expect("Failed to read file");
            out.push((path.strip_prefix(root).unwrap().to_path_buf(), content));
        }
    }
}

/// claude-commands binary with the environment scrubbed
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn claude_commands_cmd() -> Command {
    let mut cmd = Command::cargo_bin("claude-commands").unwrap();
    for var in ISOLATED_ENV {
        cmd.env_remove(var);
    }
    cmd
}
