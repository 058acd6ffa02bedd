//! Configuration directory layout
//!
//! ```text
//! <config_dir>/                          (default: ~/.claude)
//! <config_dir>/commands/<name>.md        installed command definitions
//! <config_dir>/installed_commands.json   install manifest
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{InstallerError, Result};

/// Default configuration directory name under the user's home directory
const DEFAULT_CONFIG_DIR: &str = ".claude";

/// Subdirectory holding installed command files
pub const COMMANDS_DIR: &str = "commands";

/// Manifest file name within the configuration directory
pub const MANIFEST_FILE: &str = "installed_commands.json";

/// Resolved locations for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub config_dir: PathBuf,
    pub commands_dir: PathBuf,
    pub manifest_path: PathBuf,
}

/// State of the configuration directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigProbe {
    pub config_exists: bool,
    pub commands_dir_exists: bool,
    pub writable: bool,
}

impl ConfigPaths {
    /// Layout rooted at `config_dir`
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        Self {
            commands_dir: config_dir.join(COMMANDS_DIR),
            manifest_path: config_dir.join(MANIFEST_FILE),
            config_dir,
        }
    }

    /// Resolve the configuration directory
    ///
    /// An explicit directory (from `--config-dir` or `CLAUDE_COMMANDS_CONFIG_DIR`, both
    /// handled by clap) wins; otherwise `~/.claude`.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = explicit {
            return Ok(Self::new(dir));
        }

        let home = dirs::home_dir().ok_or(InstallerError::HomeDirUnavailable)?;
        Ok(Self::new(home.join(DEFAULT_CONFIG_DIR)))
    }

    /// Path of the installed file for `name`
    pub fn command_file(&self, name: &str) -> PathBuf {
        crate::installer::file_ops::command_path(&self.commands_dir, name)
    }

    /// Check existence and writability of the configuration directory
    pub fn probe(&self) -> ConfigProbe {
        let config_exists = self.config_dir.is_dir();
        ConfigProbe {
            config_exists,
            commands_dir_exists: self.commands_dir.is_dir(),
            writable: config_exists && is_writable(&self.config_dir),
        }
    }
}

/// Writable means a file can actually be created there
fn is_writable(dir: &Path) -> bool {
    tempfile::Builder::new()
        .prefix(".write-probe")
        .tempfile_in(dir)
        .is_ok()
}
