//! Directory snapshots of the installed commands
//!
//! A backup is a fresh directory under the backup base holding a copy of the
//! commands directory:
//!
//! ```text
//! <base>/claude_commands_backup_XXXXXX/commands/...
//! ```
//!
//! Backups are only consumed by an explicit [`BackupManager::restore`] call,
//! never by the automatic install rollback.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, backup_failed, backup_not_found};

/// Environment variable overriding where backups are created
pub const BACKUP_DIR_ENV: &str = "CLAUDE_COMMANDS_BACKUP_DIR";

/// Prefix of every backup directory name
pub const BACKUP_PREFIX: &str = "claude_commands_backup_";

/// Name of the snapshot directory inside a backup
const SNAPSHOT_DIR: &str = "commands";

/// Directory under which backups are created.
///
/// [`BACKUP_DIR_ENV`] when it names an absolute path, otherwise the system temp
/// directory. Never a relative path, so backups never land under the current
/// working directory.
pub fn backup_base_dir() -> PathBuf {
    if let Some(dir) = env::var_os(BACKUP_DIR_ENV).filter(|v| !v.is_empty()) {
        let dir = PathBuf::from(dir);
        if dir.is_absolute() {
            return dir;
        }
        log::warn!(
            "Ignoring relative {BACKUP_DIR_ENV}={}, using the system temp directory",
            dir.display()
        );
    }

    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Creates and restores snapshots of one commands directory
#[derive(Debug, Clone)]
pub struct BackupManager {
    source_dir: PathBuf,
    base_dir: Option<PathBuf>,
}

impl BackupManager {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            base_dir: None,
        }
    }

    /// Create backups under `base_dir` instead of [`backup_base_dir`]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Copy the whole source tree into a new backup directory and return its path.
    ///
    /// Symlinked entries are copied by content. A missing source directory
    /// yields an empty snapshot. A failed copy leaves no backup directory behind.
    pub fn create_backup(&self) -> Result<PathBuf> {
        let base = self.base_dir.clone().unwrap_or_else(backup_base_dir);
        fs::create_dir_all(&base)
            .map_err(|e| backup_failed(format!("{}: {}", base.display(), e)))?;

        let guard = tempfile::Builder::new()
            .prefix(BACKUP_PREFIX)
            .tempdir_in(&base)
            .map_err(|e| backup_failed(format!("{}: {}", base.display(), e)))?;
        let location = guard.path().to_path_buf();

        let snapshot = location.join(SNAPSHOT_DIR);
        fs::create_dir_all(&snapshot)
            .map_err(|e| backup_failed(format!("{}: {}", snapshot.display(), e)))?;

        if self.source_dir.is_dir() {
            let copied = copy_tree(&self.source_dir, &snapshot)?;
            log::debug!(
                "Backed up {} file(s) from {} to {}",
                copied,
                self.source_dir.display(),
                location.display()
            );
        } else {
            log::debug!(
                "{} does not exist, created empty backup {}",
                self.source_dir.display(),
                location.display()
            );
        }

        Ok(guard.keep())
    }

    /// Replace the source directory with the snapshot stored at `location`.
    ///
    /// Destructive: files created after the backup are gone afterwards. The
    /// snapshot is staged next to the source directory first so a failed copy
    /// leaves the current contents in place.
    pub fn restore(&self, location: &Path) -> Result<()> {
        let snapshot = location.join(SNAPSHOT_DIR);
        if !snapshot.is_dir() {
            return Err(backup_not_found(location.display().to_string()));
        }

        let parent = self
            .source_dir
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        fs::create_dir_all(&parent)
            .map_err(|e| backup_failed(format!("{}: {}", parent.display(), e)))?;

        let staging = tempfile::Builder::new()
            .prefix(".commands-restore")
            .tempdir_in(&parent)
            .map_err(|e| backup_failed(format!("{}: {}", parent.display(), e)))?;
        let copied = copy_tree(&snapshot, staging.path())?;

        if self.source_dir.exists() {
            fs::remove_dir_all(&self.source_dir).map_err(|e| {
                backup_failed(format!(
                    "failed to clear {}: {}",
                    self.source_dir.display(),
                    e
                ))
            })?;
        }

        let staged = staging.keep();
        fs::rename(&staged, &self.source_dir).map_err(|e| {
            backup_failed(format!(
                "failed to move restored files into {}: {}",
                self.source_dir.display(),
                e
            ))
        })?;

        log::info!(
            "Restored {} file(s) from {} into {}",
            copied,
            location.display(),
            self.source_dir.display()
        );
        Ok(())
    }
}

/// Copy every entry below `from` into `to`, returning the number of files copied.
///
/// Symlinks are followed, so linked files land in `to` as regular files.
fn copy_tree(from: &Path, to: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(from)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| backup_failed(e.to_string()))?;
        let dest = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)
                .map_err(|e| backup_failed(format!("{}: {}", dest.display(), e)))?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &dest).map_err(|e| {
                backup_failed(format!("{} -> {}: {}", entry.path().display(), dest.display(), e))
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}
