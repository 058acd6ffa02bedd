//! Command file operations
//!
//! Writes a command's content to `<target_dir>/<name>.md`, marks it
//! read-only and removes it again. No knowledge of manifests or backups.
//!
//! The contract is boolean: every I/O error is logged and reported as
//! `false`, the orchestrator decides what a failure means.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::catalog::CommandType;

/// File extension of installed command definitions
pub const COMMAND_EXTENSION: &str = "md";

/// `<dir>/<name>.md`
pub fn command_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{COMMAND_EXTENSION}"))
}

/// A command name must map to a single file directly inside the target directory
pub fn is_valid_command_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
}

/// File system seam used by the orchestrator
pub trait FileOperations {
    /// Write `content` as the definition of `name`; `false` on any failure
    fn copy(
        &self,
        target_dir: &Path,
        name: &str,
        command_type: CommandType,
        content: &str,
    ) -> bool;

    /// Make an installed file readable by owner and group, never executable.
    /// Failures are logged, not reported.
    fn set_permissions(&self, path: &Path);

    /// Delete the definition of `name`; `true` only if a file was removed
    fn remove(&self, target_dir: &Path, name: &str) -> bool;

    /// Whether a definition for `name` is already present
    fn exists(&self, target_dir: &Path, name: &str) -> bool {
        command_path(target_dir, name).exists()
    }
}

/// [`FileOperations`] on the real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileOperations;

impl FileOperations for FsFileOperations {
    fn copy(
        &self,
        target_dir: &Path,
        name: &str,
        command_type: CommandType,
        content: &str,
    ) -> bool {
        if !is_valid_command_name(name) {
            log::warn!("Refusing to write command with invalid name '{name}'");
            return false;
        }

        let path = command_path(target_dir, name);
        match write_command_file(&path, content) {
            Ok(()) => {
                log::debug!("Wrote {command_type} command {}", path.display());
                true
            }
            Err(e) => {
                log::warn!("Failed to write {}: {}", path.display(), e);
                false
            }
        }
    }

    fn set_permissions(&self, path: &Path) {
        if let Err(e) = set_read_only(path) {
            log::warn!("Failed to set permissions on {}: {}", path.display(), e);
        }
    }

    fn remove(&self, target_dir: &Path, name: &str) -> bool {
        if !is_valid_command_name(name) {
            return false;
        }

        let path = command_path(target_dir, name);
        if !path.is_file() {
            return false;
        }

        let removed = make_writable(&path).and_then(|()| fs::remove_file(&path));
        match removed {
            Ok(()) => {
                log::debug!("Removed {}", path.display());
                true
            }
            Err(e) => {
                log::warn!("Failed to remove {}: {}", path.display(), e);
                false
            }
        }
    }
}

/// Ensure parent directory exists for a path
fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn write_command_file(path: &Path, content: &str) -> io::Result<()> {
    ensure_parent_dir(path)?;
    // A previous install left the file read-only
    if path.exists() {
        make_writable(path)?;
    }
    fs::write(path, content)
}

#[cfg(unix)]
fn set_read_only(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o440))
}

#[cfg(not(unix))]
fn set_read_only(path: &Path) -> io::Result<()> {
    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_readonly(true);
    fs::set_permissions(path, permissions)
}

#[cfg(unix)]
fn make_writable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mode = fs::metadata(path)?.permissions().mode();
    fs::set_permissions(path, fs::Permissions::from_mode(mode | 0o200))
}

#[cfg(not(unix))]
#[allow(clippy::permissions_set_readonly_false)]
fn make_writable(path: &Path) -> io::Result<()> {
    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_readonly(false);
    fs::set_permissions(path, permissions)
}
