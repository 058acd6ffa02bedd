//! Transaction support for install rollback
//!
//! Tracks every command file written during one install call so that a write
//! failure can remove them again. Only files this call wrote are touched; the
//! coarser whole-directory recovery is [`crate::installer::BackupManager`].
//!
//! ## Usage
//!
//! ```ignore
//! let mut transaction = Transaction::new(&file_ops, &commands_dir);
//!
//! // Perform writes...
//! transaction.track_written("xgit");
//!
//! // On success:
//! transaction.commit();
//!
//! // On failure:
//! let clean = transaction.rollback();
//! ```
//!
//! Rollback is explicit. Dropping an uncommitted transaction leaves its files
//! in place, since rolling back is a caller policy (`rollback_on_failure`).

use std::path::{Path, PathBuf};

use crate::installer::FileOperations;

/// A transaction over the command files of one install call
pub struct Transaction<'a> {
    file_ops: &'a dyn FileOperations,

    /// Directory the tracked files were written to
    target_dir: PathBuf,

    /// Names written during this transaction, in write order
    written: Vec<String>,

    /// Whether the transaction has already been rolled back
    finished: bool,
}

impl<'a> Transaction<'a> {
    pub fn new(file_ops: &'a dyn FileOperations, target_dir: &Path) -> Self {
        Self {
            file_ops,
            target_dir: target_dir.to_path_buf(),
            written: Vec::new(),
            finished: false,
        }
    }

    /// Track a command file that was written during this transaction
    pub fn track_written(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.written.contains(&name) {
            self.written.push(name);
        }
    }

    pub fn written(&self) -> &[String] {
        &self.written
    }

    /// Commit the transaction, keeping every written file
    pub fn commit(self) {
        log::debug!(
            "Committed {} command file(s) in {}",
            self.written.len(),
            self.target_dir.display()
        );
    }

    /// Remove every tracked file, most recent first.
    ///
    /// Returns whether all tracked files are gone afterwards. A file that was
    /// already missing counts as removed.
    pub fn rollback(&mut self) -> bool {
        if self.finished {
            return true;
        }
        self.finished = true;

        let mut clean = true;
        for name in self.written.iter().rev() {
            if !self.file_ops.remove(&self.target_dir, name) {
                log::warn!(
                    "Rollback found no file for '{}' in {}",
                    name,
                    self.target_dir.display()
                );
            }
            if self.file_ops.exists(&self.target_dir, name) {
                log::warn!("Rollback failed to remove '{name}'");
                clean = false;
            }
        }

        log::debug!(
            "Rolled back {} command file(s) in {}",
            self.written.len(),
            self.target_dir.display()
        );
        clean
    }
}
