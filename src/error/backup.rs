//! Backup and restore errors

use super::InstallerError;

/// Creates a backup failed error
pub fn failed(message: impl Into<String>) -> InstallerError {
    InstallerError::BackupFailed {
        message: message.into(),
    }
}

/// Creates a backup not found error
pub fn not_found(path: impl Into<String>) -> InstallerError {
    InstallerError::BackupNotFound { path: path.into() }
}
