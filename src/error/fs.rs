//! File system errors

use super::InstallerError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> InstallerError {
    InstallerError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> InstallerError {
    InstallerError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> InstallerError {
    InstallerError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> InstallerError {
    InstallerError::IoError {
        message: message.into(),
    }
}
