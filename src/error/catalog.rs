//! Command catalog errors

use super::InstallerError;

/// Creates an unknown command type error
pub fn unknown_type(value: impl Into<String>) -> InstallerError {
    InstallerError::UnknownCommandType {
        value: value.into(),
    }
}

/// Creates a catalog load failed error
pub fn load_failed(path: impl Into<String>, reason: impl Into<String>) -> InstallerError {
    InstallerError::CatalogLoadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
