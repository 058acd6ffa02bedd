//! Install outcome errors

use super::InstallerError;

/// Creates a nothing selected error
pub fn nothing_selected() -> InstallerError {
    InstallerError::NothingSelected
}

/// Creates an install incomplete error
pub fn incomplete(message: impl Into<String>) -> InstallerError {
    InstallerError::InstallIncomplete {
        message: message.into(),
    }
}

/// Creates a validation failed error
pub fn validation_failed(message: impl Into<String>) -> InstallerError {
    InstallerError::ValidationFailed {
        message: message.into(),
    }
}

/// Creates a verification failed error
pub fn verification_failed(missing: usize, modified: usize) -> InstallerError {
    InstallerError::VerificationFailed { missing, modified }
}
