//! Error types and handling for claude-commands
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`catalog`]: Command catalog errors
//! - [`config`]: Configuration and manifest errors
//! - [`fs`]: File system errors
//! - [`backup`]: Backup and restore errors
//! - [`install`]: Outcomes the CLI reports as a failed invocation
//!
//! Install and uninstall never return these to their callers: failures inside
//! the orchestrator are recorded on the result. These errors surface from
//! configuration, catalog loading and the explicit restore path.

pub mod backup;
pub mod catalog;
pub mod config;
pub mod fs;
pub mod install;

pub use backup::{failed as backup_failed, not_found as backup_not_found};
pub use catalog::{load_failed as catalog_load_failed, unknown_type as unknown_command_type};
pub use config::{invalid as config_invalid, parse_failed as config_parse_failed};
pub use fs::{
    io_error, not_found as file_not_found, read_failed as file_read_failed,
    write_failed as file_write_failed,
};
pub use install::{
    incomplete as install_incomplete, nothing_selected, validation_failed, verification_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for claude-commands operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallerError {
    // Catalog errors
    #[error("Unknown command type: {value}")]
    #[diagnostic(
        code(claude_commands::catalog::unknown_type),
        help("Valid types: active, experimental")
    )]
    UnknownCommandType { value: String },

    #[error("Failed to load command catalog from {path}: {reason}")]
    #[diagnostic(code(claude_commands::catalog::load_failed))]
    CatalogLoadFailed { path: String, reason: String },

    // Configuration errors
    #[error("Could not determine home directory")]
    #[diagnostic(
        code(claude_commands::config::no_home),
        help("Pass --config-dir or set CLAUDE_COMMANDS_CONFIG_DIR")
    )]
    HomeDirUnavailable,

    #[error("Failed to parse {path}: {reason}")]
    #[diagnostic(code(claude_commands::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(claude_commands::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(claude_commands::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(claude_commands::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(claude_commands::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(claude_commands::fs::io_error))]
    IoError { message: String },

    // Backup errors
    #[error("Backup failed: {message}")]
    #[diagnostic(code(claude_commands::backup::failed))]
    BackupFailed { message: String },

    #[error("Backup not found: {path}")]
    #[diagnostic(
        code(claude_commands::backup::not_found),
        help("Pass the backup location printed by 'claude-commands install --backup'")
    )]
    BackupNotFound { path: String },

    // Install outcomes
    #[error("No commands selected")]
    #[diagnostic(
        code(claude_commands::install::nothing_selected),
        help("Pass command names, --category or --all")
    )]
    NothingSelected,

    #[error("Installation incomplete: {message}")]
    #[diagnostic(code(claude_commands::install::incomplete))]
    InstallIncomplete { message: String },

    #[error("Validation failed: {message}")]
    #[diagnostic(code(claude_commands::install::validation_failed))]
    ValidationFailed { message: String },

    #[error("Verification failed: {missing} missing, {modified} modified")]
    #[diagnostic(
        code(claude_commands::install::verification_failed),
        help("Reinstall with 'claude-commands install --overwrite'")
    )]
    VerificationFailed { missing: usize, modified: usize },
}

impl From<std::io::Error> for InstallerError {
    fn from(err: std::io::Error) -> Self {
        InstallerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for InstallerError {
    fn from(err: serde_json::Error) -> Self {
        InstallerError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for InstallerError {
    fn from(err: serde_yaml::Error) -> Self {
        InstallerError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for InstallerError {
    fn from(err: walkdir::Error) -> Self {
        InstallerError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallerError>;
