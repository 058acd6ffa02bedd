//! Command installation for claude-commands
//!
//! This module handles:
//! - Validating requested names and command definitions
//! - Writing, protecting and removing command files
//! - Snapshotting and restoring the commands directory
//! - Coordinating installs with conflict policy, rollback and the manifest

pub mod backup;
pub mod file_ops;
pub mod orchestrator;
pub mod validator;

pub use backup::BackupManager;
pub use file_ops::{FileOperations, FsFileOperations};
pub use orchestrator::{
    CategoryInstallResult, Failure, FailureKind, InstallAllResult, InstallationOptions,
    InstallationOrchestrator, InstallationResult, UninstallResult, VerificationReport,
};
pub use validator::{SelectionReport, SyntaxReport, Validator};
