//! Install/uninstall coordination
//!
//! ```text
//! Idle -> Validating -> (BackingUp) -> Installing -> Completed
//!                                                 -> PartiallyCompleted
//!                                                 -> RolledBack
//!         Validating -> DryRunReported
//! ```
//!
//! Failures never cross this boundary as errors. Every outcome is data on the
//! returned result and callers inspect `success`, `failed` and
//! `rollback_performed`.
//!
//! The per-command loop is strictly sequential: rollback removes exactly the
//! files written before the failing command.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

use super::file_ops::command_path;
use super::{BackupManager, FileOperations, FsFileOperations};
use crate::catalog::{CommandCatalog, CommandType};
use crate::config::{ConfigPaths, ManifestStore};
use crate::hash::{hash_content, hash_file};
use crate::transaction::Transaction;

/// Caller policy for one install call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct InstallationOptions {
    /// Replace existing command files
    pub overwrite: bool,
    /// Report what would be installed without touching anything
    pub dry_run: bool,
    /// Skip existing command files quietly instead of reporting a conflict
    pub ignore_missing: bool,
    /// Snapshot the commands directory before writing
    pub create_backup: bool,
    /// Remove everything written so far on the first write failure
    pub rollback_on_failure: bool,
}

/// Resolved state of a single install call
#[derive(Debug, Clone)]
pub struct InstallationContext {
    pub options: InstallationOptions,
    pub target_directory: PathBuf,
    pub backup_location: Option<PathBuf>,
}

impl InstallationContext {
    fn new(options: InstallationOptions, target_directory: &Path) -> Self {
        Self {
            options,
            target_directory: target_directory.to_path_buf(),
            backup_location: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InstallState {
    #[default]
    Idle,
    Validating,
    BackingUp,
    Installing,
    Completed,
    PartiallyCompleted,
    RolledBack,
    DryRunReported,
}

/// Why a requested command ended up in `failed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    /// A file already exists and overwriting was not allowed
    Conflict,
    /// A file already exists and the caller asked to skip such commands
    ConflictIgnored,
    /// The catalog has no content for the name
    NotInCatalog,
    /// Writing the file failed
    WriteFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub name: String,
    pub kind: FailureKind,
}

/// Outcome of one install call
///
/// `overwritten` annotates entries of `installed` that replaced an existing
/// file. `installed` and `failed` never share a name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationResult {
    pub state: InstallState,
    pub command_type: CommandType,
    pub installed: Vec<String>,
    pub failed: Vec<String>,
    pub overwritten: Vec<String>,
    pub failures: Vec<Failure>,
    pub success: bool,
    pub partial_success: bool,
    pub rollback_performed: bool,
    pub rollback_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_location: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_error: Option<String>,
    pub dry_run: bool,
    pub would_install: Vec<String>,
    pub installation_location: PathBuf,
}

impl InstallationResult {
    fn new(command_type: CommandType, location: &Path) -> Self {
        Self {
            state: InstallState::Idle,
            command_type,
            installed: Vec::new(),
            failed: Vec::new(),
            overwritten: Vec::new(),
            failures: Vec::new(),
            success: false,
            partial_success: false,
            rollback_performed: false,
            rollback_success: false,
            error: None,
            backup_location: None,
            backup_error: None,
            dry_run: false,
            would_install: Vec::new(),
            installation_location: location.to_path_buf(),
        }
    }

    fn enter(&mut self, state: InstallState) {
        log::debug!("Install state {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    fn record_failure(&mut self, name: &str, kind: FailureKind) {
        self.failed.push(name.to_string());
        self.failures.push(Failure {
            name: name.to_string(),
            kind,
        });
    }

    /// Everything requested was installed (the CLI's zero exit status)
    pub fn is_clean(&self) -> bool {
        self.success && self.failed.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UninstallResult {
    /// Names whose file was actually removed
    pub uninstalled: Vec<String>,
    /// Names with no file present
    pub not_found: Vec<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryOutcome {
    pub category: String,
    pub result: InstallationResult,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInstallResult {
    pub installed_by_category: BTreeMap<String, Vec<String>>,
    pub total_installed: usize,
    pub unknown_categories: Vec<String>,
    pub outcomes: Vec<CategoryOutcome>,
}

impl CategoryInstallResult {
    pub fn is_clean(&self) -> bool {
        self.unknown_categories.is_empty()
            && !self.outcomes.is_empty()
            && self.outcomes.iter().all(|o| o.result.is_clean())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallAllResult {
    pub active: InstallationResult,
    pub experimental: InstallationResult,
    pub active_installed: usize,
    pub experimental_installed: usize,
    pub total_installed: usize,
    /// Wall-clock seconds, rounded to hundredths
    pub installation_time: f64,
}

impl InstallAllResult {
    pub fn is_clean(&self) -> bool {
        self.active.is_clean() && self.experimental.is_clean()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    /// Present as regular files
    pub verified: Vec<String>,
    pub missing: Vec<String>,
    /// Verified, but the content differs from the catalog's definition
    pub modified: Vec<String>,
}

impl VerificationReport {
    pub fn passed(&self) -> bool {
        self.missing.is_empty() && self.modified.is_empty()
    }
}

/// Coordinates catalog, file operations, backups and the manifest for one
/// configuration directory
pub struct InstallationOrchestrator<'a> {
    paths: ConfigPaths,
    catalog: &'a dyn CommandCatalog,
    file_ops: &'a dyn FileOperations,
    manifest: ManifestStore,
    backups: BackupManager,
}

impl<'a> InstallationOrchestrator<'a> {
    pub fn new(paths: ConfigPaths, catalog: &'a dyn CommandCatalog) -> Self {
        Self {
            manifest: ManifestStore::new(&paths.config_dir),
            backups: BackupManager::new(&paths.commands_dir),
            paths,
            catalog,
            file_ops: &FsFileOperations,
        }
    }

    /// Replace the file system seam
    pub fn with_file_ops(mut self, file_ops: &'a dyn FileOperations) -> Self {
        self.file_ops = file_ops;
        self
    }

    pub fn with_backup_manager(mut self, backups: BackupManager) -> Self {
        self.backups = backups;
        self
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// Install `requested` in the order given
    pub fn install(
        &self,
        requested: &[String],
        command_type: CommandType,
        options: InstallationOptions,
    ) -> InstallationResult {
        let mut context = InstallationContext::new(options, &self.paths.commands_dir);
        let mut result = InstallationResult::new(command_type, &context.target_directory);
        result.enter(InstallState::Validating);

        if options.dry_run {
            result.dry_run = true;
            result.would_install = requested.to_vec();
            result.enter(InstallState::DryRunReported);
            return result;
        }

        if options.create_backup {
            result.enter(InstallState::BackingUp);
            match self.backups.create_backup() {
                Ok(location) => {
                    log::info!("Created backup at {}", location.display());
                    context.backup_location = Some(location);
                }
                Err(e) => {
                    log::warn!("Continuing without backup: {e}");
                    result.backup_error = Some(e.to_string());
                }
            }
            result.backup_location.clone_from(&context.backup_location);
        }

        result.enter(InstallState::Installing);
        let target = context.target_directory.as_path();
        let mut transaction = Transaction::new(self.file_ops, target);
        let mut seen = HashSet::new();

        for name in requested {
            if !seen.insert(name.as_str()) {
                log::debug!("Skipping repeated request for '{name}'");
                continue;
            }

            if self.file_ops.exists(target, name) {
                if context.options.overwrite {
                    result.overwritten.push(name.clone());
                } else if context.options.ignore_missing {
                    log::debug!("Skipping existing command '{name}'");
                    result.record_failure(name, FailureKind::ConflictIgnored);
                    continue;
                } else {
                    log::info!("Command '{name}' already exists, use --overwrite to replace it");
                    result.record_failure(name, FailureKind::Conflict);
                    continue;
                }
            }

            let failure = match self.catalog.get(name) {
                None => {
                    log::warn!("Command '{name}' not found in catalog");
                    Some(FailureKind::NotInCatalog)
                }
                Some(command) => {
                    if self
                        .file_ops
                        .copy(target, name, command_type, &command.content)
                    {
                        None
                    } else {
                        Some(FailureKind::WriteFailed)
                    }
                }
            };

            let Some(kind) = failure else {
                transaction.track_written(name.as_str());
                self.file_ops.set_permissions(&command_path(target, name));
                result.installed.push(name.clone());
                continue;
            };

            result.overwritten.retain(|n| n != name);
            result.record_failure(name, kind);

            if context.options.rollback_on_failure {
                log::warn!(
                    "Failed to install '{}', rolling back {} command(s)",
                    name,
                    transaction.written().len()
                );
                result.rollback_success = transaction.rollback();
                result.rollback_performed = true;
                result.installed.clear();
                result.overwritten.clear();
                result.success = false;
                result.error = Some(format!("Failed to copy {name}"));
                result.enter(InstallState::RolledBack);
                return result;
            }
        }
        transaction.commit();

        if !result.installed.is_empty() {
            if let Err(e) = self.manifest.merge(&result.installed, command_type.as_str()) {
                log::warn!("Installed commands were not recorded: {e}");
                result.error = Some(e.to_string());
            }
        }

        result.success = !result.installed.is_empty();
        result.partial_success = result.success && !result.failed.is_empty();
        result.enter(if result.failed.is_empty() {
            InstallState::Completed
        } else {
            InstallState::PartiallyCompleted
        });
        result
    }

    /// Remove the files of `names`; absent names never fail the batch
    pub fn uninstall(&self, names: &[String]) -> UninstallResult {
        let target = self.paths.commands_dir.as_path();
        let mut result = UninstallResult::default();
        let mut seen = HashSet::new();

        for name in names {
            if !seen.insert(name.as_str()) {
                continue;
            }
            if self.file_ops.remove(target, name) {
                result.uninstalled.push(name.clone());
            } else {
                log::debug!("No installed file for '{name}'");
                result.not_found.push(name.clone());
            }
        }

        if !result.uninstalled.is_empty() {
            if let Err(e) = self.manifest.remove_names(&result.uninstalled) {
                log::warn!("Uninstalled commands were not removed from the manifest: {e}");
                result.error = Some(e.to_string());
            }
        }

        result.success = !result.uninstalled.is_empty();
        result
    }

    /// Install each known category's commands as one active install
    pub fn install_by_category(
        &self,
        categories: &[String],
        options: InstallationOptions,
    ) -> CategoryInstallResult {
        let mut result = CategoryInstallResult::default();
        let mut seen = HashSet::new();

        for category in categories {
            if !seen.insert(category.as_str()) {
                continue;
            }
            let Some(names) = self.catalog.names_in_category(category) else {
                log::warn!("Unknown category '{category}'");
                result.unknown_categories.push(category.clone());
                continue;
            };

            let outcome = self.install(&names, CommandType::Active, options);
            result.total_installed += outcome.installed.len();
            result
                .installed_by_category
                .insert(category.clone(), outcome.installed.clone());
            result.outcomes.push(CategoryOutcome {
                category: category.clone(),
                result: outcome,
            });
        }

        result
    }

    /// Install every active command, then every experimental command
    pub fn install_all(&self, options: InstallationOptions) -> InstallAllResult {
        let start = Instant::now();

        let active = self.install(
            &self.catalog.names(CommandType::Active),
            CommandType::Active,
            options,
        );
        let experimental = self.install(
            &self.catalog.names(CommandType::Experimental),
            CommandType::Experimental,
            options,
        );

        let elapsed = start.elapsed().as_secs_f64();
        InstallAllResult {
            active_installed: active.installed.len(),
            experimental_installed: experimental.installed.len(),
            total_installed: active.installed.len() + experimental.installed.len(),
            installation_time: (elapsed * 100.0).round() / 100.0,
            active,
            experimental,
        }
    }

    /// Check the installed file of each name against the catalog
    pub fn verify(&self, names: &[String]) -> VerificationReport {
        let mut report = VerificationReport::default();

        for name in names {
            let path = self.paths.command_file(name);
            if !path.is_file() {
                report.missing.push(name.clone());
                continue;
            }
            report.verified.push(name.clone());

            let Some(command) = self.catalog.get(name) else {
                log::debug!("'{name}' is not in the catalog, skipping content check");
                continue;
            };
            match hash_file(&path) {
                Ok(hash) if hash == hash_content(&command.content) => {}
                Ok(_) => report.modified.push(name.clone()),
                Err(e) => {
                    log::warn!("Could not hash {}: {}", path.display(), e);
                    report.modified.push(name.clone());
                }
            }
        }

        report
    }

    /// Replace the commands directory with a snapshot taken by `install`
    pub fn restore_backup(&self, location: &Path) -> bool {
        match self.backups.restore(location) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Restore from {} failed: {}", location.display(), e);
                false
            }
        }
    }
}
