//! Display functions for install results and catalog listings
//!
//! Plain text output styled with `console`. `--json` output bypasses these
//! and goes through [`print_json`].

use console::Style;
use serde::Serialize;
use std::path::Path;

use crate::catalog::{Command, CommandType};
use crate::config::{ConfigPaths, ConfigProbe, Manifest};
use crate::error::{Result, io_error};
use crate::installer::{
    CategoryInstallResult, Failure, FailureKind, InstallAllResult, InstallationResult,
    SelectionReport, SyntaxReport, UninstallResult, VerificationReport,
};

/// Prefix of every dry-run line
pub const DRY_RUN_PREFIX: &str = "[DRY RUN]";

fn plural(n: usize) -> &'static str {
    if n == 1 { "command" } else { "commands" }
}

/// Print any result as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| io_error(e.to_string()))?;
    println!("{json}");
    Ok(())
}

fn failure_reason(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::Conflict => "already exists (use --overwrite)",
        FailureKind::ConflictIgnored => "already exists, skipped",
        FailureKind::NotInCatalog => "not found in catalog",
        FailureKind::WriteFailed => "write failed",
    }
}

fn print_failures(failures: &[Failure]) {
    for failure in failures {
        println!(
            "  {} {} {}",
            Style::new().red().apply_to("✗"),
            failure.name,
            Style::new().dim().apply_to(failure_reason(failure.kind))
        );
    }
}

/// Display the outcome of one install call
pub fn print_install_result(result: &InstallationResult) {
    if result.dry_run {
        print_dry_run(&result.would_install, &result.installation_location);
        return;
    }

    if let Some(location) = &result.backup_location {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Backup:"),
            location.display()
        );
    }
    if let Some(error) = &result.backup_error {
        println!(
            "{} {}",
            Style::new().yellow().apply_to("Backup skipped:"),
            error
        );
    }

    for name in &result.installed {
        let note = if result.overwritten.contains(name) {
            " (overwritten)"
        } else {
            ""
        };
        println!(
            "  {} {}{}",
            Style::new().green().apply_to("✓"),
            name,
            Style::new().dim().apply_to(note)
        );
    }
    print_failures(&result.failures);

    if result.rollback_performed {
        let outcome = if result.rollback_success {
            Style::new().yellow().apply_to("rolled back")
        } else {
            Style::new().red().apply_to("rollback incomplete")
        };
        println!(
            "{} {}",
            Style::new().bold().red().apply_to("Installation failed,"),
            outcome
        );
    } else {
        let n = result.installed.len();
        println!(
            "{} {} {} {} to {}",
            Style::new().bold().apply_to("Installed"),
            n,
            result.command_type,
            plural(n),
            result.installation_location.display()
        );
    }

    if let Some(error) = &result.error {
        println!("{} {}", Style::new().red().apply_to("Error:"), error);
    }
}

fn print_dry_run(names: &[String], location: &Path) {
    println!(
        "{} Would install {} {} to {}",
        Style::new().cyan().apply_to(DRY_RUN_PREFIX),
        names.len(),
        plural(names.len()),
        location.display()
    );
    for name in names {
        println!("{}   {}", Style::new().cyan().apply_to(DRY_RUN_PREFIX), name);
    }
}

/// Display the outcome of a category install
pub fn print_category_result(result: &CategoryInstallResult) {
    for outcome in &result.outcomes {
        println!(
            "{}",
            Style::new().bold().yellow().apply_to(&outcome.category)
        );
        print_install_result(&outcome.result);
    }
    for category in &result.unknown_categories {
        println!(
            "{} {}",
            Style::new().yellow().apply_to("Unknown category:"),
            category
        );
    }
    if !result.outcomes.iter().any(|o| o.result.dry_run) {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Total installed:"),
            result.total_installed
        );
    }
}

/// Display the outcome of installing everything
pub fn print_install_all_result(result: &InstallAllResult) {
    for part in [&result.active, &result.experimental] {
        println!(
            "{}",
            Style::new().bold().yellow().apply_to(part.command_type)
        );
        print_install_result(part);
    }
    if !result.active.dry_run {
        println!(
            "{} {} ({} active, {} experimental) in {:.2}s",
            Style::new().bold().apply_to("Total installed:"),
            result.total_installed,
            result.active_installed,
            result.experimental_installed,
            result.installation_time
        );
    }
}

pub fn print_uninstall_result(result: &UninstallResult) {
    for name in &result.uninstalled {
        println!("  {} {}", Style::new().green().apply_to("✓"), name);
    }
    for name in &result.not_found {
        println!(
            "  {} {} {}",
            Style::new().dim().apply_to("-"),
            name,
            Style::new().dim().apply_to("not installed")
        );
    }
    let n = result.uninstalled.len();
    println!(
        "{} {} {}",
        Style::new().bold().apply_to("Uninstalled"),
        n,
        plural(n)
    );
    if let Some(error) = &result.error {
        println!("{} {}", Style::new().red().apply_to("Error:"), error);
    }
}

/// Display catalog commands grouped by type
pub fn print_command_list(commands: &[&Command], types: &[CommandType], manifest: &Manifest) {
    for &command_type in types {
        let of_type: Vec<&&Command> = commands
            .iter()
            .filter(|c| c.command_type == command_type)
            .collect();
        if of_type.is_empty() {
            continue;
        }

        println!(
            "{} ({} {})",
            Style::new().bold().yellow().apply_to(command_type),
            of_type.len(),
            plural(of_type.len())
        );
        for command in of_type {
            let marker = if manifest.contains(&command.name) {
                Style::new().green().apply_to("●")
            } else {
                Style::new().dim().apply_to("○")
            };
            println!(
                "  {} {:<16} {} {}",
                marker,
                Style::new().cyan().apply_to(&command.name),
                command.description,
                Style::new().dim().apply_to(format!("[{}]", command.category))
            );
        }
    }
}

pub fn print_selection_report(report: &SelectionReport) {
    for name in &report.valid_commands {
        println!("  {} {}", Style::new().green().apply_to("✓"), name);
    }
    for name in &report.invalid_commands {
        println!(
            "  {} {} {}",
            Style::new().red().apply_to("✗"),
            name,
            Style::new().dim().apply_to("not found in catalog")
        );
    }
}

pub fn print_syntax_report(path: &Path, report: &SyntaxReport) {
    if report.valid {
        println!(
            "  {} {}",
            Style::new().green().apply_to("✓"),
            path.display()
        );
        return;
    }
    println!("  {} {}", Style::new().red().apply_to("✗"), path.display());
    for error in &report.errors {
        println!("      {}", Style::new().dim().apply_to(error));
    }
}

pub fn print_verification_report(report: &VerificationReport) {
    for name in &report.verified {
        if report.modified.contains(name) {
            println!(
                "  {} {} {}",
                Style::new().yellow().apply_to("~"),
                name,
                Style::new().dim().apply_to("modified")
            );
        } else {
            println!("  {} {}", Style::new().green().apply_to("✓"), name);
        }
    }
    for name in &report.missing {
        println!(
            "  {} {} {}",
            Style::new().red().apply_to("✗"),
            name,
            Style::new().dim().apply_to("missing")
        );
    }
    println!(
        "{} {} verified, {} missing, {} modified",
        Style::new().bold().apply_to("Verification:"),
        report.verified.len(),
        report.missing.len(),
        report.modified.len()
    );
}

fn yes_no(value: bool) -> console::StyledObject<&'static str> {
    if value {
        Style::new().green().apply_to("yes")
    } else {
        Style::new().red().apply_to("no")
    }
}

pub fn print_status(paths: &ConfigPaths, probe: &ConfigProbe, manifest: Option<&Manifest>) {
    println!(
        "{} {}",
        Style::new().bold().apply_to("Config directory:"),
        paths.config_dir.display()
    );
    println!("  exists:   {}", yes_no(probe.config_exists));
    println!("  writable: {}", yes_no(probe.writable));
    println!(
        "{} {}",
        Style::new().bold().apply_to("Commands directory:"),
        paths.commands_dir.display()
    );
    println!("  exists:   {}", yes_no(probe.commands_dir_exists));

    println!(
        "{} {}",
        Style::new().bold().apply_to("Manifest:"),
        paths.manifest_path.display()
    );
    match manifest {
        Some(manifest) => {
            let n = manifest.installed_commands.len();
            println!("  {} {} installed", n, plural(n));
            if !manifest.command_type.is_empty() {
                println!("  last install type: {}", manifest.command_type);
            }
            println!("  installer version: {}", manifest.installer_version);
        }
        None => println!("  {}", Style::new().dim().apply_to("none")),
    }
}
