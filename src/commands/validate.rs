//! Validate command implementation
//!
//! Checks requested names against the catalog and definition files against
//! the structural rules every command must follow.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use super::helpers::Session;
use crate::cli::{GlobalArgs, ValidateArgs};
use crate::error::{Result, file_read_failed, nothing_selected, validation_failed};
use crate::installer::{SelectionReport, SyntaxReport, Validator};
use crate::ui::display;

#[derive(Serialize)]
struct FileReport {
    path: PathBuf,
    #[serde(flatten)]
    report: SyntaxReport,
}

#[derive(Serialize)]
struct ValidationOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    selection: Option<SelectionReport>,
    files: Vec<FileReport>,
}

/// Run validate command
pub fn run(global: &GlobalArgs, args: ValidateArgs) -> Result<()> {
    if args.names.is_empty() && args.files.is_empty() {
        return Err(nothing_selected());
    }

    let session = Session::open(global)?;
    let validator = Validator::new(&session.catalog);

    let selection = (!args.names.is_empty()).then(|| validator.validate_selection(&args.names));

    let mut files = Vec::with_capacity(args.files.len());
    for path in args.files {
        let content = fs::read_to_string(&path)
            .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;
        let report = validator.validate_syntax(&content);
        files.push(FileReport { path, report });
    }

    let invalid_names = selection
        .as_ref()
        .map_or(0, |s| s.invalid_commands.len());
    let invalid_files = files.iter().filter(|f| !f.report.valid).count();

    let output = ValidationOutput { selection, files };
    if session.json {
        display::print_json(&output)?;
    } else {
        if let Some(selection) = &output.selection {
            display::print_selection_report(selection);
        }
        for file in &output.files {
            display::print_syntax_report(&file.path, &file.report);
        }
    }

    if invalid_names + invalid_files > 0 {
        return Err(validation_failed(format!(
            "{invalid_names} unknown command(s), {invalid_files} invalid file(s)"
        )));
    }
    Ok(())
}
