//! Verify command implementation

use super::helpers::Session;
use crate::cli::{GlobalArgs, VerifyArgs};
use crate::config::ManifestStore;
use crate::error::{Result, verification_failed};
use crate::ui::display;

/// Run verify command
pub fn run(global: &GlobalArgs, args: VerifyArgs) -> Result<()> {
    let session = Session::open(global)?;

    let names = if args.names.is_empty() {
        ManifestStore::new(&session.paths.config_dir)
            .load_or_default()
            .installed_commands
            .into_iter()
            .collect()
    } else {
        args.names
    };

    if names.is_empty() && !session.json {
        println!("No commands installed.");
        return Ok(());
    }

    let report = session.orchestrator().verify(&names);

    if session.json {
        display::print_json(&report)?;
    } else {
        display::print_verification_report(&report);
    }

    if report.passed() {
        Ok(())
    } else {
        Err(verification_failed(report.missing.len(), report.modified.len()))
    }
}
