//! Restore command implementation

use console::Style;

use super::helpers::Session;
use crate::cli::{GlobalArgs, RestoreArgs};
use crate::error::{Result, backup_failed};

/// Run restore command
pub fn run(global: &GlobalArgs, args: RestoreArgs) -> Result<()> {
    let session = Session::open(global)?;
    let orchestrator = session.orchestrator();

    if !orchestrator.restore_backup(&args.backup) {
        return Err(backup_failed(format!(
            "could not restore {}",
            args.backup.display()
        )));
    }

    println!(
        "{} {} from {}",
        Style::new().bold().green().apply_to("Restored"),
        orchestrator.paths().commands_dir.display(),
        args.backup.display()
    );
    Ok(())
}
