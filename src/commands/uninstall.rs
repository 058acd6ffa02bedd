//! Uninstall command CLI wrapper
//!
//! Names without an installed file are reported but never fail the command.

use super::helpers::Session;
use crate::cli::{GlobalArgs, UninstallArgs};
use crate::error::Result;
use crate::ui::display;

/// Run uninstall command
pub fn run(global: &GlobalArgs, args: UninstallArgs) -> Result<()> {
    let session = Session::open(global)?;
    let result = session.orchestrator().uninstall(&args.names);

    if session.json {
        display::print_json(&result)?;
    } else {
        display::print_uninstall_result(&result);
    }

    Ok(())
}
