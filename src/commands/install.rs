//! Install command CLI wrapper
//!
//! Maps arguments onto [`InstallationOptions`], delegates to the
//! orchestrator and turns the returned result into an exit status: success
//! only when something was installed and nothing failed. Dry runs always
//! succeed.

use console::Style;

use super::helpers::Session;
use crate::catalog::CommandCatalog;
use crate::cli::{GlobalArgs, InstallArgs};
use crate::error::{Result, install_incomplete, nothing_selected};
use crate::installer::{InstallationOptions, InstallationResult, Validator};
use crate::ui::display;

impl From<&InstallArgs> for InstallationOptions {
    fn from(args: &InstallArgs) -> Self {
        Self {
            overwrite: args.overwrite,
            dry_run: args.dry_run,
            ignore_missing: args.ignore_missing,
            create_backup: args.backup,
            rollback_on_failure: args.rollback_on_failure,
        }
    }
}

/// Run install command
pub fn run(global: &GlobalArgs, args: InstallArgs) -> Result<()> {
    let session = Session::open(global)?;
    let options = InstallationOptions::from(&args);

    if args.all {
        return install_all(&session, options);
    }
    if !args.category.is_empty() {
        return install_categories(&session, &args.category, options);
    }
    if args.names.is_empty() {
        return Err(nothing_selected());
    }

    let selection = Validator::new(&session.catalog).validate_selection(&args.names);
    if !session.json {
        for name in &selection.invalid_commands {
            eprintln!(
                "{} unknown command '{}'",
                Style::new().yellow().apply_to("Warning:"),
                name
            );
        }
    }

    let result = session
        .orchestrator()
        .install(&args.names, args.command_type, options);

    if session.json {
        display::print_json(&result)?;
    } else {
        display::print_install_result(&result);
    }
    check_result(&result)
}

fn install_all(session: &Session, options: InstallationOptions) -> Result<()> {
    let result = session.orchestrator().install_all(options);

    if session.json {
        display::print_json(&result)?;
    } else {
        display::print_install_all_result(&result);
    }

    if options.dry_run || result.is_clean() {
        return Ok(());
    }
    check_result(&result.active)?;
    check_result(&result.experimental)
}

fn install_categories(
    session: &Session,
    categories: &[String],
    options: InstallationOptions,
) -> Result<()> {
    let result = session
        .orchestrator()
        .install_by_category(categories, options);

    if session.json {
        display::print_json(&result)?;
    } else {
        display::print_category_result(&result);
    }

    if !result.unknown_categories.is_empty() {
        let known: Vec<String> = session.catalog.categories().into_keys().collect();
        return Err(install_incomplete(format!(
            "unknown categor{}: {} (available: {})",
            if result.unknown_categories.len() == 1 { "y" } else { "ies" },
            result.unknown_categories.join(", "),
            known.join(", ")
        )));
    }
    for outcome in &result.outcomes {
        check_result(&outcome.result)?;
    }
    Ok(())
}

/// Exit status of one install call
fn check_result(result: &InstallationResult) -> Result<()> {
    if result.dry_run || result.is_clean() {
        return Ok(());
    }

    if result.rollback_performed {
        let cause = result.error.as_deref().unwrap_or("write failure");
        return Err(install_incomplete(format!(
            "{cause}, all changes rolled back"
        )));
    }

    let requested = result.installed.len() + result.failed.len();
    Err(install_incomplete(format!(
        "{} of {} command(s) not installed: {}",
        result.failed.len(),
        requested,
        result.failed.join(", ")
    )))
}
