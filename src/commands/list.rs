//! List command implementation
//!
//! Lists catalog commands by type. With `--installed` only the commands
//! recorded in the manifest are shown, including names the catalog no
//! longer knows.

use console::Style;
use serde::Serialize;

use super::helpers::Session;
use crate::catalog::{Command, CommandCatalog};
use crate::cli::{GlobalArgs, ListArgs};
use crate::config::ManifestStore;
use crate::error::Result;
use crate::ui::display;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListEntry<'a> {
    name: &'a str,
    command_type: &'static str,
    category: &'a str,
    description: &'a str,
    installed: bool,
}

/// Run list command
pub fn run(global: &GlobalArgs, args: ListArgs) -> Result<()> {
    let session = Session::open(global)?;
    let manifest = ManifestStore::new(&session.paths.config_dir).load_or_default();
    let types = args.type_filter.types();

    let commands: Vec<&Command> = session
        .catalog
        .commands()
        .iter()
        .filter(|c| types.contains(&c.command_type))
        .filter(|c| !args.installed || manifest.contains(&c.name))
        .collect();

    // Installed names without a catalog entry
    let orphans: Vec<&String> = if args.installed {
        manifest
            .installed_commands
            .iter()
            .filter(|name| session.catalog.get(name).is_none())
            .collect()
    } else {
        Vec::new()
    };

    if session.json {
        let entries: Vec<ListEntry<'_>> = commands
            .iter()
            .map(|c| ListEntry {
                name: &c.name,
                command_type: c.command_type.as_str(),
                category: &c.category,
                description: &c.description,
                installed: manifest.contains(&c.name),
            })
            .collect();
        return display::print_json(&entries);
    }

    if commands.is_empty() && orphans.is_empty() {
        if args.installed {
            println!("No commands installed.");
        } else {
            println!("No commands available.");
        }
        return Ok(());
    }

    display::print_command_list(&commands, types, &manifest);

    if !orphans.is_empty() {
        println!("{}", Style::new().bold().yellow().apply_to("not in catalog"));
        for name in orphans {
            println!("  {} {}", Style::new().green().apply_to("●"), name);
        }
    }

    Ok(())
}
