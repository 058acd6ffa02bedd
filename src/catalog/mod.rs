//! Command catalog
//!
//! The catalog is the read-only source of installable commands. The
//! orchestrator only depends on the [`CommandCatalog`] trait: a lookup by name
//! and a listing by type. How the catalog is populated (built-in table,
//! user-authored directory, test fixture) is decided by [`CatalogLoader`].

pub mod builtin;
pub mod directory;
pub mod loader;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InstallerError, unknown_command_type};

pub use builtin::BuiltinCatalog;
pub use directory::DirectoryCatalog;
pub use loader::{CatalogLoader, MergedCatalog};

/// Category assigned to commands that do not declare one
pub const DEFAULT_CATEGORY: &str = "automation";

/// Kind of command in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Active,
    Experimental,
}

impl CommandType {
    /// All command types, in listing order
    pub const ALL: [CommandType; 2] = [CommandType::Active, CommandType::Experimental];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandType::Active => "active",
            CommandType::Experimental => "experimental",
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandType {
    type Err = InstallerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(CommandType::Active),
            "experimental" | "experiments" => Ok(CommandType::Experimental),
            _ => Err(unknown_command_type(s)),
        }
    }
}

/// An installable command definition
///
/// Commands are immutable once the catalog is built; installing copies
/// `content` and never touches the catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Unique name within its type (also the installed file stem)
    pub name: String,
    pub command_type: CommandType,
    /// Informational grouping (e.g. "security", "testing")
    pub category: String,
    pub description: String,
    /// Opaque definition text copied verbatim into the target directory
    pub content: String,
}

/// Read-only registry of installable commands
pub trait CommandCatalog {
    /// All commands, in catalog order
    fn commands(&self) -> &[Command];

    /// Look up a command by name
    fn get(&self, name: &str) -> Option<&Command> {
        self.commands().iter().find(|c| c.name == name)
    }

    /// Names of all commands of the given type, in catalog order
    fn names(&self, command_type: CommandType) -> Vec<String> {
        self.commands()
            .iter()
            .filter(|c| c.command_type == command_type)
            .map(|c| c.name.clone())
            .collect()
    }

    /// Names of every command regardless of type
    fn all_names(&self) -> Vec<String> {
        self.commands().iter().map(|c| c.name.clone()).collect()
    }

    /// Category name to command names, commands in catalog order
    fn categories(&self) -> BTreeMap<String, Vec<String>> {
        let mut categories: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for command in self.commands() {
            categories
                .entry(command.category.clone())
                .or_default()
                .push(command.name.clone());
        }
        categories
    }

    /// Names of commands in a category; `None` when the category is unknown
    fn names_in_category(&self, category: &str) -> Option<Vec<String>> {
        let names: Vec<String> = self
            .commands()
            .iter()
            .filter(|c| c.category == category)
            .map(|c| c.name.clone())
            .collect();
        if names.is_empty() { None } else { Some(names) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixtureCatalog(Vec<Command>);

    impl CommandCatalog for FixtureCatalog {
        fn commands(&self) -> &[Command] {
            &self.0
        }
    }

    fn command(name: &str, command_type: CommandType, category: &str) -> Command {
        Command {
            name: name.to_string(),
            command_type,
            category: category.to_string(),
            description: String::new(),
            content: format!("# {name}\n\ndescription: {name}\n"),
        }
    }

    fn fixture() -> FixtureCatalog {
        FixtureCatalog(vec![
            command("xgit", CommandType::Active, "development"),
            command("xtest", CommandType::Active, "testing"),
            command("xaws", CommandType::Experimental, "deployment"),
            command("xtdd", CommandType::Active, "testing"),
        ])
    }

    #[test]
    fn test_command_type_parse() {
        assert_eq!(
            "active".parse::<CommandType>().unwrap(),
            CommandType::Active
        );
        assert_eq!(
            "Experimental".parse::<CommandType>().unwrap(),
            CommandType::Experimental
        );
        assert!("beta".parse::<CommandType>().is_err());
    }

    #[test]
    fn test_command_type_display() {
        assert_eq!(CommandType::Active.to_string(), "active");
        assert_eq!(CommandType::Experimental.to_string(), "experimental");
    }

    #[test]
    fn test_names_by_type_preserve_order() {
        let catalog = fixture();
        assert_eq!(
            catalog.names(CommandType::Active),
            vec!["xgit", "xtest", "xtdd"]
        );
        assert_eq!(catalog.names(CommandType::Experimental), vec!["xaws"]);
    }

    #[test]
    fn test_get_by_name() {
        let catalog = fixture();
        assert_eq!(
            catalog.get("xaws").map(|c| c.command_type),
            Some(CommandType::Experimental)
        );
        assert!(catalog.get("xmissing").is_none());
    }

    #[test]
    fn test_categories_grouping() {
        let catalog = fixture();
        let categories = catalog.categories();
        assert_eq!(categories["testing"], vec!["xtest", "xtdd"]);
        assert_eq!(categories.len(), 3);
        assert_eq!(
            catalog.names_in_category("development"),
            Some(vec!["xgit".to_string()])
        );
        assert_eq!(catalog.names_in_category("nope"), None);
    }
}
