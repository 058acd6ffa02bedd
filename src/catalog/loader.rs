//! Catalog loading and merging
//!
//! Built-in commands come first; commands from a user catalog directory are
//! layered on top. A user command with the same name replaces the built-in
//! entry in place, new names are appended.

use std::path::PathBuf;

use super::{BuiltinCatalog, Command, CommandCatalog, DirectoryCatalog};
use crate::error::Result;

/// Catalog loader
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    /// Optional directory of user-authored commands
    directory: Option<PathBuf>,
    /// Skip the built-in table (used when a directory fully defines the catalog)
    without_builtin: bool,
}

/// Catalog assembled by [`CatalogLoader`]
#[derive(Debug, Clone, Default)]
pub struct MergedCatalog {
    commands: Vec<Command>,
}

impl CommandCatalog for MergedCatalog {
    fn commands(&self) -> &[Command] {
        &self.commands
    }
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer commands from `dir` over the built-in catalog
    pub fn with_directory(mut self, dir: Option<PathBuf>) -> Self {
        self.directory = dir;
        self
    }

    /// Build the catalog from the directory alone
    pub fn without_builtin(mut self, skip: bool) -> Self {
        self.without_builtin = skip;
        self
    }

    /// Load the catalog
    pub fn load(&self) -> Result<MergedCatalog> {
        let mut commands = if self.without_builtin {
            Vec::new()
        } else {
            BuiltinCatalog::new().into_commands()
        };

        if let Some(dir) = &self.directory {
            let user = DirectoryCatalog::load(dir)?;
            commands = Self::merge_commands(commands, user.into_commands());
        }

        Ok(MergedCatalog { commands })
    }

    fn merge_commands(base: Vec<Command>, overrides: Vec<Command>) -> Vec<Command> {
        let mut merged = base;

        for command in overrides {
            if let Some(pos) = merged.iter().position(|c| c.name == command.name) {
                log::debug!("Catalog entry '{}' overridden by user file", command.name);
                merged[pos] = command;
            } else {
                merged.push(command);
            }
        }

        merged
    }
}
