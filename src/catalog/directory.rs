//! Catalog of user-authored command files
//!
//! Layout:
//!
//! ```text
//! <dir>/active/<name>.md
//! <dir>/experimental/<name>.md   (or <dir>/experiments/)
//! ```
//!
//! Category and description are read from optional YAML frontmatter
//! (`category:`, else the first entry of `tags:`; `description:`).

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use super::{Command, CommandCatalog, CommandType, DEFAULT_CATEGORY};
use crate::error::{Result, catalog_load_failed};
use crate::installer::file_ops::COMMAND_EXTENSION;

/// Subdirectories scanned for each command type
const TYPE_DIRS: &[(&str, CommandType)] = &[
    ("active", CommandType::Active),
    ("experimental", CommandType::Experimental),
    ("experiments", CommandType::Experimental),
];

/// Commands loaded from a directory tree
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    commands: Vec<Command>,
}

impl DirectoryCatalog {
    /// Load every command file under `root`
    ///
    /// Missing type subdirectories are skipped; a missing `root` is an error.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(catalog_load_failed(
                root.display().to_string(),
                "not a directory",
            ));
        }

        let mut commands: Vec<Command> = Vec::new();
        for &(subdir, command_type) in TYPE_DIRS {
            let dir = root.join(subdir);
            if !dir.is_dir() {
                continue;
            }
            for path in command_files(&dir)? {
                let command = read_command(&path, command_type)?;
                if commands.iter().any(|c| c.name == command.name) {
                    log::warn!(
                        "Duplicate command '{}' in {}, keeping the first definition",
                        command.name,
                        path.display()
                    );
                    continue;
                }
                commands.push(command);
            }
        }

        log::debug!(
            "Loaded {} command(s) from {}",
            commands.len(),
            root.display()
        );

        Ok(Self { commands })
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }
}

impl CommandCatalog for DirectoryCatalog {
    fn commands(&self) -> &[Command] {
        &self.commands
    }
}

/// Markdown files directly under `dir`, sorted by file name
fn command_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).map_err(|e| catalog_load_failed(dir.display().to_string(), e.to_string()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| catalog_load_failed(dir.display().to_string(), e.to_string()))?;
        let path = entry.path();
        let is_command = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext == COMMAND_EXTENSION);
        if is_command {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn read_command(path: &Path, command_type: CommandType) -> Result<Command> {
    let content = fs::read_to_string(path)
        .map_err(|e| catalog_load_failed(path.display().to_string(), e.to_string()))?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let frontmatter = parse_frontmatter(&content);
    let category = frontmatter
        .as_ref()
        .and_then(category_from_frontmatter)
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    let description = frontmatter
        .as_ref()
        .and_then(|fm| fm.get("description"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default();

    Ok(Command {
        name,
        command_type,
        category,
        description,
        content,
    })
}

/// YAML between the first two `---` lines, if present and a mapping
fn parse_frontmatter(content: &str) -> Option<Value> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < 3 || lines[0].trim() != "---" {
        return None;
    }
    let end_idx = lines[1..].iter().position(|l| l.trim() == "---")? + 1;
    let value: Value = serde_yaml::from_str(&lines[1..end_idx].join("\n")).ok()?;
    value.is_mapping().then_some(value)
}

fn category_from_frontmatter(frontmatter: &Value) -> Option<String> {
    if let Some(category) = frontmatter.get("category").and_then(Value::as_str) {
        return Some(category.to_string());
    }
    frontmatter
        .get("tags")
        .and_then(Value::as_sequence)
        .and_then(|tags| tags.first())
        .and_then(Value::as_str)
        .map(str::to_string)
}
