//! Command selection and definition syntax validation

use serde::Serialize;

use crate::catalog::CommandCatalog;

/// Heading marker a definition must start with
const HEADING_MARKER: char = '#';

/// Field marker a definition must contain (case-insensitive)
const DESCRIPTION_MARKER: &str = "description:";

/// Requested names partitioned against the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionReport {
    /// No invalid names were requested
    pub valid: bool,
    /// Requested names known to the catalog, in request order
    pub valid_commands: Vec<String>,
    /// Requested names unknown to the catalog, in request order
    pub invalid_commands: Vec<String>,
}

/// Every structural rule a definition violates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyntaxReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Validates selections and command content
pub struct Validator<'a> {
    catalog: &'a dyn CommandCatalog,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a dyn CommandCatalog) -> Self {
        Self { catalog }
    }

    /// Partition `requested` into names the catalog knows (any type) and names it does not
    pub fn validate_selection(&self, requested: &[String]) -> SelectionReport {
        let (valid_commands, invalid_commands): (Vec<String>, Vec<String>) = requested
            .iter()
            .cloned()
            .partition(|name| self.catalog.get(name).is_some());

        SelectionReport {
            valid: invalid_commands.is_empty(),
            valid_commands,
            invalid_commands,
        }
    }

    /// Check a definition is non-empty, starts with a heading and has a description
    pub fn validate_syntax(&self, content: &str) -> SyntaxReport {
        let mut errors = Vec::new();

        if content.trim().is_empty() {
            errors.push("Command content is empty".to_string());
        }

        if !content.starts_with(HEADING_MARKER) {
            errors.push("Command must start with markdown header".to_string());
        }

        if !content.to_lowercase().contains(DESCRIPTION_MARKER) {
            errors.push("Command must include description".to_string());
        }

        SyntaxReport {
            valid: errors.is_empty(),
            errors,
        }
    }
}
