//! Configuration handling for claude-commands
//!
//! This module contains:
//! - `paths` - configuration directory layout and probing
//! - `manifest` - `installed_commands.json` model and store

pub mod manifest;
pub mod paths;

// Re-export commonly used types
pub use manifest::{Manifest, ManifestStore};
pub use paths::{ConfigPaths, ConfigProbe};
