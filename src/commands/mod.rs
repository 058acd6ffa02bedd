//! Command implementations for the claude-commands CLI

pub mod completions;
pub mod helpers;
pub mod install;
pub mod list;
pub mod restore;
pub mod status;
pub mod uninstall;
pub mod validate;
pub mod verify;
pub mod version;
