use clap::Parser;
use std::path::PathBuf;

/// Arguments for the restore command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Restore a backup printed by install --backup:\n    \
                  claude-commands restore /tmp/claude_commands_backup_Ab12Cd")]
pub struct RestoreArgs {
    /// Backup location
    pub backup: PathBuf,
}
