//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - uninstall: Uninstall command arguments
//! - list: List command arguments
//! - validate: Validate command arguments
//! - verify: Verify command arguments
//! - restore: Restore command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod list;
pub mod restore;
pub mod uninstall;
pub mod validate;
pub mod verify;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use restore::RestoreArgs;
pub use uninstall::UninstallArgs;
pub use validate::ValidateArgs;
pub use verify::VerifyArgs;

/// claude-commands - slash-command installer
///
/// Install, verify and remove command definitions in the user configuration directory.
#[derive(Parser, Debug)]
#[command(
    name = "claude-commands",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install slash-command definitions into the user configuration directory",
    long_about = "claude-commands copies command definitions from a catalog of active and \
                  experimental commands into <config-dir>/commands, records them in \
                  installed_commands.json and can back up, verify, restore and remove them.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  claude-commands install xgit xtest          \x1b[90m# Install two active commands\x1b[0m\n   \
                  claude-commands install --category security \x1b[90m# Install a whole category\x1b[0m\n   \
                  claude-commands install --all --overwrite   \x1b[90m# Install or refresh everything\x1b[0m\n   \
                  claude-commands uninstall xgit              \x1b[90m# Remove a command\x1b[0m\n   \
                  claude-commands list --installed            \x1b[90m# Show what is installed\x1b[0m\n   \
                  claude-commands verify                      \x1b[90m# Check installed files\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Configuration directory (defaults to ~/.claude)
    #[arg(long, short = 'c', global = true, env = "CLAUDE_COMMANDS_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Directory of additional command definitions (active/ and experimental/)
    #[arg(long, global = true, env = "CLAUDE_COMMANDS_CATALOG_DIR")]
    pub catalog_dir: Option<PathBuf>,

    /// Use only the commands from --catalog-dir
    #[arg(long, global = true, requires = "catalog_dir")]
    pub no_builtin: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install commands into the configuration directory
    Install(InstallArgs),

    /// Remove installed commands
    Uninstall(UninstallArgs),

    /// List available or installed commands
    List(ListArgs),

    /// Validate command names or definition files
    Validate(ValidateArgs),

    /// Check installed command files against the catalog
    Verify(VerifyArgs),

    /// Replace the commands directory with a backup
    Restore(RestoreArgs),

    /// Show configuration directory and manifest status
    Status,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_status() {
        let cli = Cli::try_parse_from(["claude-commands", "status"]).unwrap();
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["claude-commands", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "claude-commands",
            "-v",
            "--config-dir",
            "/tmp/cfg",
            "--catalog-dir",
            "/tmp/catalog",
            "--no-builtin",
            "--json",
            "status",
        ])
        .unwrap();
        assert!(cli.global.verbose);
        assert!(cli.global.json);
        assert!(cli.global.no_builtin);
        assert_eq!(cli.global.config_dir, Some(PathBuf::from("/tmp/cfg")));
        assert_eq!(cli.global.catalog_dir, Some(PathBuf::from("/tmp/catalog")));
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["claude-commands", "list", "--config-dir", "/tmp/cfg"]).unwrap();
        assert_eq!(cli.global.config_dir, Some(PathBuf::from("/tmp/cfg")));
    }

    #[test]
    fn test_cli_no_builtin_requires_catalog_dir() {
        let result = Cli::try_parse_from(["claude-commands", "--no-builtin", "list"]);
        // CLAUDE_COMMANDS_CATALOG_DIR may satisfy the requirement in the environment
        if std::env::var_os("CLAUDE_COMMANDS_CATALOG_DIR").is_none() {
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["claude-commands", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
