use clap::Parser;

use crate::catalog::CommandType;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install named commands:\n    claude-commands install xgit xtest\n\n\
                   Install experimental commands:\n    claude-commands install xaws --type experimental\n\n\
                   Install by category:\n    claude-commands install --category security --category planning\n\n\
                   Install everything, replacing existing files:\n    claude-commands install --all --overwrite\n\n\
                   Preview without writing:\n    claude-commands install xgit --dry-run\n\n\
                   Take a backup and undo on failure:\n    claude-commands install xgit xtest --backup --rollback-on-failure")]
pub struct InstallArgs {
    /// Command names to install, in order
    #[arg(conflicts_with_all = ["category", "all"])]
    pub names: Vec<String>,

    /// Command type recorded for the named commands (active, experimental)
    #[arg(long = "type", short = 't', value_name = "TYPE", default_value = "active")]
    pub command_type: CommandType,

    /// Install every command of a category
    #[arg(long, value_name = "CATEGORY", conflicts_with = "all")]
    pub category: Vec<String>,

    /// Install all active and experimental commands
    #[arg(long)]
    pub all: bool,

    /// Replace command files that already exist
    #[arg(long)]
    pub overwrite: bool,

    /// Show what would be installed without actually installing
    #[arg(long)]
    pub dry_run: bool,

    /// Skip existing command files without reporting a conflict
    #[arg(long)]
    pub ignore_missing: bool,

    /// Back up the commands directory first
    #[arg(long)]
    pub backup: bool,

    /// Remove everything written by this run if a write fails
    #[arg(long)]
    pub rollback_on_failure: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> InstallArgs {
        let mut argv = vec!["claude-commands", "install"];
        argv.extend_from_slice(args);
        let cli = super::super::Cli::try_parse_from(argv).unwrap_or_else(|e| {
            panic!("Failed to parse CLI arguments: {}", e);
        });
        match cli.command {
            super::super::Commands::Install(args) => args,
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_install_names() {
        let args = parse(&["xgit", "xtest"]);
        assert_eq!(args.names, vec!["xgit", "xtest"]);
        assert_eq!(args.command_type, CommandType::Active);
        assert!(!args.overwrite);
        assert!(!args.dry_run);
    }

    #[test]
    fn test_cli_parsing_install_with_options() {
        let args = parse(&[
            "xaws",
            "--type",
            "experimental",
            "--overwrite",
            "--ignore-missing",
            "--backup",
            "--rollback-on-failure",
        ]);
        assert_eq!(args.command_type, CommandType::Experimental);
        assert!(args.overwrite);
        assert!(args.ignore_missing);
        assert!(args.backup);
        assert!(args.rollback_on_failure);
    }

    #[test]
    fn test_cli_parsing_install_categories() {
        let args = parse(&["--category", "security", "--category", "planning"]);
        assert_eq!(args.category, vec!["security", "planning"]);
        assert!(args.names.is_empty());
    }

    #[test]
    fn test_cli_parsing_install_rejects_unknown_type() {
        let result =
            super::super::Cli::try_parse_from(["claude-commands", "install", "x", "-t", "beta"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_install_all_conflicts_with_names() {
        let result =
            super::super::Cli::try_parse_from(["claude-commands", "install", "xgit", "--all"]);
        assert!(result.is_err());
    }
}
