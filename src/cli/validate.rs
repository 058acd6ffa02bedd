use clap::Parser;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check that names exist in the catalog:\n    claude-commands validate xgit xtest\n\n\
                  Check a command definition file:\n    claude-commands validate --file ./xmine.md")]
pub struct ValidateArgs {
    /// Command names to look up in the catalog
    pub names: Vec<String>,

    /// Command definition files to check
    #[arg(long = "file", short = 'f', value_name = "PATH")]
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_validate() {
        let cli = super::super::Cli::try_parse_from([
            "claude-commands",
            "validate",
            "xgit",
            "--file",
            "a.md",
            "-f",
            "b.md",
        ])
        .unwrap();
        match cli.command {
            super::super::Commands::Validate(args) => {
                assert_eq!(args.names, vec!["xgit"]);
                assert_eq!(args.files, vec![PathBuf::from("a.md"), PathBuf::from("b.md")]);
            }
            _ => panic!("Expected Validate command"),
        }
    }
}
