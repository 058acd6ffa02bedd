use clap::Parser;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Uninstall a command:\n    claude-commands uninstall xgit\n\n\
                  Uninstall several commands:\n    claude-commands uninstall xgit xtest xdocs")]
pub struct UninstallArgs {
    /// Command names to remove
    #[arg(required = true)]
    pub names: Vec<String>,
}
