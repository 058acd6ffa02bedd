use clap::Parser;

/// Arguments for the verify command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Verify everything in the manifest:\n    claude-commands verify\n\n\
                  Verify specific commands:\n    claude-commands verify xgit xtest")]
pub struct VerifyArgs {
    /// Command names to verify (defaults to the installed commands in the manifest)
    pub names: Vec<String>,
}
