use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    claude-commands completions bash > ~/.bash_completion.d/claude-commands\n\n\
                  Generate zsh completions:\n    claude-commands completions zsh > ~/.zfunc/_claude-commands\n\n\
                  Generate fish completions:\n    claude-commands completions fish > ~/.config/fish/completions/claude-commands.fish\n\n\
                  Generate PowerShell completions:\n    claude-commands completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
