//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::{Result, config_invalid};

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell_name = args.shell.to_lowercase();
    let shell = match shell_name.as_str() {
        "bash" => clap_complete::Shell::Bash,
        "elvish" => clap_complete::Shell::Elvish,
        "fish" => clap_complete::Shell::Fish,
        "powershell" | "pwsh" => clap_complete::Shell::PowerShell,
        "zsh" => clap_complete::Shell::Zsh,
        _ => {
            return Err(config_invalid(format!(
                "unknown shell '{}' (supported: bash, elvish, fish, powershell, zsh)",
                args.shell
            )));
        }
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(
        shell,
        &mut cmd,
        "claude-commands",
        &mut std::io::stdout().lock(),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completions(shell: &str) -> Result<()> {
        run(CompletionsArgs {
            shell: shell.to_string(),
        })
    }

    #[test]
    fn test_completions_supported_shells() {
        for shell in ["bash", "elvish", "fish", "powershell", "pwsh", "zsh"] {
            assert!(completions(shell).is_ok(), "{shell} should be supported");
        }
    }

    #[test]
    fn test_completions_case_insensitive() {
        assert!(completions("BASH").is_ok());
        assert!(completions("Zsh").is_ok());
    }

    #[test]
    fn test_completions_unknown_shell() {
        let err = completions("tcsh").unwrap_err();
        assert!(err.to_string().contains("tcsh"));
    }
}
