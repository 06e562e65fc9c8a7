//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::CompletionsArgs;
use crate::error::Result;

const SUPPORTED: &str = "bash, elvish, fish, powershell, zsh";

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let Some(shell) = parse_shell(&args.shell) else {
        eprintln!("Unknown shell: {}", args.shell);
        eprintln!("Supported shells: {SUPPORTED}");
        std::process::exit(1);
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "scriptdock", &mut std::io::stdout().lock());

    Ok(())
}

fn parse_shell(name: &str) -> Option<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "elvish" => Some(Shell::Elvish),
        "fish" => Some(Shell::Fish),
        "powershell" | "pwsh" => Some(Shell::PowerShell),
        "zsh" => Some(Shell::Zsh),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell_is_case_insensitive() {
        assert_eq!(parse_shell("BASH"), Some(Shell::Bash));
        assert_eq!(parse_shell("Zsh"), Some(Shell::Zsh));
        assert_eq!(parse_shell("pwsh"), Some(Shell::PowerShell));
    }

    #[test]
    fn test_parse_shell_unknown() {
        assert_eq!(parse_shell("tcsh"), None);
    }

    #[test]
    fn test_completions_generate() {
        for shell in ["bash", "fish", "zsh"] {
            let args = CompletionsArgs {
                shell: shell.to_string(),
            };
            assert!(run(args).is_ok(), "{shell}");
        }
    }
}
