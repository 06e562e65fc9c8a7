use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Pick scripts interactively:\n    scriptdock install\n\n\
                   Install every script in the catalog:\n    scriptdock install --all\n\n\
                   Install from a local checkout:\n    scriptdock install --source-root ./catalog\n\n\
                   Preview the selection:\n    scriptdock install --all --dry-run")]
pub struct InstallArgs {
    /// Install the whole catalog without prompting
    #[arg(long)]
    pub all: bool,

    /// Show what would be installed without actually installing
    #[arg(long)]
    pub dry_run: bool,

    /// Copy scripts from this checkout instead of downloading them
    #[arg(long, value_name = "DIR")]
    pub source_root: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parsing_install() {
        let cli = Cli::try_parse_from(["scriptdock", "install"]).unwrap_or_else(|e| {
            panic!("Failed to parse CLI arguments: {}", e);
        });
        match cli.command {
            Commands::Install(args) => {
                assert!(!args.all);
                assert!(!args.dry_run);
                assert_eq!(args.source_root, None);
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_install_with_options() {
        let cli = Cli::try_parse_from([
            "scriptdock",
            "install",
            "--all",
            "--dry-run",
            "--source-root",
            "./catalog",
        ])
        .unwrap_or_else(|e| {
            panic!("Failed to parse CLI arguments: {}", e);
        });
        match cli.command {
            Commands::Install(args) => {
                assert!(args.all);
                assert!(args.dry_run);
                assert_eq!(args.source_root, Some(PathBuf::from("./catalog")));
            }
            _ => panic!("Expected Install command"),
        }
    }
}
