use clap::Parser;

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update outdated scripts:\n    scriptdock update\n\n\
                  Show what would be updated:\n    scriptdock update --dry-run")]
pub struct UpdateArgs {
    /// Compare versions without replacing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_update() {
        let cli = Cli::try_parse_from(["scriptdock", "update", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Update(args) => assert!(args.dry_run),
            _ => panic!("Expected Update command"),
        }
    }
}
