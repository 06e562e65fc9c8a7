//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - update: Update command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

use crate::manifest::{DEFAULT_BASE_URL, DEFAULT_MANIFEST_URL};

pub mod completions;
pub mod install;
pub mod list;
pub mod update;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use update::UpdateArgs;

/// Scriptdock - script catalog installer
///
/// Browse a remote catalog of shell scripts and install or update them locally.
#[derive(Parser, Debug)]
#[command(
    name = "scriptdock",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Interactive installer for a remote catalog of shell scripts",
    long_about = "Scriptdock fetches a catalog of shell scripts, lets you pick from featured and \
                  full listings, and installs the selection together with the scriptdock \
                  entrypoint into the development or production root.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  scriptdock install              \x1b[90m# Pick scripts interactively\x1b[0m\n   \
                  scriptdock install --all        \x1b[90m# Install the whole catalog\x1b[0m\n   \
                  scriptdock update               \x1b[90m# Refresh outdated scripts\x1b[0m\n   \
                  scriptdock update --dry-run     \x1b[90m# Show what would be refreshed\x1b[0m\n   \
                  scriptdock list                 \x1b[90m# List installed scripts\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Catalog manifest URL (or path to a local manifest file)
    #[arg(
        long,
        global = true,
        value_name = "URL",
        env = "SCRIPTDOCK_MANIFEST_URL",
        default_value = DEFAULT_MANIFEST_URL
    )]
    pub manifest_url: String,

    /// Base URL script paths are resolved against (or a local catalog checkout)
    #[arg(
        long,
        global = true,
        value_name = "URL",
        env = "SCRIPTDOCK_BASE_URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select and install scripts from the catalog
    Install(InstallArgs),

    /// Update installed scripts that are behind the catalog
    Update(UpdateArgs),

    /// List installed scripts
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["scriptdock", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["scriptdock", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    #[serial]
    fn test_cli_defaults() {
        unsafe {
            std::env::remove_var("SCRIPTDOCK_MANIFEST_URL");
            std::env::remove_var("SCRIPTDOCK_BASE_URL");
        }
        let cli = Cli::try_parse_from(["scriptdock", "update"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.manifest_url, DEFAULT_MANIFEST_URL);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    #[serial]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "scriptdock",
            "-v",
            "list",
            "--manifest-url",
            "/tmp/manifest.json",
            "--base-url",
            "/tmp/catalog",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.manifest_url, "/tmp/manifest.json");
        assert_eq!(cli.base_url, "/tmp/catalog");
    }

    #[test]
    #[serial]
    fn test_cli_manifest_url_from_env() {
        unsafe {
            std::env::set_var("SCRIPTDOCK_MANIFEST_URL", "/tmp/env-manifest.json");
        }
        let env_cli = Cli::try_parse_from(["scriptdock", "list"]).unwrap();
        let flag_cli = Cli::try_parse_from([
            "scriptdock",
            "--manifest-url",
            "/tmp/flag-manifest.json",
            "list",
        ])
        .unwrap();
        unsafe {
            std::env::remove_var("SCRIPTDOCK_MANIFEST_URL");
        }
        assert_eq!(env_cli.manifest_url, "/tmp/env-manifest.json");
        // Flag should override environment variable
        assert_eq!(flag_cli.manifest_url, "/tmp/flag-manifest.json");
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["scriptdock", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
