//! Scriptdock - script catalog installer
//!
//! Fetches a remote catalog of shell scripts, walks the user through a
//! featured/full selection, and installs or updates the chosen scripts in the
//! development or production root.

use clap::Parser;

mod cli;
mod commands;
mod environment;
mod error;
mod installer;
mod interrupt;
mod logging;
mod manifest;
mod operations;
mod progress;
mod selection;
mod temp;
mod version;

use cli::{Cli, Commands};
use commands::CatalogLocation;
use error::{ScriptdockError, SelectionError};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    interrupt::install_handler();

    let location = CatalogLocation {
        manifest_url: cli.manifest_url,
        base_url: cli.base_url,
    };

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(&location, args),
        Commands::Update(args) => commands::update::run(&location, args),
        Commands::List(args) => commands::list::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        if matches!(e, ScriptdockError::Selection(SelectionError::Interrupted)) {
            eprintln!("Interrupted.");
            std::process::exit(interrupt::INTERRUPTED_EXIT_CODE);
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
