//! Install command implementation
//!
//! The installation process:
//! 1. Resolve the environment (development or production root)
//! 2. Fetch the catalog
//! 3. Walk the selection menus (or select everything with `--all`)
//! 4. Download and copy the selection, then print a report

use console::Style;

use super::CatalogLocation;
use crate::cli::InstallArgs;
use crate::environment::{self, EnvironmentContext};
use crate::error::Result;
use crate::installer::InstallReport;
use crate::manifest::{self, remote};
use crate::operations::install::{InstallOptions, InstallOutcome};
use crate::selection::prompt::{InquirePrompter, InstallAllPrompter};
use crate::selection::{Prompter, Selection};

/// Run install command
pub fn run(location: &CatalogLocation, args: InstallArgs) -> Result<()> {
    let env = environment::resolve();
    let catalog = manifest::load_catalog(&location.manifest_url)?;
    let remote = remote::open(&location.base_url)?;

    let mut prompter: Box<dyn Prompter> = if args.all {
        Box::new(InstallAllPrompter)
    } else {
        Box::new(InquirePrompter::new())
    };

    let options = InstallOptions {
        source_root: args.source_root.as_deref(),
        dry_run: args.dry_run,
        show_progress: !args.dry_run,
    };

    match crate::operations::install::run(&catalog, &env, remote.as_ref(), prompter.as_mut(), options)? {
        InstallOutcome::Cancelled => println!("Installation cancelled. No changes were made."),
        InstallOutcome::Planned(selection) => print_plan(&env, &selection),
        InstallOutcome::Installed(report) => print_report(&env, &report),
    }

    Ok(())
}

fn print_plan(env: &EnvironmentContext, selection: &Selection) {
    println!(
        "[DRY RUN] Would install {} script(s) into {} ({})",
        selection.len(),
        env.scripts_root().display(),
        env.mode()
    );
    for name in selection.iter() {
        println!("  {}", Style::new().bold().yellow().apply_to(name));
    }
}

fn print_report(env: &EnvironmentContext, report: &InstallReport) {
    println!(
        "Installed {} script(s) into {} ({})",
        report.installed.len(),
        env.scripts_root().display(),
        env.mode()
    );
    for name in &report.installed {
        println!("  {} {}", Style::new().green().apply_to("✓"), name);
    }
    for failure in &report.failures {
        println!("  {} {}", Style::new().red().apply_to("✗"), failure);
    }
    if let Some(entrypoint) = &report.entrypoint {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Entrypoint:"),
            entrypoint.display()
        );
    }
}
