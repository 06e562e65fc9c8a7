//! Update command implementation
//!
//! Compares each installed script (and the entrypoint) with the catalog copy
//! and replaces only the ones that are behind.

use console::Style;

use super::CatalogLocation;
use crate::cli::UpdateArgs;
use crate::environment;
use crate::error::Result;
use crate::manifest::{self, remote};
use crate::operations::update::{ComponentUpdate, UpdateOptions, UpdateReport, UpdateStatus};

/// Run update command
pub fn run(location: &CatalogLocation, args: UpdateArgs) -> Result<()> {
    let env = environment::resolve();
    let catalog = manifest::load_catalog(&location.manifest_url)?;
    let remote = remote::open(&location.base_url)?;

    println!("Checking for updates in {} ({})...", env.scripts_root().display(), env.mode());
    let options = UpdateOptions {
        dry_run: args.dry_run,
    };
    let report = crate::operations::update::run(&catalog, &env, remote.as_ref(), options)?;

    print_report(&report, args.dry_run);

    let first_failure = std::iter::once(&report.entrypoint)
        .chain(report.components.iter())
        .find_map(|u| match &u.status {
            UpdateStatus::Failed(e) => Some(e.clone()),
            _ => None,
        });
    match first_failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

fn print_report(report: &UpdateReport, dry_run: bool) {
    print_line(&report.entrypoint);
    if report.components.is_empty() {
        println!("No scripts installed.");
    }
    for update in &report.components {
        print_line(update);
    }

    println!();
    if dry_run {
        let outdated = std::iter::once(&report.entrypoint)
            .chain(report.components.iter())
            .filter(|u| matches!(u.status, UpdateStatus::Outdated { .. }))
            .count();
        println!("[DRY RUN] Would update {outdated} script(s)");
    } else {
        println!(
            "Updated {} script(s), skipped {}",
            report.updated(),
            report.skipped()
        );
    }
}

fn print_line(update: &ComponentUpdate) {
    let name = Style::new().bold().apply_to(&update.name);
    match &update.status {
        UpdateStatus::Updated { from, to } => {
            println!("  {} {name} {from} -> {to}", Style::new().green().apply_to("updated"));
        }
        UpdateStatus::Outdated { from, to } => {
            println!("  {} {name} {from} -> {to}", Style::new().yellow().apply_to("outdated"));
        }
        UpdateStatus::UpToDate(version) => {
            println!("  {} {name} {version}", Style::new().dim().apply_to("current"));
        }
        UpdateStatus::LocalNewer { local, remote } => {
            println!(
                "  {} {name} {local} (catalog has {remote})",
                Style::new().cyan().apply_to("ahead")
            );
        }
        UpdateStatus::Skipped(reason) => {
            println!("  {} {name}: {reason}", Style::new().yellow().apply_to("skipped"));
        }
        UpdateStatus::Failed(e) => {
            println!("  {} {e}", Style::new().red().apply_to("failed"));
        }
    }
}
