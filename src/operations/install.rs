//! Install flow: select, stage sources, copy
//!
//! 1. Snapshot the catalog into the work area
//! 2. Run the selection state machine
//! 3. Stage selected artifacts (unless a local source tree was given)
//! 4. Hand the frozen selection to the installer

use std::path::Path;

use crate::environment::{EnvironmentContext, SCRIPTS_DIR};
use crate::error::Result;
use crate::installer::{ENTRYPOINT_NAME, InstallReport, Installer};
use crate::manifest::{Catalog, RemoteSource};
use crate::progress::ProgressDisplay;
use crate::selection::{Outcome, Prompter, Selection, SelectionMachine};
use crate::temp::WorkArea;

#[derive(Debug, Default, Clone, Copy)]
pub struct InstallOptions<'a> {
    /// Copy from this tree instead of downloading
    pub source_root: Option<&'a Path>,
    pub dry_run: bool,
    pub show_progress: bool,
}

#[derive(Debug)]
pub enum InstallOutcome {
    Installed(InstallReport),
    /// Dry run: what would have been installed
    Planned(Selection),
    Cancelled,
}

pub fn run<P: Prompter + ?Sized>(
    catalog: &Catalog,
    env: &EnvironmentContext,
    remote: &dyn RemoteSource,
    prompter: &mut P,
    options: InstallOptions<'_>,
) -> Result<InstallOutcome> {
    let work = WorkArea::create()?;
    work.write_snapshot("manifest.json", &catalog.to_manifest())?;

    let selection = match SelectionMachine::new(catalog).run(prompter)? {
        Outcome::Done(selection) => selection,
        Outcome::Cancelled => {
            tracing::info!("selection cancelled");
            return Ok(InstallOutcome::Cancelled);
        }
    };
    work.write_snapshot("selection.json", &selection)?;

    if options.dry_run {
        return Ok(InstallOutcome::Planned(selection));
    }

    let source_root = match options.source_root {
        Some(root) => root,
        None => {
            stage_sources(catalog, &selection, remote, work.path());
            work.path()
        }
    };

    let progress = if options.show_progress {
        ProgressDisplay::new(selection.len() as u64)
    } else {
        ProgressDisplay::hidden()
    };

    let report = Installer::new(env, source_root)
        .with_progress(progress)
        .install(&selection)?;
    Ok(InstallOutcome::Installed(report))
}

/// Download selected scripts and the entrypoint into `dir`.
///
/// Download failures are logged; the installer then reports those scripts as
/// missing sources.
fn stage_sources(catalog: &Catalog, selection: &Selection, remote: &dyn RemoteSource, dir: &Path) {
    for name in selection.iter() {
        let Some(component) = catalog.get(name) else {
            tracing::warn!(script = name, "selected script is not in the catalog");
            continue;
        };
        let destination = dir.join(SCRIPTS_DIR).join(name);
        if let Err(e) = super::stage_artifact(remote, &component.path, &destination) {
            tracing::warn!(script = name, error = %e, "download failed");
        }
    }

    if let Err(e) = super::stage_artifact(remote, ENTRYPOINT_NAME, &dir.join(ENTRYPOINT_NAME)) {
        tracing::warn!(error = %e, "entrypoint download failed");
    }
}
