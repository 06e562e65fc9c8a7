//! Install executor
//!
//! Copies selected scripts from a source tree into the resolved scripts root:
//!
//! ```text
//! <source_root>/scripts/<name>   ->  <scripts_root>/<name>
//! <source_root>/scriptdock       ->  <scripts_root>/scriptdock   (always, path-rewritten)
//! ```
//!
//! A failed copy skips that script and moves on. The batch fails only when no
//! selected script could be installed, or when the scripts root is empty
//! afterwards. Partial writes are not rolled back.

pub mod file_ops;

use std::path::{Path, PathBuf};

use crate::environment::{DEFAULT_DEV_ROOT, EnvironmentContext, SCRIPTS_DIR};
use crate::error::InstallError;
use crate::error::install::copy_failed;
use crate::progress::ProgressDisplay;
use crate::selection::Selection;

/// File name of the canonical entrypoint
pub const ENTRYPOINT_NAME: &str = "scriptdock";

/// Source and destination of one copy, alive only while it runs
#[derive(Debug)]
struct InstallRecord<'a> {
    component: &'a str,
    source: PathBuf,
    destination: PathBuf,
}

/// What an install batch did
#[derive(Debug, Default)]
pub struct InstallReport {
    /// Installed script names, in selection order
    pub installed: Vec<String>,
    /// Per-script failures that were skipped
    pub failures: Vec<InstallError>,
    /// Where the entrypoint landed, if it could be installed
    pub entrypoint: Option<PathBuf>,
}

/// Where a selected script is expected in a source tree
pub fn source_path(source_root: &Path, name: &str) -> PathBuf {
    source_root.join(SCRIPTS_DIR).join(name)
}

pub struct Installer<'a> {
    env: &'a EnvironmentContext,
    source_root: &'a Path,
    progress: ProgressDisplay,
}

impl<'a> Installer<'a> {
    pub fn new(env: &'a EnvironmentContext, source_root: &'a Path) -> Self {
        Self {
            env,
            source_root,
            progress: ProgressDisplay::hidden(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressDisplay) -> Self {
        self.progress = progress;
        self
    }

    /// Install every selected script, then the entrypoint
    pub fn install(&self, selection: &Selection) -> Result<InstallReport, InstallError> {
        if selection.is_empty() {
            return Err(InstallError::NoSelection);
        }

        let mut report = InstallReport::default();
        for name in selection.iter() {
            self.progress.update(name);
            match self.install_component(name) {
                Ok(destination) => {
                    tracing::info!(script = name, destination = %destination.display(), "installed");
                    report.installed.push(name.to_string());
                }
                Err(e) => {
                    tracing::warn!(script = name, error = %e, "skipping script");
                    report.failures.push(e);
                }
            }
            self.progress.inc();
        }

        if report.installed.is_empty() {
            self.progress.abandon();
            return Err(InstallError::AllFailed {
                attempted: selection.len(),
            });
        }

        match self.install_entrypoint() {
            Ok(destination) => report.entrypoint = Some(destination),
            Err(e) => {
                tracing::warn!(error = %e, "entrypoint not installed");
                report.failures.push(e);
            }
        }
        self.progress.finish();

        verify(self.env.scripts_root())?;
        Ok(report)
    }

    /// Copy one script into the scripts root and mark it executable
    pub fn install_component(&self, name: &str) -> Result<PathBuf, InstallError> {
        let record = InstallRecord {
            component: name,
            source: source_path(self.source_root, name),
            destination: self.env.scripts_root().join(name),
        };

        if !record.source.is_file() {
            return Err(copy_failed(
                record.component,
                format!("source artifact not found at {}", record.source.display()),
            ));
        }

        file_ops::copy_file(&record.source, &record.destination)
            .and_then(|()| file_ops::make_executable(&record.destination))
            .map_err(|e| copy_failed(record.component, e))?;

        Ok(record.destination)
    }

    /// Copy the entrypoint, pointing its development-root references at the
    /// active install root
    pub fn install_entrypoint(&self) -> Result<PathBuf, InstallError> {
        let record = InstallRecord {
            component: ENTRYPOINT_NAME,
            source: self.source_root.join(ENTRYPOINT_NAME),
            destination: self.env.scripts_root().join(ENTRYPOINT_NAME),
        };

        if !record.source.is_file() {
            return Err(copy_failed(
                record.component,
                format!("entrypoint not found at {}", record.source.display()),
            ));
        }

        let install_root = self.env.install_root().display().to_string();
        file_ops::copy_rewriting(
            &record.source,
            &record.destination,
            DEFAULT_DEV_ROOT,
            &install_root,
        )
        .and_then(|()| file_ops::make_executable(&record.destination))
        .map_err(|e| copy_failed(record.component, e))?;

        tracing::info!(destination = %record.destination.display(), "installed entrypoint");
        Ok(record.destination)
    }
}

/// The scripts root must hold at least one file
fn verify(scripts_root: &Path) -> Result<(), InstallError> {
    let has_file = walkdir::WalkDir::new(scripts_root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .any(|entry| entry.file_type().is_file());

    if has_file {
        Ok(())
    } else {
        Err(InstallError::VerificationFailed {
            path: scripts_root.display().to_string(),
        })
    }
}
