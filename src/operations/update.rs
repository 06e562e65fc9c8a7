//! Update flow: reconcile installed scripts with the remote catalog
//!
//! For the entrypoint and for every installed script, the local `Version:`
//! marker is compared with the remote copy's. Only a local copy that is
//! `Older` is replaced. Scripts whose version cannot be read on either side,
//! or that the catalog no longer lists, are skipped and reported.

use std::fmt;
use std::path::Path;

use crate::environment::{EnvironmentContext, SCRIPTS_DIR};
use crate::error::version::Side;
use crate::error::{FetchError, InstallError, Result, VersionError};
use crate::installer::{ENTRYPOINT_NAME, Installer};
use crate::manifest::{Catalog, RemoteSource};
use crate::temp::WorkArea;
use crate::version::{Comparison, Version, compare, parse_version};

#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotInCatalog,
    Unparsable(VersionError),
    Fetch(FetchError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotInCatalog => write!(f, "no longer in the catalog"),
            SkipReason::Unparsable(e) => write!(f, "{e}"),
            SkipReason::Fetch(e) => write!(f, "{e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    Updated { from: Version, to: Version },
    /// Dry run: would have been updated
    Outdated { from: Version, to: Version },
    UpToDate(Version),
    /// Local copy is ahead of the catalog; kept as is
    LocalNewer { local: Version, remote: Version },
    Skipped(SkipReason),
    Failed(InstallError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentUpdate {
    pub name: String,
    pub status: UpdateStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub entrypoint: ComponentUpdate,
    pub components: Vec<ComponentUpdate>,
}

impl UpdateReport {
    fn all(&self) -> impl Iterator<Item = &ComponentUpdate> {
        std::iter::once(&self.entrypoint).chain(self.components.iter())
    }

    pub fn updated(&self) -> usize {
        self.all()
            .filter(|u| matches!(u.status, UpdateStatus::Updated { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.all()
            .filter(|u| matches!(u.status, UpdateStatus::Skipped(_)))
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.all()
            .any(|u| matches!(u.status, UpdateStatus::Failed(_)))
    }
}

/// Version of the installed entrypoint, or of this build when none is installed
pub fn local_entrypoint_version(env: &EnvironmentContext) -> Version {
    std::fs::read_to_string(env.scripts_root().join(ENTRYPOINT_NAME))
        .ok()
        .and_then(|text| parse_version(&text))
        .or_else(|| Version::parse(env!("CARGO_PKG_VERSION")))
        .unwrap_or_default()
}

/// Names of installed scripts, sorted, excluding the entrypoint
pub fn installed_scripts(scripts_root: &Path) -> Vec<String> {
    let mut names: Vec<String> = walkdir::WalkDir::new(scripts_root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| name != ENTRYPOINT_NAME)
        .collect();
    names.sort();
    names
}

pub fn run(
    catalog: &Catalog,
    env: &EnvironmentContext,
    remote: &dyn RemoteSource,
    options: UpdateOptions,
) -> Result<UpdateReport> {
    let work = WorkArea::create()?;
    work.write_snapshot("manifest.json", &catalog.to_manifest())?;
    let updater = Updater {
        env,
        remote,
        work: work.path(),
        options,
    };

    let entrypoint = updater.update_entrypoint(local_entrypoint_version(env));
    let components = installed_scripts(env.scripts_root())
        .into_iter()
        .map(|name| updater.update_component(catalog, name))
        .collect();

    Ok(UpdateReport {
        entrypoint,
        components,
    })
}

struct Updater<'a> {
    env: &'a EnvironmentContext,
    remote: &'a dyn RemoteSource,
    work: &'a Path,
    options: UpdateOptions,
}

impl Updater<'_> {
    fn update_entrypoint(&self, local: Version) -> ComponentUpdate {
        let name = ENTRYPOINT_NAME.to_string();
        let remote_text = match self.remote.fetch_text(ENTRYPOINT_NAME) {
            Ok(text) => text,
            Err(e) => return skipped(name, SkipReason::Fetch(e)),
        };
        let Some(remote) = parse_version(&remote_text) else {
            return skipped(name, unparsable(ENTRYPOINT_NAME, Side::Remote));
        };

        let status = self.decide(local, remote, || {
            let staged = self.work.join(ENTRYPOINT_NAME);
            super::write_staged(&staged, &remote_text)
                .map_err(|e| crate::error::install::copy_failed(ENTRYPOINT_NAME, e))?;
            Installer::new(self.env, self.work).install_entrypoint()
        });
        ComponentUpdate { name, status }
    }

    fn update_component(&self, catalog: &Catalog, name: String) -> ComponentUpdate {
        let Some(component) = catalog.get(&name) else {
            return skipped(name, SkipReason::NotInCatalog);
        };

        let local_text =
            std::fs::read_to_string(self.env.scripts_root().join(&name)).unwrap_or_default();
        let Some(local) = parse_version(&local_text) else {
            let reason = unparsable(&name, Side::Local);
            return skipped(name, reason);
        };

        let remote_text = match self.remote.fetch_text(&component.path) {
            Ok(text) => text,
            Err(e) => return skipped(name, SkipReason::Fetch(e)),
        };
        let Some(remote) = parse_version(&remote_text) else {
            let reason = unparsable(&name, Side::Remote);
            return skipped(name, reason);
        };

        let status = self.decide(local, remote, || {
            let staged = self.work.join(SCRIPTS_DIR).join(&name);
            super::write_staged(&staged, &remote_text)
                .map_err(|e| crate::error::install::copy_failed(&name, e))?;
            Installer::new(self.env, self.work).install_component(&name)
        });
        ComponentUpdate { name, status }
    }

    fn decide<F>(&self, local: Version, remote: Version, overwrite: F) -> UpdateStatus
    where
        F: FnOnce() -> std::result::Result<std::path::PathBuf, InstallError>,
    {
        match compare(&local, &remote) {
            Comparison::Equal => UpdateStatus::UpToDate(local),
            Comparison::Newer => UpdateStatus::LocalNewer { local, remote },
            Comparison::Older if self.options.dry_run => UpdateStatus::Outdated {
                from: local,
                to: remote,
            },
            Comparison::Older => match overwrite() {
                Ok(path) => {
                    tracing::info!(path = %path.display(), from = %local, to = %remote, "updated");
                    UpdateStatus::Updated {
                        from: local,
                        to: remote,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "update failed");
                    UpdateStatus::Failed(e)
                }
            },
        }
    }
}

fn unparsable(component: &str, side: Side) -> SkipReason {
    SkipReason::Unparsable(VersionError::Unparsable {
        component: component.to_string(),
        side,
    })
}

fn skipped(name: String, reason: SkipReason) -> ComponentUpdate {
    tracing::warn!(script = %name, reason = %reason, "skipping update");
    ComponentUpdate {
        name,
        status: UpdateStatus::Skipped(reason),
    }
}
