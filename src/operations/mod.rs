//! High-level flows behind the `install` and `update` commands
//!
//! Commands parse arguments and print; operations do the work and return
//! reports, so they can be driven from tests with scripted prompters and
//! directory-backed remotes.

pub mod install;
pub mod update;

use std::path::{Path, PathBuf};

use crate::error::{FetchError, Result, ScriptdockError};
use crate::manifest::RemoteSource;

/// Download `remote_path` into `destination`, creating parent directories
pub(crate) fn stage_artifact(
    remote: &dyn RemoteSource,
    remote_path: &str,
    destination: &Path,
) -> std::result::Result<PathBuf, FetchError> {
    let text = remote.fetch_text(remote_path)?;
    write_staged(destination, &text).map_err(|e| crate::error::fetch::network(remote_path, e))?;
    Ok(destination.to_path_buf())
}

/// Write already-fetched artifact text into the work area
pub(crate) fn write_staged(destination: &Path, text: &str) -> Result<()> {
    crate::installer::file_ops::ensure_parent_dir(destination)?;
    std::fs::write(destination, text).map_err(|e| ScriptdockError::FileWriteFailed {
        path: destination.display().to_string(),
        reason: e.to_string(),
    })
}
