//! Per-run temporary work area
//!
//! Holds the fetched catalog snapshot, the frozen selection and downloaded
//! artifacts. The directory is removed when the [`WorkArea`] is dropped, and
//! by the interrupt handler if the process is signalled first.

use std::env;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::TempDir;

use crate::error::{Result, ScriptdockError};
use crate::interrupt;

/// Returns a directory path suitable for creating temporary directories.
/// Never returns a relative path, so temp dirs are never created under the current working
/// directory (avoids ./tmp when TMPDIR=tmp).
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Scoped temporary directory owned by the current run
pub struct WorkArea {
    dir: TempDir,
}

impl WorkArea {
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("scriptdock-")
            .tempdir_in(temp_dir_base())
            .map_err(|e| ScriptdockError::FileWriteFailed {
                path: temp_dir_base().display().to_string(),
                reason: e.to_string(),
            })?;
        interrupt::register_cleanup(dir.path());
        tracing::debug!(path = %dir.path().display(), "created work area");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Serialize `value` as pretty JSON into the work area
    pub fn write_snapshot<T: Serialize>(&self, file_name: &str, value: &T) -> Result<PathBuf> {
        let path = self.dir.path().join(file_name);
        let json = serde_json::to_string_pretty(value)?;
        std::fs::write(&path, json).map_err(|e| ScriptdockError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(path)
    }
}

impl Drop for WorkArea {
    fn drop(&mut self) {
        interrupt::clear_cleanup(self.dir.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_temp_dir_base_is_absolute() {
        assert!(temp_dir_base().is_absolute());
    }

    #[test]
    #[serial]
    fn test_work_area_removed_on_drop() {
        let path = {
            let area = WorkArea::create().unwrap();
            area.write_snapshot("selection.json", &vec!["a", "b"]).unwrap();
            assert!(area.path().join("selection.json").exists());
            area.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
