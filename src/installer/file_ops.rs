//! Basic file operations for script installation
//!
//! This module handles low-level file operations:
//! - Directory creation (ensure_parent_dir)
//! - Plain copies (copy_file)
//! - Copies with a textual path rewrite (copy_rewriting)
//! - Executable permission bits (make_executable)

use std::path::Path;

use crate::error::{Result, ScriptdockError};

fn file_read_error(path: &Path, e: &std::io::Error) -> ScriptdockError {
    ScriptdockError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn file_write_error(path: &Path, e: &std::io::Error) -> ScriptdockError {
    ScriptdockError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| file_write_error(parent, &e))?;
    }
    Ok(())
}

/// Copy `source` over `target`, creating parent directories
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    ensure_parent_dir(target)?;
    std::fs::copy(source, target)
        .map_err(|e| file_write_error(target, &e))
        .map(|_| ())
}

/// Copy a text file, replacing every occurrence of `from` with `to`
pub fn copy_rewriting(source: &Path, target: &Path, from: &str, to: &str) -> Result<()> {
    let content = std::fs::read_to_string(source).map_err(|e| file_read_error(source, &e))?;
    let rewritten = content.replace(from, to);
    ensure_parent_dir(target)?;
    std::fs::write(target, rewritten).map_err(|e| file_write_error(target, &e))
}

/// Add read/execute bits for everyone, keeping existing bits
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path).map_err(|e| file_read_error(path, &e))?;
    let mut permissions = metadata.permissions();
    permissions.set_mode(permissions.mode() | 0o755);
    std::fs::set_permissions(path, permissions).map_err(|e| file_write_error(path, &e))
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Whether any execute bit is set
#[cfg(all(test, unix))]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path).is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(all(test, not(unix)))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}
