//! Error types and handling for scriptdock
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fetch`]: Manifest and artifact download errors
//! - [`selection`]: Interactive selection errors
//! - [`install`]: Install executor errors
//! - [`version`]: Version reading errors (never fatal)

pub mod fetch;
pub mod install;
pub mod selection;
pub mod version;

pub use fetch::FetchError;
pub use install::InstallError;
pub use selection::SelectionError;
pub use version::VersionError;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for scriptdock operations
#[derive(Error, Diagnostic, Debug)]
pub enum ScriptdockError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Install(#[from] InstallError),

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(scriptdock::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(scriptdock::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(scriptdock::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ScriptdockError {
    fn from(err: std::io::Error) -> Self {
        ScriptdockError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ScriptdockError {
    fn from(err: serde_json::Error) -> Self {
        ScriptdockError::IoError {
            message: format!("Failed to serialize snapshot: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ScriptdockError>;
