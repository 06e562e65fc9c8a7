//! Install executor errors

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum InstallError {
    #[error("No scripts were selected for installation")]
    #[diagnostic(code(scriptdock::install::no_selection))]
    NoSelection,

    #[error("Failed to install '{component}': {reason}")]
    #[diagnostic(code(scriptdock::install::copy_failed))]
    CopyFailed { component: String, reason: String },

    #[error("None of the {attempted} selected script(s) could be installed")]
    #[diagnostic(
        code(scriptdock::install::all_failed),
        help("Run with --verbose to see why each script was skipped")
    )]
    AllFailed { attempted: usize },

    #[error("Installation could not be verified: {path} contains no files")]
    #[diagnostic(code(scriptdock::install::verification_failed))]
    VerificationFailed { path: String },
}

/// Creates a copy failure for one component
pub fn copy_failed(component: impl Into<String>, reason: impl ToString) -> InstallError {
    InstallError::CopyFailed {
        component: component.into(),
        reason: reason.to_string(),
    }
}
