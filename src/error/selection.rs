//! Interactive selection errors

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum SelectionError {
    #[error("Selection finished without any scripts selected")]
    #[diagnostic(
        code(scriptdock::selection::empty),
        help("Select at least one script, or exit to cancel the installation")
    )]
    EmptySelection,

    #[error("Unexpected action '{action}' while in the {stage} stage")]
    #[diagnostic(code(scriptdock::selection::unexpected_action))]
    UnexpectedAction { stage: String, action: String },

    #[error("Selection interrupted")]
    #[diagnostic(code(scriptdock::selection::interrupted))]
    Interrupted,

    #[error("Prompt failed: {message}")]
    #[diagnostic(
        code(scriptdock::selection::prompt),
        help("Interactive selection needs a terminal. Use --all for unattended installs")
    )]
    Prompt { message: String },
}

impl From<inquire::InquireError> for SelectionError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationInterrupted => SelectionError::Interrupted,
            other => SelectionError::Prompt {
                message: other.to_string(),
            },
        }
    }
}
