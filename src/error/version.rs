//! Version reading errors
//!
//! These never abort a run; the updater records them and skips the component.

use std::fmt;

use thiserror::Error;

/// Which copy of an artifact a version was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Local,
    Remote,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Local => write!(f, "local"),
            Side::Remote => write!(f, "remote"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("no parsable Version: marker in the {side} copy of '{component}'")]
    Unparsable { component: String, side: Side },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsable_message() {
        let err = VersionError::Unparsable {
            component: "cleanup.sh".to_string(),
            side: Side::Remote,
        };
        assert_eq!(
            err.to_string(),
            "no parsable Version: marker in the remote copy of 'cleanup.sh'"
        );
    }
}
