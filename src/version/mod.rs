//! Dotted-triplet versions and local/remote comparison
//!
//! Versions are `major.minor.patch`; missing trailing components count as 0,
//! so `1.2` and `1.2.0` are the same version.

pub mod header;

pub use header::{ArtifactHeader, DEFAULT_DESCRIPTION, parse_header, parse_version};

use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `1`, `1.2`, `1.2.3` (optionally prefixed with `v`).
    ///
    /// Returns `None` for empty input, non-numeric components, or more than
    /// three components.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let text = text
            .strip_prefix('v')
            .or_else(|| text.strip_prefix('V'))
            .unwrap_or(text);
        if text.is_empty() {
            return None;
        }

        let mut parts = [0u64; 3];
        for (i, token) in text.split('.').enumerate() {
            if i >= parts.len() || token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            parts[i] = token.parse().ok()?;
        }

        Some(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// How the local copy relates to the remote one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Local is ahead of remote
    Newer,
    /// Local is behind remote; an update is due
    Older,
    Equal,
}

/// Compare from the local copy's point of view
pub fn compare(local: &Version, remote: &Version) -> Comparison {
    match local.cmp(remote) {
        Ordering::Greater => Comparison::Newer,
        Ordering::Less => Comparison::Older,
        Ordering::Equal => Comparison::Equal,
    }
}

/// Compare two version strings; `None` when either side is unparsable
#[cfg(test)]
pub fn compare_str(local: &str, remote: &str) -> Option<Comparison> {
    Some(compare(&Version::parse(local)?, &Version::parse(remote)?))
}
