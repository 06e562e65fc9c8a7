//! Artifact header parsing
//!
//! Scripts may carry `# Description: ...` and `# Version: x.y.z` comment
//! markers near the top of the file. Markers are matched case-insensitively
//! after stripping any leading `#` and whitespace.

use super::Version;

/// Only this many leading lines are scanned for markers
pub const HEADER_LINES: usize = 20;

/// Description used when an artifact has no `Description:` marker
pub const DEFAULT_DESCRIPTION: &str = "No description available";

const VERSION_MARKER: &str = "version:";
const DESCRIPTION_MARKER: &str = "description:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactHeader {
    pub description: String,
    pub version: Option<Version>,
}

/// Read the version marker; `None` if absent or malformed
pub fn parse_version(text: &str) -> Option<Version> {
    let raw = find_marker(text, VERSION_MARKER)?;
    Version::parse(raw.split_whitespace().next()?)
}

/// Read both markers, falling back to [`DEFAULT_DESCRIPTION`]
pub fn parse_header(text: &str) -> ArtifactHeader {
    let description = find_marker(text, DESCRIPTION_MARKER)
        .filter(|d| !d.is_empty())
        .map_or_else(|| DEFAULT_DESCRIPTION.to_string(), str::to_string);

    ArtifactHeader {
        description,
        version: parse_version(text),
    }
}

fn find_marker<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    text.lines().take(HEADER_LINES).find_map(|line| {
        let body = line.trim_start_matches(|c: char| c == '#' || c.is_whitespace());
        let head = body.get(..marker.len())?;
        if head.eq_ignore_ascii_case(marker) {
            Some(body[marker.len()..].trim())
        } else {
            None
        }
    })
}
