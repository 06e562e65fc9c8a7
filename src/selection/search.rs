//! Market search
//!
//! Searches always run against the Full subset, so a search that matched
//! nothing never traps later searches in an empty list.

use crate::manifest::Component;

/// Indices of components whose name or description contains `term`,
/// ignoring case. Order follows `full`.
pub fn filter(full: &[&Component], term: &str) -> Vec<usize> {
    let needle = term.to_lowercase();
    full.iter()
        .enumerate()
        .filter(|(_, c)| {
            c.name.to_lowercase().contains(&needle)
                || c.description.to_lowercase().contains(&needle)
        })
        .map(|(i, _)| i)
        .collect()
}
