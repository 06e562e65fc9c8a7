//! Command implementations for the scriptdock CLI

pub mod completions;
pub mod install;
pub mod list;
pub mod update;
pub mod version;

/// Where the catalog and its artifacts come from, as configured on the CLI
#[derive(Debug, Clone)]
pub struct CatalogLocation {
    pub manifest_url: String,
    pub base_url: String,
}
