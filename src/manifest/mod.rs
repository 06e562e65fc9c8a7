//! Remote component catalog
//!
//! The manifest is a JSON document:
//!
//! ```json
//! {
//!   "generated_date": "2025-01-31",
//!   "scripts": [
//!     { "name": "backup.sh", "path": "scripts/backup.sh", "rank": "Featured", "description": "..." }
//!   ]
//! }
//! ```
//!
//! Entries whose `path` lives under `scripts/` form the Full subset. Full
//! entries whose `rank` mentions "Featured" form the Featured subset.

pub mod remote;

pub use remote::{
    DEFAULT_BASE_URL, DEFAULT_MANIFEST_URL, DirectoryRemote, HttpRemote, RemoteSource, fetch,
    load_catalog,
};

use std::collections::HashSet;
use std::path::{self, Path};

use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::error::fetch as fetch_error;
use crate::installer::ENTRYPOINT_NAME;

/// Rank substring that promotes an entry into the Featured subset
pub const FEATURED_MARKER: &str = "Featured";

/// Path substring that marks an entry as an installable script
pub const SCRIPTS_MARKER: &str = "scripts/";

/// A single installable script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub description: String,
}

impl Component {
    pub fn is_featured(&self) -> bool {
        self.rank.contains(FEATURED_MARKER)
    }

    pub fn is_script(&self) -> bool {
        self.path.contains(SCRIPTS_MARKER)
    }
}

/// Raw manifest document as served
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub generated_date: String,
    pub scripts: Vec<Component>,
}

/// Catalog for one run, in manifest order
#[derive(Debug, Clone)]
pub struct Catalog {
    generated_date: String,
    components: Vec<Component>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names and names that are not
    /// plain file names
    pub fn new(generated_date: impl Into<String>, components: Vec<Component>) -> Result<Self, String> {
        let mut seen = HashSet::new();
        for component in &components {
            if component.name.trim().is_empty() {
                return Err(format!("entry with path '{}' has no name", component.path));
            }
            if !is_plain_file_name(&component.name) {
                return Err(format!(
                    "script name '{}' must be a single file name",
                    component.name
                ));
            }
            if component.name == ENTRYPOINT_NAME {
                return Err(format!(
                    "script name '{ENTRYPOINT_NAME}' is reserved for the entrypoint"
                ));
            }
            if !seen.insert(component.name.as_str()) {
                return Err(format!("duplicate script name '{}'", component.name));
            }
        }

        Ok(Self {
            generated_date: generated_date.into(),
            components,
        })
    }

    /// Parse a manifest body fetched from `url`
    pub fn parse(url: &str, body: &str) -> Result<Self, FetchError> {
        let manifest: Manifest =
            serde_json::from_str(body).map_err(|e| fetch_error::parse(url, e))?;
        Self::new(manifest.generated_date, manifest.scripts).map_err(|e| fetch_error::parse(url, e))
    }

    /// Validate a complete HTTP response: status must be 200 and the body well-formed
    pub fn from_response(url: &str, status: u16, body: &str) -> Result<Self, FetchError> {
        if status != 200 {
            return Err(fetch_error::http_status(url, status));
        }
        Self::parse(url, body)
    }

    pub fn generated_date(&self) -> &str {
        &self.generated_date
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Installable scripts, in catalog order
    pub fn full(&self) -> Vec<&Component> {
        self.components.iter().filter(|c| c.is_script()).collect()
    }

    /// Featured scripts, in catalog order; always a subset of [`Catalog::full`]
    pub fn featured(&self) -> Vec<&Component> {
        self.components
            .iter()
            .filter(|c| c.is_script() && c.is_featured())
            .collect()
    }

    /// Snapshot back into manifest form
    pub fn to_manifest(&self) -> Manifest {
        Manifest {
            generated_date: self.generated_date.clone(),
            scripts: self.components.clone(),
        }
    }
}

/// Names become file names under the scripts root: exactly one normal component
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(path::Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}
