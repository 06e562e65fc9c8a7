//! Blocking HTTP access to the manifest and script artifacts
//!
//! Every request is a single attempt. Status and body are captured together
//! so a non-200 answer is reported as such rather than as a parse failure.

use std::path::PathBuf;
use std::time::Duration;

use super::Catalog;
use crate::error::FetchError;
use crate::error::fetch as fetch_error;

/// Default manifest location
pub const DEFAULT_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/scriptdock/catalog/main/manifest.json";

/// Default raw base URL that artifact paths are joined to
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/scriptdock/catalog/main";

const USER_AGENT: &str = concat!("scriptdock/", env!("CARGO_PKG_VERSION"));

/// Where artifact text comes from
pub trait RemoteSource {
    /// Fetch an artifact by its catalog-relative path (e.g. `scripts/foo.sh`)
    fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}

/// Artifact source over HTTP
pub struct HttpRemote {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpRemote {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| fetch_error::network(&base_url, e))?;

        Ok(Self { client, base_url })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET `url`, returning status and body together
    fn get(&self, url: &str) -> Result<(u16, String), FetchError> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| fetch_error::network(url, e))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| fetch_error::network(url, e))?;
        tracing::debug!(url, status, bytes = body.len(), "response");
        Ok((status, body))
    }

    /// Fetch and validate the catalog
    pub fn fetch_catalog(&self, url: &str) -> Result<Catalog, FetchError> {
        let (status, body) = self.get(url)?;
        Catalog::from_response(url, status, &body)
    }
}

impl RemoteSource for HttpRemote {
    fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url_for(path);
        let (status, body) = self.get(&url)?;
        if status != 200 {
            return Err(fetch_error::http_status(url, status));
        }
        Ok(body)
    }
}

/// Fetch the catalog at `url` with a fresh client
pub fn fetch(url: &str) -> Result<Catalog, FetchError> {
    HttpRemote::new(url)?.fetch_catalog(url)
}

/// Artifact source over a local checkout of the catalog repository
pub struct DirectoryRemote {
    root: PathBuf,
}

impl DirectoryRemote {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RemoteSource for DirectoryRemote {
    fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let file = self.root.join(path.trim_start_matches('/'));
        std::fs::read_to_string(&file).map_err(|e| fetch_error::not_found(file.display().to_string(), e))
    }
}

/// Whether `location` should be fetched over HTTP rather than read from disk
pub fn is_http(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Load the catalog from a URL or a local manifest file
pub fn load_catalog(location: &str) -> Result<Catalog, FetchError> {
    let catalog = if is_http(location) {
        fetch(location)?
    } else {
        let body =
            std::fs::read_to_string(location).map_err(|e| fetch_error::not_found(location, e))?;
        Catalog::parse(location, &body)?
    };
    tracing::debug!(
        location,
        generated = catalog.generated_date(),
        entries = catalog.components().len(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Open an artifact source for a base URL or a local directory
pub fn open(base: &str) -> Result<Box<dyn RemoteSource>, FetchError> {
    if is_http(base) {
        Ok(Box::new(HttpRemote::new(base)?))
    } else {
        Ok(Box::new(DirectoryRemote::new(base)))
    }
}
