//! Manifest and artifact download errors

use miette::Diagnostic;
use thiserror::Error;

/// A single remote fetch failed. Fetches are never retried.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request to {url} failed: {reason}")]
    #[diagnostic(
        code(scriptdock::fetch::network),
        help("Check your network connection and the configured URL")
    )]
    Network { url: String, reason: String },

    #[error("Request to {url} returned HTTP {status}")]
    #[diagnostic(
        code(scriptdock::fetch::http_status),
        help("The server answered, but not with 200 OK. Is the URL correct?")
    )]
    HttpStatus { url: String, status: u16 },

    #[error("Cannot read {path}: {reason}")]
    #[diagnostic(
        code(scriptdock::fetch::not_found),
        help("Check the local catalog path passed via --manifest-url / --base-url")
    )]
    NotFound { path: String, reason: String },

    #[error("Malformed catalog from {url}: {reason}")]
    #[diagnostic(code(scriptdock::fetch::parse))]
    Parse { url: String, reason: String },
}

/// Creates a network error
pub fn network(url: impl Into<String>, reason: impl ToString) -> FetchError {
    FetchError::Network {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates an HTTP status error
pub fn http_status(url: impl Into<String>, status: u16) -> FetchError {
    FetchError::HttpStatus {
        url: url.into(),
        status,
    }
}

/// Creates a local-file read error
pub fn not_found(path: impl Into<String>, reason: impl ToString) -> FetchError {
    FetchError::NotFound {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a parse error
pub fn parse(url: impl Into<String>, reason: impl ToString) -> FetchError {
    FetchError::Parse {
        url: url.into(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message() {
        let err = http_status("https://example.com/manifest.json", 503);
        assert_eq!(
            err.to_string(),
            "Request to https://example.com/manifest.json returned HTTP 503"
        );
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes: Vec<String> = [
            network("u", "refused"),
            http_status("u", 500),
            not_found("u", "missing"),
            parse("u", "eof"),
        ]
        .iter()
        .filter_map(|e| e.code().map(|c| c.to_string()))
        .collect();
        assert_eq!(
            codes,
            vec![
                "scriptdock::fetch::network",
                "scriptdock::fetch::http_status",
                "scriptdock::fetch::not_found",
                "scriptdock::fetch::parse"
            ]
        );
    }
}
