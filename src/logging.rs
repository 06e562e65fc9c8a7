//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout stays reserved for reports.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter directive
pub const LOG_ENV: &str = "SCRIPTDOCK_LOG";

const DEFAULT_DIRECTIVE: &str = "scriptdock=warn";
const VERBOSE_DIRECTIVE: &str = "scriptdock=debug";

/// Pick the filter directive: `-v` wins, then `SCRIPTDOCK_LOG`, then the default
pub fn directive(verbose: bool, from_env: Option<String>) -> String {
    if verbose {
        return VERBOSE_DIRECTIVE.to_string();
    }
    from_env
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

pub fn init(verbose: bool) {
    let directive = directive(verbose, std::env::var(LOG_ENV).ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
