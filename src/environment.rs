//! Deployment environment resolution
//!
//! scriptdock installs into one of two parallel roots. Running from inside the
//! development root binds the development tree; everything else binds the
//! production tree.

use std::fmt;
use std::path::{Path, PathBuf};

/// Fixed development root. Also the placeholder path embedded in the entrypoint.
pub const DEFAULT_DEV_ROOT: &str = "/opt/scriptdock-dev";

/// Fixed production root
pub const DEFAULT_PROD_ROOT: &str = "/opt/scriptdock";

/// Name of the scripts subdirectory under either root
pub const SCRIPTS_DIR: &str = "scripts";

/// Overrides the development root
pub const DEV_ROOT_ENV: &str = "SCRIPTDOCK_DEV_ROOT";

/// Overrides the production root
pub const PROD_ROOT_ENV: &str = "SCRIPTDOCK_PROD_ROOT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Development => write!(f, "development"),
            Mode::Production => write!(f, "production"),
        }
    }
}

/// The two candidate roots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    pub development: PathBuf,
    pub production: PathBuf,
}

impl Roots {
    pub fn new(development: impl Into<PathBuf>, production: impl Into<PathBuf>) -> Self {
        Self {
            development: development.into(),
            production: production.into(),
        }
    }

    /// Fixed roots, honouring `SCRIPTDOCK_DEV_ROOT` / `SCRIPTDOCK_PROD_ROOT`
    pub fn from_env() -> Self {
        let development = std::env::var_os(DEV_ROOT_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_DEV_ROOT), PathBuf::from);
        let production = std::env::var_os(PROD_ROOT_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_PROD_ROOT), PathBuf::from);
        Self::new(development, production)
    }
}

impl Default for Roots {
    fn default() -> Self {
        Self::new(DEFAULT_DEV_ROOT, DEFAULT_PROD_ROOT)
    }
}

/// Resolved once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentContext {
    mode: Mode,
    install_root: PathBuf,
    scripts_root: PathBuf,
}

impl EnvironmentContext {
    fn bind(mode: Mode, root: &Path) -> Self {
        Self {
            mode,
            install_root: root.to_path_buf(),
            scripts_root: root.join(SCRIPTS_DIR),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn install_root(&self) -> &Path {
        &self.install_root
    }

    pub fn scripts_root(&self) -> &Path {
        &self.scripts_root
    }
}

/// Resolve the environment for the current process
pub fn resolve() -> EnvironmentContext {
    let cwd = std::env::current_dir().ok();
    resolve_from(cwd.as_deref(), &Roots::from_env())
}

/// Resolve the environment for an explicit working directory.
///
/// Production is the default: an unknown working directory, or one outside the
/// development root, binds production.
pub fn resolve_from(cwd: Option<&Path>, roots: &Roots) -> EnvironmentContext {
    let in_development = cwd.is_some_and(|dir| {
        let dir = canonical_or_raw(dir);
        let dev = canonical_or_raw(&roots.development);
        dir.starts_with(&dev)
    });

    let context = if in_development {
        EnvironmentContext::bind(Mode::Development, &roots.development)
    } else {
        EnvironmentContext::bind(Mode::Production, &roots.production)
    };

    tracing::debug!(
        mode = %context.mode,
        install_root = %context.install_root.display(),
        "resolved environment"
    );
    context
}

fn canonical_or_raw(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
