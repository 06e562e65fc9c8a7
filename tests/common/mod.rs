//! Common test utilities for scriptdock integration tests
//!
//! A `TestCatalog` is a temp directory holding a local catalog checkout
//! (`catalog/manifest.json`, `catalog/scripts/*`, `catalog/scriptdock`) plus
//! the development and production roots the binary is pointed at.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ENTRYPOINT: &str = "scriptdock";

pub struct TestCatalog {
    pub temp: TempDir,
    /// Path to the temp root
    pub path: PathBuf,
    entries: Vec<serde_json::Value>,
}

impl TestCatalog {
    /// Create an empty catalog with an entrypoint at version 0.0.1
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let catalog = Self {
            temp,
            path,
            entries: Vec::new(),
        };
        std::fs::create_dir_all(catalog.dev_root()).expect("Failed to create dev root");
        catalog.write_entrypoint("0.0.1");
        catalog.write_manifest();
        catalog
    }

    pub fn catalog_dir(&self) -> PathBuf {
        self.path.join("catalog")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.catalog_dir().join("manifest.json")
    }

    pub fn dev_root(&self) -> PathBuf {
        self.path.join("dev")
    }

    pub fn prod_root(&self) -> PathBuf {
        self.path.join("prod")
    }

    pub fn prod_scripts(&self) -> PathBuf {
        self.prod_root().join("scripts")
    }

    /// Add a script to the manifest and write its artifact
    pub fn add_script(&mut self, name: &str, rank: &str, version: &str) {
        self.add_entry(name, rank);
        self.write_file(
            &format!("catalog/scripts/{name}"),
            &script_body(&format!("{name} helper"), version),
        );
    }

    /// Add a manifest entry without writing any artifact
    pub fn add_entry(&mut self, name: &str, rank: &str) {
        self.entries.push(json!({
            "name": name,
            "path": format!("scripts/{name}"),
            "rank": rank,
            "description": format!("{name} helper"),
        }));
        self.write_manifest();
    }

    /// Add a non-script entry (docs) to the manifest
    pub fn add_document(&mut self, name: &str) {
        self.entries.push(json!({
            "name": name,
            "path": format!("docs/{name}"),
            "rank": "Featured",
            "description": "Documentation",
        }));
        self.write_file(&format!("catalog/docs/{name}"), "# docs\n");
        self.write_manifest();
    }

    pub fn write_entrypoint(&self, version: &str) {
        self.write_file(
            &format!("catalog/{ENTRYPOINT}"),
            &format!(
                "#!/bin/sh\n# Description: scriptdock entrypoint\n# Version: {version}\nROOT=/opt/scriptdock-dev\n"
            ),
        );
    }

    fn write_manifest(&self) {
        let manifest = json!({
            "generated_date": "2025-01-31",
            "scripts": self.entries,
        });
        self.write_file(
            "catalog/manifest.json",
            &serde_json::to_string_pretty(&manifest).expect("Failed to serialize manifest"),
        );
    }

    /// Pretend `name` is already installed in production at `version`
    pub fn install_locally(&self, name: &str, version: &str) {
        self.write_file(
            &format!("prod/scripts/{name}"),
            &script_body(&format!("{name} helper"), version),
        );
    }

    /// Write a file relative to the temp root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the temp root
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Sorted file names under the production scripts root
    pub fn installed(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.prod_scripts()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .map(|e| {
                e.expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .to_string()
            })
            .collect();
        names.sort();
        names
    }

    /// The binary, pointed at this catalog, run from outside the dev root
    pub fn scriptdock_cmd(&self) -> Command {
        self.scriptdock_cmd_in(&self.path)
    }

    pub fn scriptdock_cmd_in(&self, cwd: &Path) -> Command {
        let mut cmd = scriptdock_bin();
        cmd.current_dir(cwd)
            .env("SCRIPTDOCK_DEV_ROOT", self.dev_root())
            .env("SCRIPTDOCK_PROD_ROOT", self.prod_root())
            .env("SCRIPTDOCK_MANIFEST_URL", self.manifest_path())
            .env("SCRIPTDOCK_BASE_URL", self.catalog_dir())
            .env_remove("SCRIPTDOCK_LOG");
        cmd
    }
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn scriptdock_bin() -> Command {
    Command::cargo_bin("scriptdock").expect("Failed to find scriptdock binary")
}

pub fn script_body(description: &str, version: &str) -> String {
    format!("#!/bin/sh\n# Description: {description}\n# Version: {version}\necho ok\n")
}

#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}
