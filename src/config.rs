//! Bootstrap settings
//!
//! All names and relative paths the bootstrap needs to find, install and hand off to
//! the framework package live here. There is no configuration file; components take a
//! `&Settings` so tests can point them elsewhere.

use std::path::{Path, PathBuf};

use crate::package::ManagerKind;

/// Name of the manifest file written at project root
pub const MANIFEST_FILE: &str = "package.json";

/// Directory the package managers install into
pub const MODULES_DIR: &str = "node_modules";

/// Bootstrap settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Framework package installed and delegated to
    pub package: String,
    /// Human-readable product name used in messages
    pub display_name: String,
    /// Entry module path relative to the installed package directory
    pub entry: PathBuf,
    /// Manager used when the alternate one is unavailable or `--npm` is given
    pub default_manager: ManagerKind,
    /// Faster manager preferred when present
    pub alternate_manager: ManagerKind,
    /// Package providing the project generators
    pub generator_package: String,
    /// Runtime program that loads the entry module and generators
    pub runtime: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            package: "reazy".to_string(),
            display_name: "Reazy".to_string(),
            entry: PathBuf::from("dist").join("cli.js"),
            default_manager: ManagerKind::Npm,
            alternate_manager: ManagerKind::Yarn,
            generator_package: "generator-reazy".to_string(),
            runtime: "node".to_string(),
        }
    }
}

impl Settings {
    /// Directory of the installed framework package under `root`
    pub fn package_dir(&self, root: &Path) -> PathBuf {
        root.join(MODULES_DIR).join(&self.package)
    }

    /// Path of the framework's entry module under `root`
    pub fn entry_path(&self, root: &Path) -> PathBuf {
        self.package_dir(root).join(&self.entry)
    }

    /// Path of the installed framework package's own manifest
    pub fn package_manifest_path(&self, root: &Path) -> PathBuf {
        self.package_dir(root).join(MANIFEST_FILE)
    }

    /// Directory holding the individual generators
    pub fn generators_dir(&self, root: &Path) -> PathBuf {
        root.join(MODULES_DIR)
            .join(&self.generator_package)
            .join("generators")
    }
}
