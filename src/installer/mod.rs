//! Framework package installation
//!
//! The installer hands a resolved [`PackageSpecifier`] to the selected package manager
//! and waits for it. There is no retry: a failed install ends the run.

mod command;

pub use command::InstallCommand;

use std::path::Path;

use crate::error::Result;
use crate::package::{PackageManager, PackageSpecifier};

/// Installs a package into a project root
pub trait PackageInstaller {
    /// Resolve what `requested` means for this installer
    fn specifier(&self, package: &str, requested: Option<&str>, root: &Path) -> PackageSpecifier;

    /// Install `spec` into `root`, blocking until the package manager exits
    fn install(&self, root: &Path, spec: &PackageSpecifier, verbose: bool) -> Result<()>;
}

/// Installer backed by a real package manager executable
#[derive(Debug, Clone)]
pub struct ManagerInstaller {
    manager: PackageManager,
}

impl ManagerInstaller {
    pub fn new(manager: PackageManager) -> Self {
        Self { manager }
    }
}

impl PackageInstaller for ManagerInstaller {
    fn specifier(&self, package: &str, requested: Option<&str>, root: &Path) -> PackageSpecifier {
        PackageSpecifier::resolve(
            package,
            requested,
            self.manager.kind.wants_file_references(),
            root,
        )
    }

    fn install(&self, root: &Path, spec: &PackageSpecifier, verbose: bool) -> Result<()> {
        if let Some(version) = &self.manager.version {
            tracing::debug!("{} {version}", self.manager.kind.program());
        }
        let command = InstallCommand::compose(&self.manager, spec, verbose);
        command.run(root, &spec.to_string())
    }
}
