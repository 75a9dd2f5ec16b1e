//! Init command implementation
//!
//! The bootstrap protocol for a new project:
//! 1. Validate the name and scaffold the directory with its manifest
//! 2. Move into the project
//! 3. Pick a package manager and resolve what to install
//! 4. Install the framework package (fatal on failure, no retry)
//! 5. Warn when the installed package wants another Node version
//! 6. Locate the freshly installed CLI and call its `init`

use std::path::Path;

use crate::compat;
use crate::config::Settings;
use crate::delegate::{self, DelegateTarget};
use crate::error::Result;
use crate::installer::{ManagerInstaller, PackageInstaller};
use crate::invocation::Invocation;
use crate::package::PackageManager;
use crate::probe::Probe;
use crate::project::{self, Prepared, ProjectRoot, TerminalPrompt};

pub fn run(
    settings: &Settings,
    cwd: &Path,
    invocation: &Invocation,
    name: Option<&str>,
    template: Option<&str>,
) -> Result<i32> {
    println!(
        "This will walk you through creating a new {} project",
        settings.display_name
    );

    let root = match project::prepare(cwd, name, &TerminalPrompt)? {
        Prepared::Ready(root) => root,
        Prepared::Cancelled => return Ok(0),
    };
    std::env::set_current_dir(&root.path)?;

    let manager = PackageManager::select(
        settings.default_manager,
        settings.alternate_manager,
        invocation.npm,
    )?;
    let installer = ManagerInstaller::new(manager);

    let request = InstallRequest {
        base: cwd,
        version: invocation.version_override(),
        verbose: invocation.verbose,
        template,
    };
    finish(settings, &root, &installer, &request, |root| {
        delegate::locate(settings, root)
    })
}

/// What the user asked to install and how
#[derive(Debug, Clone, Copy)]
pub struct InstallRequest<'a> {
    /// Directory relative `--version` paths are resolved against
    pub base: &'a Path,
    pub version: Option<&'a str>,
    pub verbose: bool,
    pub template: Option<&'a str>,
}

/// Install into a prepared project and hand it to the installed CLI.
///
/// `load` locates the delegate target; it runs only after a successful install.
pub fn finish<F>(
    settings: &Settings,
    root: &ProjectRoot,
    installer: &dyn PackageInstaller,
    request: &InstallRequest<'_>,
    load: F,
) -> Result<i32>
where
    F: FnOnce(&Path) -> Box<dyn DelegateTarget>,
{
    let spec = installer.specifier(&settings.package, request.version, request.base);
    println!("Installing {spec}...");
    installer.install(&root.path, &spec, request.verbose)?;

    let runtime = Probe::run(&settings.runtime);
    compat::warn_if_unsupported(
        &settings.package_manifest_path(&root.path),
        runtime.version(),
        &settings.display_name,
    );

    let target = load(&root.path);
    target.init(&root.path, &root.name, request.template)
}
