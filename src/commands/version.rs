//! Version command implementation

use std::path::Path;

use crate::compat::InstalledPackage;
use crate::config::Settings;
use crate::error::Result;

/// Print this tool's version and the project's installed Reazy version
pub fn run(settings: &Settings, cwd: &Path) -> Result<i32> {
    println!("{}-cli: {}", settings.package, env!("CARGO_PKG_VERSION"));
    println!("{}", installed_line(settings, cwd));
    Ok(0)
}

fn installed_line(settings: &Settings, cwd: &Path) -> String {
    match InstalledPackage::read(&settings.package_manifest_path(cwd)) {
        Ok(InstalledPackage {
            version: Some(version),
            ..
        }) => format!("{}: {version}", settings.package),
        _ => format!(
            "{}: n/a - not inside a {} project directory",
            settings.package, settings.display_name
        ),
    }
}
