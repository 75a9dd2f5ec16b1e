//! Project scaffolding
//!
//! Everything here happens before any package manager runs: the name is validated,
//! an existing directory is only reused after confirmation, and the manifest is
//! written. A failed install later still leaves this scaffold on disk.

pub mod manifest;
pub mod name;
pub mod prompt;

use std::path::{Path, PathBuf};

pub use manifest::Manifest;
pub use prompt::{Confirm, TerminalPrompt};

use crate::error::Result;

/// Resolved project directory and the name derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    pub path: PathBuf,
    pub name: String,
}

/// Result of preparing a project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prepared {
    Ready(ProjectRoot),
    /// User declined to reuse an existing directory; nothing was touched
    Cancelled,
}

/// Where the project goes: `None` or `.` means `cwd` itself
pub fn target_dir(cwd: &Path, requested: Option<&str>) -> Result<PathBuf> {
    match requested {
        None | Some(".") => Ok(cwd.to_path_buf()),
        Some(requested) => {
            name::validate(requested)?;
            Ok(cwd.join(requested))
        }
    }
}

/// Validate, confirm, create the directory and write the manifest.
///
/// A named directory that already exists, or a current directory that is not empty,
/// is only reused after confirmation.
pub fn prepare(cwd: &Path, requested: Option<&str>, prompt: &dyn Confirm) -> Result<Prepared> {
    let target = target_dir(cwd, requested)?;
    let named = target != cwd;

    let occupied = if named {
        target.exists()
    } else {
        std::fs::read_dir(&target)?.next().is_some()
    };

    if occupied {
        let dir_name = match requested {
            Some(name) if named => name.to_string(),
            _ => base_name(&target),
        };
        let message = format!("Directory {dir_name} already exists. Continue?");
        if !prompt.confirm(&message)? {
            println!("Project initialization canceled");
            return Ok(Prepared::Cancelled);
        }
    }

    std::fs::create_dir_all(&target)?;
    let path = dunce::canonicalize(&target)?;
    let name = base_name(&path);

    tracing::debug!("scaffolding {name} in {}", path.display());
    Manifest::new(&name).write(&path)?;

    Ok(Prepared::Ready(ProjectRoot { path, name }))
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("app")
        .to_string()
}
