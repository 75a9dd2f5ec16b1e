//! Capability probes for external executables
//!
//! A probe looks the program up on `PATH`, runs it with a version flag and reports
//! whether it answered. Probes are never cached; every run asks again.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Outcome of probing an external program
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// Program is missing, failed to start, or exited unsuccessfully
    Unavailable,
    /// Program answered with this version string
    Available { program: PathBuf, version: String },
}

impl Probe {
    /// Probe `program` by running `program --version` with stderr suppressed
    pub fn run(program: &str) -> Self {
        match which::which(program) {
            Ok(path) => Self::run_path(&path),
            Err(e) => {
                tracing::debug!("{program} not found on PATH: {e}");
                Probe::Unavailable
            }
        }
    }

    /// Probe an already resolved executable
    pub fn run_path(path: &Path) -> Self {
        let output = Command::new(path)
            .arg("--version")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match output {
            Ok(output) if output.status.success() => {
                let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if version.is_empty() {
                    return Probe::Unavailable;
                }
                tracing::debug!("{} --version: {version}", path.display());
                Probe::Available {
                    program: path.to_path_buf(),
                    version,
                }
            }
            Ok(output) => {
                tracing::debug!("{} --version exited with {}", path.display(), output.status);
                Probe::Unavailable
            }
            Err(e) => {
                tracing::debug!("failed to run {}: {e}", path.display());
                Probe::Unavailable
            }
        }
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            Probe::Available { version, .. } => Some(version),
            Probe::Unavailable => None,
        }
    }
}
