//! Package manager selection
//!
//! Yarn is preferred when it answers `yarn --version`; npm is used otherwise or when
//! `--npm` is given. The check runs on every invocation.

use std::path::PathBuf;

use crate::error::{Result, install};
use crate::probe::Probe;

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerKind {
    Npm,
    Yarn,
}

impl ManagerKind {
    /// Executable name looked up on `PATH`
    pub fn program(self) -> &'static str {
        match self {
            ManagerKind::Npm => "npm",
            ManagerKind::Yarn => "yarn",
        }
    }

    /// Arguments placed before the package specifier
    pub fn install_args(self) -> &'static [&'static str] {
        match self {
            ManagerKind::Npm => &["install", "--save"],
            ManagerKind::Yarn => &["add"],
        }
    }

    /// Flag pinning the exact resolved version in the project manifest
    pub fn exact_flag(self) -> &'static str {
        match self {
            ManagerKind::Npm => "--save-exact",
            ManagerKind::Yarn => "--exact",
        }
    }

    /// Whether local paths should be rewritten as `file:` references
    pub fn wants_file_references(self) -> bool {
        matches!(self, ManagerKind::Yarn)
    }
}

/// A package manager found on this machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    pub kind: ManagerKind,
    pub program: PathBuf,
    /// Version reported by the probe, when the manager was probed
    pub version: Option<String>,
}

impl PackageManager {
    /// Pick the manager for this run.
    ///
    /// `force_default` skips probing the alternate manager entirely.
    pub fn select(
        default: ManagerKind,
        alternate: ManagerKind,
        force_default: bool,
    ) -> Result<Self> {
        let alternate_probe = if force_default {
            Probe::Unavailable
        } else {
            Probe::run(alternate.program())
        };
        Self::choose(default, alternate, alternate_probe)
    }

    fn choose(default: ManagerKind, alternate: ManagerKind, alternate_probe: Probe) -> Result<Self> {
        if let Probe::Available { program, version } = alternate_probe {
            tracing::debug!("using {} {version}", alternate.program());
            return Ok(Self {
                kind: alternate,
                program,
                version: Some(version),
            });
        }

        let program = which::which(default.program())
            .map_err(|_| install::manager_not_found(default.program()))?;
        tracing::debug!("using {} at {}", default.program(), program.display());
        Ok(Self {
            kind: default,
            program,
            version: None,
        })
    }
}
