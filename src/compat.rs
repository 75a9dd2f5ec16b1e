//! Installed package metadata and runtime compatibility
//!
//! After an install the framework's own manifest may declare `engines.node`. A runtime
//! outside that range only earns a warning; it never stops the run.

use std::path::Path;

use console::style;
use serde::Deserialize;

use crate::error::{Result, project};

/// The parts of the installed package's manifest the bootstrap reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstalledPackage {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub engines: Option<Engines>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Engines {
    #[serde(default)]
    pub node: Option<String>,
}

impl InstalledPackage {
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| project::manifest_read_failed(path.display().to_string(), e))?;
        serde_json::from_str(&content)
            .map_err(|e| project::manifest_read_failed(path.display().to_string(), e))
    }

    /// Declared `engines.node` range, if any
    pub fn node_range(&self) -> Option<&str> {
        self.engines
            .as_ref()
            .and_then(|e| e.node.as_deref())
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

/// Outcome of comparing the runtime against a declared range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compatibility {
    Satisfied,
    Unsatisfied { required: String, current: String },
    /// Range or version could not be understood
    Unknown,
}

/// Compare a runtime version (`v18.17.0` or `18.17.0`) with an npm-style range
pub fn check(required: &str, current: &str) -> Compatibility {
    let Ok(version) = semver::Version::parse(current.trim().trim_start_matches('v')) else {
        return Compatibility::Unknown;
    };

    let mut any_parsed = false;
    for alternative in required.split("||") {
        let Some(req) = parse_range(alternative) else {
            continue;
        };
        any_parsed = true;
        if req.matches(&version) {
            return Compatibility::Satisfied;
        }
    }

    if any_parsed {
        Compatibility::Unsatisfied {
            required: required.trim().to_string(),
            current: current.trim().to_string(),
        }
    } else {
        Compatibility::Unknown
    }
}

/// Convert one npm range alternative into a `semver` requirement.
///
/// npm separates comparators with spaces, writes inclusive spans as `A - B` and allows a
/// `v` in front of versions; `semver` wants commas and bare versions.
fn parse_range(range: &str) -> Option<semver::VersionReq> {
    let tokens: Vec<&str> = range.split_whitespace().collect();

    if let [lower, "-", upper] = tokens.as_slice() {
        let span = format!(">={}, <={}", bare_version(lower), bare_version(upper));
        return semver::VersionReq::parse(&span).ok();
    }

    let mut comparators: Vec<String> = Vec::new();
    let mut pending_op: Option<&str> = None;

    for token in tokens {
        let split = token
            .find(|c: char| !matches!(c, '<' | '>' | '=' | '~' | '^'))
            .unwrap_or(token.len());
        let (op, version) = token.split_at(split);
        if version.is_empty() {
            pending_op = Some(op);
            continue;
        }
        let op = if op.is_empty() {
            // npm reads a lone version as exact, `semver` as caret
            pending_op.take().unwrap_or(if is_wildcard(version) { "" } else { "=" })
        } else {
            pending_op = None;
            op
        };
        comparators.push(format!("{op}{}", bare_version(version)));
    }

    if comparators.is_empty() {
        return None;
    }
    semver::VersionReq::parse(&comparators.join(", ")).ok()
}

fn is_wildcard(version: &str) -> bool {
    matches!(version, "*" | "x" | "X")
}

fn bare_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Print a warning when the installed package at `manifest_path` wants another runtime
pub fn warn_if_unsupported(manifest_path: &Path, runtime_version: Option<&str>, product: &str) {
    let package = match InstalledPackage::read(manifest_path) {
        Ok(package) => package,
        Err(e) => {
            tracing::debug!("skipping runtime check: {e}");
            return;
        }
    };
    let Some(required) = package.node_range() else {
        return;
    };
    let Some(current) = runtime_version else {
        tracing::debug!("skipping runtime check: node version unknown");
        return;
    };

    match check(required, current) {
        Compatibility::Satisfied => {}
        Compatibility::Unsatisfied { required, current } => {
            eprintln!(
                "{}",
                style(format!(
                    "You are currently running Node {current} but {product} requires {required}. \
                     Please use a supported version of Node.\n"
                ))
                .red()
            );
        }
        Compatibility::Unknown => {
            tracing::debug!("could not compare node {current} with range {required}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_simple_ranges() {
        assert_eq!(check(">=6", "v8.9.4"), Compatibility::Satisfied);
        assert_eq!(check("^18.0.0", "18.17.1"), Compatibility::Satisfied);
        assert!(matches!(
            check(">=20", "v18.17.1"),
            Compatibility::Unsatisfied { .. }
        ));
    }

    #[test]
    fn test_space_separated_comparators() {
        assert_eq!(check(">=6.0.0 <9", "v8.1.0"), Compatibility::Satisfied);
        assert_eq!(check(">= 6.0.0 < 9", "v8.1.0"), Compatibility::Satisfied);
        assert_eq!(
            check(">=6.0.0 <9", "v10.0.0"),
            Compatibility::Unsatisfied {
                required: ">=6.0.0 <9".to_string(),
                current: "v10.0.0".to_string(),
            }
        );
    }

    #[test]
    fn test_hyphen_ranges() {
        assert_eq!(check("6 - 8", "v8.9.4"), Compatibility::Satisfied);
        assert_eq!(check("6.0.0 - 8.1.0", "v6.0.0"), Compatibility::Satisfied);
        assert!(matches!(
            check("6 - 8", "v9.0.0"),
            Compatibility::Unsatisfied { .. }
        ));
        assert!(matches!(
            check("6 - 8", "v4.2.0"),
            Compatibility::Unsatisfied { .. }
        ));
    }

    #[test]
    fn test_v_prefixed_comparators() {
        assert_eq!(check(">=v8", "v8.1.0"), Compatibility::Satisfied);
        assert_eq!(check(">= v8.0.0 <v10", "v9.0.0"), Compatibility::Satisfied);
        assert!(matches!(
            check(">=v8", "v6.0.0"),
            Compatibility::Unsatisfied { .. }
        ));
        assert_eq!(check("v8.1.0 - v9", "v9.4.0"), Compatibility::Satisfied);
    }

    #[test]
    fn test_lone_version_is_exact() {
        assert_eq!(check("8.1.0", "v8.1.0"), Compatibility::Satisfied);
        assert!(matches!(
            check("8.1.0", "v8.2.0"),
            Compatibility::Unsatisfied { .. }
        ));
        assert_eq!(check("*", "v8.2.0"), Compatibility::Satisfied);
    }

    #[test]
    fn test_alternatives() {
        assert_eq!(check("^14 || ^16", "v16.3.0"), Compatibility::Satisfied);
        assert!(matches!(
            check("^14 || ^16", "v18.0.0"),
            Compatibility::Unsatisfied { .. }
        ));
    }

    #[test]
    fn test_unknown_inputs() {
        assert_eq!(check("not a range", "v18.0.0"), Compatibility::Unknown);
        assert_eq!(check(">=6", "unknown"), Compatibility::Unknown);
    }

    #[test]
    fn test_read_installed_package() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        std::fs::write(
            &path,
            r#"{"name": "reazy", "version": "1.2.3", "engines": {"node": ">=6"}}"#,
        )
        .unwrap();

        let package = InstalledPackage::read(&path).unwrap();
        assert_eq!(package.version.as_deref(), Some("1.2.3"));
        assert_eq!(package.node_range(), Some(">=6"));
    }

    #[test]
    fn test_package_without_engines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        std::fs::write(&path, r#"{"name": "reazy", "version": "1.2.3"}"#).unwrap();

        let package = InstalledPackage::read(&path).unwrap();
        assert_eq!(package.node_range(), None);
    }

    #[test]
    fn test_missing_package_is_read_error() {
        let temp = TempDir::new().unwrap();
        assert!(InstalledPackage::read(&temp.path().join("package.json")).is_err());
    }
}
