//! Resolve a requested version into the specifier handed to the package manager
//!
//! `--version` accepts several shapes:
//! - `0.38.0` - a specific release from the registry
//! - `https://registry.npmjs.org/reazy/-/reazy-0.20.0.tgz` - an archive from any registry
//! - `/Users/home/reazy/reazy-0.22.0.tgz` - a package prepared with `npm pack`
//! - anything else (`next`, `0.38`, `reazy@^1`) is passed through untouched

use std::fmt;
use std::path::{Path, PathBuf};

/// What the package manager is asked to install
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSpecifier {
    /// No version requested: the bare package name
    Latest { package: String },
    /// A valid semantic version: `package@version`
    Version {
        package: String,
        version: semver::Version,
    },
    /// Tags, ranges and partial versions, passed through as given
    Reference(String),
    /// Path to a local directory or archive, as given
    LocalPath(String),
    /// Remote archive or repository URL, as given
    Remote(String),
    /// Local path rewritten as `file:` for managers that want explicit file references
    FileReference(PathBuf),
}

impl PackageSpecifier {
    /// Resolve the requested version for `package`.
    ///
    /// `file_references` enables the `file:` rewrite of existing local paths, resolved
    /// against `base`.
    pub fn resolve(
        package: &str,
        requested: Option<&str>,
        file_references: bool,
        base: &Path,
    ) -> Self {
        let requested = match requested {
            Some(r) if !r.is_empty() => r,
            _ => {
                return PackageSpecifier::Latest {
                    package: package.to_string(),
                };
            }
        };

        if let Some(version) = valid_semver(requested) {
            return PackageSpecifier::Version {
                package: package.to_string(),
                version,
            };
        }

        if is_remote(requested) {
            return PackageSpecifier::Remote(requested.to_string());
        }

        if is_path_like(requested) {
            if file_references {
                let path = base.join(requested);
                if path.exists() {
                    let path = dunce::canonicalize(&path).unwrap_or(path);
                    return PackageSpecifier::FileReference(path);
                }
            }
            return PackageSpecifier::LocalPath(requested.to_string());
        }

        PackageSpecifier::Reference(requested.to_string())
    }
}

impl fmt::Display for PackageSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageSpecifier::Latest { package } => write!(f, "{package}"),
            PackageSpecifier::Version { package, version } => write!(f, "{package}@{version}"),
            PackageSpecifier::Reference(s)
            | PackageSpecifier::LocalPath(s)
            | PackageSpecifier::Remote(s) => write!(f, "{s}"),
            PackageSpecifier::FileReference(path) => write!(f, "file:{}", path.display()),
        }
    }
}

/// Strict semantic version check: surrounding whitespace and one leading `v` are allowed
fn valid_semver(input: &str) -> Option<semver::Version> {
    let trimmed = input.trim();
    let version = trimmed.strip_prefix('v').unwrap_or(trimmed);
    semver::Version::parse(version).ok()
}

fn is_remote(s: &str) -> bool {
    s.contains("://") || s.starts_with("git+") || s.starts_with("git@")
}

/// Check if a string looks like a path (contains path separators or relative path indicators)
fn is_path_like(s: &str) -> bool {
    s.starts_with('.')
        || s.starts_with('~')
        || Path::new(s).is_absolute()
        || s.ends_with(".tgz")
        || s.ends_with(".tar.gz")
        || s.ends_with(".tar")
        || (s.contains('/') && !s.starts_with('@') && !s.contains('@'))
        || s.contains('\\')
}
