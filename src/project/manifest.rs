//! The minimal manifest written at project root

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::MANIFEST_FILE;
use crate::error::{Result, project};

pub const INITIAL_VERSION: &str = "0.0.1";

/// `{name, version, private}` project descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub private: bool,
}

impl Manifest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: INITIAL_VERSION.to_string(),
            private: true,
        }
    }

    /// Write to `<root>/package.json`, replacing any existing file
    pub fn write(&self, root: &Path) -> Result<()> {
        let path = root.join(MANIFEST_FILE);
        let mut json = serde_json::to_string_pretty(self)
            .map_err(|e| project::manifest_write_failed(path.display().to_string(), e))?;
        json.push('\n');
        std::fs::write(&path, json)
            .map_err(|e| project::manifest_write_failed(path.display().to_string(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_manifest_defaults() {
        let manifest = Manifest::new("MyApp");
        assert_eq!(manifest.version, "0.0.1");
        assert!(manifest.private);
    }

    #[test]
    fn test_write_manifest() {
        let temp = TempDir::new().unwrap();
        Manifest::new("MyApp").write(temp.path()).unwrap();

        let content = std::fs::read_to_string(temp.path().join("package.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "MyApp", "version": "0.0.1", "private": true})
        );
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let err = Manifest::new("x")
            .write(&temp.path().join("missing"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write manifest"));
    }
}
