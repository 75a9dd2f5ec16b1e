//! Common test utilities for Reazy integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory with an empty `bin/` used as the only `PATH` entry
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Directory the binary runs in
    pub path: PathBuf,
    /// Directory holding stub executables
    pub bin: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("work");
        let bin = temp.path().join("bin");
        std::fs::create_dir_all(&path).expect("Failed to create work directory");
        std::fs::create_dir_all(&bin).expect("Failed to create bin directory");
        Self { temp, path, bin }
    }

    /// Write a file relative to the work directory
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the work directory
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Make the work directory look like a project with Reazy installed
    pub fn install_reazy(&self, version: &str) {
        self.write_file("node_modules/reazy/dist/cli.js", "exports.default = {};\n");
        self.write_file(
            "node_modules/reazy/package.json",
            &format!(r#"{{"name": "reazy", "version": "{version}"}}"#),
        );
    }

    /// Put a shell script named `name` on the test `PATH`
    #[cfg(unix)]
    pub fn stub(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write stub");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make stub executable");
        path
    }

    /// `reazy` running in the work directory with only the stub directory on `PATH`
    pub fn cmd(&self) -> Command {
        self.cmd_in(&self.path)
    }

    pub fn cmd_in(&self, dir: &Path) -> Command {
        let mut cmd = reazy_cmd();
        cmd.current_dir(dir)
            .env("PATH", &self.bin)
            .env_remove("RUST_LOG");
        cmd
    }

    /// Entries of the work directory, sorted
    pub fn entries(&self) -> Vec<String> {
        let mut entries: Vec<String> = std::fs::read_dir(&self.path)
            .expect("Failed to read work directory")
            .map(|e| {
                e.expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .to_string()
            })
            .collect();
        entries.sort();
        entries
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn reazy_cmd() -> Command {
    Command::cargo_bin("reazy").expect("reazy binary should be built")
}
