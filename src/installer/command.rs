//! Install command composition and execution

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Result, install};
use crate::package::{PackageManager, PackageSpecifier};
use crate::progress::InstallSpinner;

/// One package manager invocation:
/// `<manager> <install-verb> <specifier> <exact-flag> [--verbose]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    program: PathBuf,
    name: &'static str,
    args: Vec<String>,
    verbose: bool,
}

impl InstallCommand {
    pub fn compose(manager: &PackageManager, spec: &PackageSpecifier, verbose: bool) -> Self {
        let mut args: Vec<String> = manager
            .kind
            .install_args()
            .iter()
            .map(|a| (*a).to_string())
            .collect();
        args.push(spec.to_string());
        args.push(manager.kind.exact_flag().to_string());
        if verbose {
            args.push("--verbose".to_string());
        }

        Self {
            program: manager.program.clone(),
            name: manager.kind.program(),
            args,
            verbose,
        }
    }

    /// Run in `root` and wait for the manager to exit.
    ///
    /// Verbose runs inherit stdio so the manager's output streams live; quiet runs
    /// capture it behind a spinner and replay stderr only on failure.
    pub fn run(&self, root: &Path, what: &str) -> Result<()> {
        tracing::debug!("running `{self}` in {}", root.display());
        if self.verbose {
            self.run_inherited(root)
        } else {
            self.run_with_spinner(root, what)
        }
    }

    fn run_inherited(&self, root: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(root)
            .status()
            .map_err(|e| install::failed(self.to_string(), e))?;

        if status.success() {
            Ok(())
        } else {
            Err(install::failed(self.to_string(), status))
        }
    }

    fn run_with_spinner(&self, root: &Path, what: &str) -> Result<()> {
        let spinner = InstallSpinner::start(what);
        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(root)
            .stdin(Stdio::null())
            .output();

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                spinner.fail(what);
                return Err(install::failed(self.to_string(), e));
            }
        };

        if output.status.success() {
            spinner.succeed(what);
            return Ok(());
        }

        spinner.fail(what);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            eprintln!("{}", stderr.trim_end());
        }
        Err(install::failed(self.to_string(), output.status))
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReazyError;
    use crate::package::ManagerKind;

    fn manager(kind: ManagerKind, program: &Path) -> PackageManager {
        PackageManager {
            kind,
            program: program.to_path_buf(),
            version: None,
        }
    }

    fn latest() -> PackageSpecifier {
        PackageSpecifier::Latest {
            package: "reazy".to_string(),
        }
    }

    #[test]
    fn test_npm_command_line() {
        let cmd = InstallCommand::compose(
            &manager(ManagerKind::Npm, Path::new("/usr/bin/npm")),
            &latest(),
            false,
        );
        assert_eq!(cmd.to_string(), "npm install --save reazy --save-exact");
    }

    #[test]
    fn test_yarn_verbose_command_line() {
        let spec = PackageSpecifier::resolve("reazy", Some("0.38.0"), true, Path::new("."));
        let cmd = InstallCommand::compose(
            &manager(ManagerKind::Yarn, Path::new("/usr/bin/yarn")),
            &spec,
            true,
        );
        assert_eq!(cmd.to_string(), "yarn add reazy@0.38.0 --exact --verbose");
    }

    #[cfg(unix)]
    fn script(dir: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("fake-npm");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_manager_reports_command() {
        let temp = tempfile::TempDir::new().unwrap();
        let program = script(temp.path(), "echo 'E404 not found' >&2\nexit 1");
        let cmd = InstallCommand::compose(&manager(ManagerKind::Npm, &program), &latest(), false);

        let err = cmd.run(temp.path(), "reazy").unwrap_err();
        match err {
            ReazyError::InstallFailed { command, .. } => {
                assert_eq!(command, "npm install --save reazy --save-exact");
            }
            other => panic!("Expected InstallFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_manager_runs_in_root() {
        let temp = tempfile::TempDir::new().unwrap();
        let program = script(temp.path(), "echo \"$@\" > installed.txt");
        let cmd = InstallCommand::compose(&manager(ManagerKind::Npm, &program), &latest(), true);

        cmd.run(temp.path(), "reazy").unwrap();
        let recorded = std::fs::read_to_string(temp.path().join("installed.txt")).unwrap();
        assert_eq!(recorded.trim(), "install --save reazy --save-exact --verbose");
    }

    #[test]
    fn test_missing_program_is_install_failure() {
        let temp = tempfile::TempDir::new().unwrap();
        let cmd = InstallCommand::compose(
            &manager(ManagerKind::Npm, &temp.path().join("no-such-npm")),
            &latest(),
            true,
        );
        assert!(matches!(
            cmd.run(temp.path(), "reazy"),
            Err(ReazyError::InstallFailed { .. })
        ));
    }
}
