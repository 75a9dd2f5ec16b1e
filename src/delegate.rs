//! Handing off to the installed Reazy CLI
//!
//! The installed package exposes `init(root, projectName, template)` and
//! `run(options)` from its entry module. The bootstrap locates that module once at
//! startup (and once more right after installing it) and picks a [`DelegateTarget`]:
//! [`NotInstalled`] when the file is missing, [`NodeModule`] when it is present.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use serde_json::{Value, json};

use crate::config::Settings;
use crate::error::{Result, delegate};
use crate::invocation::Invocation;

/// Requires the entry module given as the first argument and applies the call given as
/// JSON in the second.
const LOADER: &str = "\
var mod = require(process.argv[1]);
var cli = mod && mod.default ? mod.default : mod;
var call = JSON.parse(process.argv[2]);
cli[call.entry].apply(cli, call.args);
";

/// Entry points of the installed CLI
pub trait DelegateTarget {
    /// Whether the installed CLI was found
    fn is_installed(&self) -> bool;

    /// Finish a fresh project; returns the exit code to end the process with
    fn init(&self, root: &Path, project_name: &str, template: Option<&str>) -> Result<i32>;

    /// Hand the whole invocation over; returns the exit code to end the process with
    fn run(&self, invocation: &Invocation) -> Result<i32>;
}

/// Locate the entry module under `root` and pick the matching target
pub fn locate(settings: &Settings, root: &Path) -> Box<dyn DelegateTarget> {
    let entry = settings.entry_path(root);
    if entry.is_file() {
        tracing::debug!("found installed CLI at {}", entry.display());
        Box::new(NodeModule {
            runtime: settings.runtime.clone(),
            entry,
        })
    } else {
        tracing::debug!("no installed CLI at {}", entry.display());
        Box::new(NotInstalled { entry })
    }
}

/// Target used before the framework package is installed
#[derive(Debug, Clone)]
pub struct NotInstalled {
    entry: PathBuf,
}

impl DelegateTarget for NotInstalled {
    fn is_installed(&self) -> bool {
        false
    }

    fn init(&self, _root: &Path, _project_name: &str, _template: Option<&str>) -> Result<i32> {
        Err(delegate::not_installed(self.entry.display().to_string()))
    }

    fn run(&self, _invocation: &Invocation) -> Result<i32> {
        Err(delegate::not_installed(self.entry.display().to_string()))
    }
}

/// Installed entry module loaded by the runtime in a child process
#[derive(Debug, Clone)]
pub struct NodeModule {
    runtime: String,
    entry: PathBuf,
}

#[derive(Debug, Serialize)]
struct Call<'a> {
    entry: &'a str,
    args: Vec<Value>,
}

impl NodeModule {
    fn call(&self, call: &Call<'_>) -> Result<i32> {
        let runtime = which::which(&self.runtime)
            .map_err(|_| delegate::runtime_not_found(&self.runtime))?;
        let payload = serde_json::to_string(call)
            .map_err(|e| delegate::failed(call.entry, e))?;

        tracing::debug!("{} {} {}", self.runtime, self.entry.display(), payload);
        // Stdio is inherited: the installed CLI owns the terminal from here on.
        let status = Command::new(runtime)
            .arg("-e")
            .arg(LOADER)
            .arg(&self.entry)
            .arg(payload)
            .status()
            .map_err(|e| delegate::failed(call.entry, e))?;

        Ok(status.code().unwrap_or(1))
    }
}

impl DelegateTarget for NodeModule {
    fn is_installed(&self) -> bool {
        true
    }

    fn init(&self, root: &Path, project_name: &str, template: Option<&str>) -> Result<i32> {
        self.call(&Call {
            entry: "init",
            args: vec![
                json!(root.display().to_string()),
                json!(project_name),
                template.map_or(Value::Null, |t| json!(t)),
            ],
        })
    }

    fn run(&self, invocation: &Invocation) -> Result<i32> {
        self.call(&Call {
            entry: "run",
            args: vec![invocation.to_options()],
        })
    }
}
