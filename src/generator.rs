//! Project generators
//!
//! Generators come from the `generator-reazy` package and are run through
//! `yeoman-environment` in a child runtime. The registry only records which namespace
//! maps to which generator directory; running one registers them all and invokes the
//! requested namespace.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Settings;
use crate::error::{Result, ReazyError, delegate};

/// Generators shipped by the generator package
const GENERATORS: &[&str] = &["app", "service", "plugin"];

const RUNNER: &str = "\
var yeoman = require('yeoman-environment');
var job = JSON.parse(process.argv[1]);
var env = yeoman.createEnv();
job.generators.forEach(function (g) { env.register(require.resolve(g.path), g.namespace); });
env.run(job.namespace, job.options, function (err) {
  if (err) { console.error(err.message || err); process.exit(1); }
});
";

/// A generator registered under a namespace like `reazy:app`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub namespace: String,
    pub path: PathBuf,
}

/// Namespaces known to this project
#[derive(Debug, Clone, Default)]
pub struct GeneratorEnv {
    registrations: Vec<Registration>,
}

#[derive(Debug, Serialize)]
struct Job<'a> {
    generators: &'a [Registration],
    namespace: &'a str,
    options: Map<String, Value>,
}

impl GeneratorEnv {
    /// Register every generator the generator package ships for the project at `root`
    pub fn for_project(settings: &Settings, root: &Path) -> Self {
        let dir = settings.generators_dir(root);
        let mut env = Self::default();
        for name in GENERATORS {
            env.register(dir.join(name), format!("{}:{name}", settings.package));
        }
        env
    }

    pub fn register(&mut self, path: PathBuf, namespace: impl Into<String>) {
        let namespace = namespace.into();
        self.registrations.retain(|r| r.namespace != namespace);
        self.registrations.push(Registration { namespace, path });
    }

    /// All registered namespaces
    pub fn namespaces(&self) -> Vec<&str> {
        self.registrations
            .iter()
            .map(|r| r.namespace.as_str())
            .collect()
    }

    pub fn is_registered(&self, namespace: &str) -> bool {
        self.registrations.iter().any(|r| r.namespace == namespace)
    }

    /// Run `namespace` with `options` in `root`; returns the runner's exit code
    pub fn run(
        &self,
        runtime: &str,
        root: &Path,
        namespace: &str,
        options: Map<String, Value>,
    ) -> Result<i32> {
        if !self.is_registered(namespace) {
            return Err(ReazyError::UnknownGenerator {
                name: namespace.to_string(),
            });
        }

        let runtime_path =
            which::which(runtime).map_err(|_| delegate::runtime_not_found(runtime))?;
        let job = Job {
            generators: &self.registrations,
            namespace,
            options,
        };
        let payload = serde_json::to_string(&job).map_err(|e| delegate::failed(namespace, e))?;

        println!();
        tracing::debug!(
            "running generator {namespace} in {} (registered: {})",
            root.display(),
            self.namespaces().join(", ")
        );
        let status = Command::new(runtime_path)
            .arg("-e")
            .arg(RUNNER)
            .arg(payload)
            .current_dir(root)
            .status()
            .map_err(|e| delegate::failed(namespace, e))?;

        Ok(status.code().unwrap_or(1))
    }
}

/// Options every generator run receives
pub fn default_options() -> Map<String, Value> {
    let mut options = Map::new();
    options.insert("disableNotifyUpdate".to_string(), Value::Bool(true));
    options
}
