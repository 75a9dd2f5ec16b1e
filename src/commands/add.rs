//! Add command implementation

use std::path::Path;

use serde_json::{Map, Value};

use crate::config::Settings;
use crate::error::{ReazyError, Result};
use crate::generator::{self, GeneratorEnv};

/// Run the plugin generator for `plugin`
pub fn run(settings: &Settings, cwd: &Path, plugin: Option<&str>) -> Result<i32> {
    let options = plugin_options(plugin)?;
    let env = GeneratorEnv::for_project(settings, cwd);
    let namespace = format!("{}:plugin", settings.package);
    env.run(&settings.runtime, cwd, &namespace, options)
}

fn plugin_options(plugin: Option<&str>) -> Result<Map<String, Value>> {
    let plugin = plugin
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or(ReazyError::MissingPluginName)?;
    let mut options = generator::default_options();
    options.insert("plugin".to_string(), Value::String(plugin.to_string()));
    Ok(options)
}
