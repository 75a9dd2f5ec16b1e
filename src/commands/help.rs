//! Usage text shown for `-h/--help` outside an installed project

use crate::config::Settings;
use crate::error::Result;

pub fn run(settings: &Settings) -> Result<i32> {
    println!("{}", usage(settings));
    Ok(0)
}

pub fn usage(settings: &Settings) -> String {
    let name = &settings.package;
    [
        String::new(),
        format!("  Usage: {name} [command] [options]"),
        String::new(),
        String::new(),
        "  Commands:".to_string(),
        String::new(),
        "    init [name] [template]  generates a new project and installs its dependencies"
            .to_string(),
        "    generate [app|service]  runs a project generator (alias: g)".to_string(),
        "    add <plugin>            adds a plugin to the project".to_string(),
        String::new(),
        "  Options:".to_string(),
        String::new(),
        "    -h, --help              output usage information".to_string(),
        "    -v, --version [spec]    output the version number, or with init the version to install"
            .to_string(),
        "    --verbose               run the package manager in verbose mode".to_string(),
        "    --npm                   use npm even when yarn is available".to_string(),
        String::new(),
    ]
    .join("\n")
}
