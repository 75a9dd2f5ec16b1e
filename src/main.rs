//! Reazy - bootstrap command line
//!
//! Installs the Reazy framework package into a new project and hands every further
//! command to the CLI that package ships.

use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod compat;
mod config;
mod delegate;
mod error;
mod generator;
mod installer;
mod invocation;
mod package;
mod probe;
mod progress;
mod project;
mod router;

use cli::Cli;
use config::Settings;
use error::{ReazyError, Result};
use invocation::Invocation;
use router::Route;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose);
    let invocation = Invocation::from(cli);

    let code = match std::env::current_dir()
        .map_err(ReazyError::from)
        .and_then(|cwd| run(&Settings::default(), &cwd, &invocation))
    {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };
    std::process::exit(code);
}

fn run(settings: &Settings, cwd: &Path, invocation: &Invocation) -> Result<i32> {
    let target = delegate::locate(settings, cwd);

    match router::decide(invocation, target.is_installed()) {
        Route::PrintVersion => commands::version::run(settings, cwd),
        Route::PrintHelp => commands::help::run(settings),
        Route::MissingCommand => Err(ReazyError::MissingCommand),
        Route::Delegate => target.run(invocation),
        Route::Init { name, template } => commands::init::run(
            settings,
            cwd,
            invocation,
            name.as_deref(),
            template.as_deref(),
        ),
        Route::Generate { target } => commands::generate::run(settings, cwd, target.as_deref()),
        Route::Add { plugin } => commands::add::run(settings, cwd, plugin.as_deref()),
        Route::Unrecognized(command) => Err(ReazyError::UnrecognizedCommand { command }),
        Route::UnexpectedArgument { command, argument } => {
            Err(ReazyError::UnexpectedArgument { command, argument })
        }
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` turns on debug output
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
