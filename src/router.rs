//! Top-level dispatch
//!
//! [`decide`] maps an invocation and whether the Reazy CLI is installed to exactly
//! one [`Route`]. It has no side effects; `main` carries the route out.

use crate::invocation::Invocation;

/// Commands the bootstrap always handles itself, installed CLI or not
const OWNED_COMMANDS: &[&str] = &["init", "generate", "g", "add"];

/// Terminal action for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    PrintVersion,
    PrintHelp,
    MissingCommand,
    /// Hand everything to the installed CLI's `run`
    Delegate,
    Init {
        name: Option<String>,
        template: Option<String>,
    },
    /// `g`, `generate` and `generate <target>`
    Generate { target: Option<String> },
    Add { plugin: Option<String> },
    Unrecognized(String),
    /// A bootstrap-owned command was given an option it does not take
    UnexpectedArgument { command: String, argument: String },
}

pub fn decide(invocation: &Invocation, installed: bool) -> Route {
    let command = invocation.command();

    if command.is_none() && invocation.version_flag() {
        return Route::PrintVersion;
    }

    if installed && !command.is_some_and(|c| OWNED_COMMANDS.contains(&c)) {
        return Route::Delegate;
    }

    let Some(command) = command else {
        return if invocation.help {
            Route::PrintHelp
        } else {
            Route::MissingCommand
        };
    };

    if OWNED_COMMANDS.contains(&command) {
        if let Some(argument) = invocation.unknown.first() {
            return Route::UnexpectedArgument {
                command: command.to_string(),
                argument: argument.clone(),
            };
        }
    }

    let arg = |index: usize| invocation.positional(index).map(str::to_string);
    match command {
        "init" => Route::Init {
            name: arg(1),
            template: arg(2),
        },
        "g" => Route::Generate { target: None },
        "generate" => Route::Generate { target: arg(1) },
        "add" => Route::Add { plugin: arg(1) },
        other => Route::Unrecognized(other.to_string()),
    }
}
