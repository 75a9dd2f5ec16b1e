//! Error types and handling for the Reazy bootstrap
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`project`]: Project name validation and scaffolding errors
//! - [`install`]: Package manager and installation errors
//! - [`delegate`]: Errors from handing off to the installed package

pub mod delegate;
pub mod install;
pub mod project;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bootstrap operations
#[derive(Error, Diagnostic, Debug)]
pub enum ReazyError {
    // Project errors
    #[error(
        "\"{name}\" is not a valid name for a project. Please use a valid identifier name (alphanumeric)."
    )]
    #[diagnostic(
        code(reazy::project::invalid_name),
        help("Project names must start with a letter, '_' or '$' and contain only letters, digits, '_' or '$'")
    )]
    InvalidProjectName { name: String },

    #[error(
        "\"{name}\" is not a valid name for a project. Please do not use the reserved word \"React\"."
    )]
    #[diagnostic(code(reazy::project::reserved_name))]
    ReservedProjectName { name: String },

    #[error("Failed to write manifest: {path}: {reason}")]
    #[diagnostic(code(reazy::project::manifest_write_failed))]
    ManifestWriteFailed { path: String, reason: String },

    #[error("Failed to read manifest: {path}: {reason}")]
    #[diagnostic(code(reazy::project::manifest_read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to read confirmation: {message}")]
    #[diagnostic(code(reazy::project::prompt_failed))]
    PromptFailed { message: String },

    // Command errors
    #[error(
        "You did not pass any commands, run `reazy --help` to see a list of all available commands."
    )]
    #[diagnostic(code(reazy::command::missing))]
    MissingCommand,

    #[error(
        "Command `{command}` unrecognized. Make sure that you have run `npm install` and that you are inside a reazy project."
    )]
    #[diagnostic(code(reazy::command::unrecognized))]
    UnrecognizedCommand { command: String },

    #[error("Unexpected argument `{argument}` for `{command}`")]
    #[diagnostic(
        code(reazy::command::unexpected_argument),
        help("Run `reazy --help` to see the options it accepts")
    )]
    UnexpectedArgument { command: String, argument: String },

    #[error("Unknown generator `{name}`")]
    #[diagnostic(
        code(reazy::command::unknown_generator),
        help("Available generators: app, service")
    )]
    UnknownGenerator { name: String },

    #[error("Missing plugin name")]
    #[diagnostic(code(reazy::command::missing_plugin), help("Usage: reazy add <plugin>"))]
    MissingPluginName,

    // Install errors
    #[error("Package manager `{manager}` not found on PATH")]
    #[diagnostic(
        code(reazy::install::manager_not_found),
        help("Install Node.js and npm, then try again")
    )]
    ManagerNotFound { manager: String },

    #[error("Command `{command}` failed: {reason}")]
    #[diagnostic(code(reazy::install::failed))]
    InstallFailed { command: String, reason: String },

    // Delegate errors
    #[error("Runtime `{runtime}` not found on PATH")]
    #[diagnostic(
        code(reazy::delegate::runtime_not_found),
        help("Install Node.js and make sure `node` is on your PATH")
    )]
    RuntimeNotFound { runtime: String },

    #[error("Reazy is not installed: {path} does not exist")]
    #[diagnostic(
        code(reazy::delegate::not_installed),
        help("Run `reazy init` to create a project and install Reazy")
    )]
    DelegateNotInstalled { path: String },

    #[error("Failed to start {entry}: {reason}")]
    #[diagnostic(code(reazy::delegate::failed))]
    DelegateFailed { entry: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(reazy::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ReazyError {
    fn from(err: std::io::Error) -> Self {
        ReazyError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for ReazyError {
    fn from(err: inquire::InquireError) -> Self {
        ReazyError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ReazyError>;
