//! CLI definition using clap derive API
//!
//! Help and version flags are handled by the bootstrap itself: `-v/--version` doubles as
//! the version override for `init`, and both flags only apply when no command is given.
//! Options the bootstrap does not define are accepted as raw tokens so they can reach
//! the installed Reazy CLI; [`Invocation`](crate::invocation::Invocation) sorts them out.

use clap::Parser;

/// Reazy - bootstrap and command line for Reazy projects
#[derive(Parser, Debug, Default)]
#[command(
    name = "reazy",
    disable_help_flag = true,
    disable_version_flag = true,
    about = "Bootstrap command line for Reazy projects"
)]
pub struct Cli {
    /// Command, its arguments and any options meant for the installed Reazy CLI
    #[arg(value_name = "COMMAND", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Extra arguments passed through to the installed Reazy CLI
    #[arg(last = true, value_name = "EXTRA")]
    pub extra: Vec<String>,

    /// Print versions, or with `init` the Reazy version, archive or path to install
    #[arg(
        short = 'v',
        long = "version",
        value_name = "SPEC",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub version: Option<String>,

    /// Print usage information
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Run the package manager in verbose mode
    #[arg(long)]
    pub verbose: bool,

    /// Always use npm, even when yarn is available
    #[arg(long)]
    pub npm: bool,
}
