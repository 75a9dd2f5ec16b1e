//! Spinner shown while the package manager runs quietly

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

const TICK_STRINGS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Progress display for a single install
pub struct InstallSpinner {
    pb: ProgressBar,
}

impl InstallSpinner {
    /// Start spinning with `Installing <what>...`
    pub fn start(what: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        let spinner_style = ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICK_STRINGS);
        pb.set_style(spinner_style);
        pb.set_message(format!("Installing {what}..."));
        pb.enable_steady_tick(Duration::from_millis(80));
        Self { pb }
    }

    /// Stop and leave a success line behind
    pub fn succeed(self, what: &str) {
        self.pb.set_style(done_style());
        self.pb
            .finish_with_message(format!("{} Installed {what}", style("✔").green()));
    }

    /// Stop and leave a failure line behind
    pub fn fail(self, what: &str) {
        self.pb.set_style(done_style());
        self.pb
            .abandon_with_message(format!("{} Failed to install {what}", style("✖").red()));
    }
}

fn done_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
