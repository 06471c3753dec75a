//! Pending-state spinner
//!
//! The interface stays responsive while a question is in flight; the only
//! user-visible pending state is this spinner.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a request is pending.
pub struct PendingSpinner {
    bar: ProgressBar,
}

impl PendingSpinner {
    /// Start the spinner with the standard "Fetching answer..." message.
    pub fn start() -> Self {
        Self::with_message("Fetching answer...")
    }

    pub fn with_message(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("spinner template is valid"),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Stop and erase the spinner.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
