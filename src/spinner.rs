//! Terminal busy indicator shown while a run is outstanding

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

const TICK_DURATION_MS: u64 = 100;
const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner shown between submitting a run and its terminal state
///
/// Stopped-and-cleared rather than stopped-with-message, so the reply
/// prints on a clean line.
#[derive(Default)]
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the indicator with a message; replaces any running one
    pub fn start(&mut self, message: &str) {
        self.stop();

        let bar = ProgressBar::new_spinner().with_style(
            ProgressStyle::default_spinner()
                .tick_strings(TICKS)
                .template("{spinner:.cyan} {msg}")
                .expect("static spinner template is valid"),
        );
        bar.set_message(message.bright_cyan().to_string());
        bar.enable_steady_tick(Duration::from_millis(TICK_DURATION_MS));

        self.bar = Some(bar);
    }

    /// Hide the indicator and clear its line
    pub fn stop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}
