//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::GasTheme;
use super::SpinnerHandle;

/// A progress spinner for probe phases.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: GasTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: GasTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("  {spinner:.blue} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    fn finish_with(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("  {msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish_with(line);
    }
}

/// A spinner that draws nothing.
#[derive(Debug, Default)]
pub struct HiddenSpinner;

impl SpinnerHandle for HiddenSpinner {
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_lifecycle_does_not_panic() {
        let mut spinner = ProgressSpinner::new("Verifying installation", GasTheme::plain());
        spinner.finish_success("Verified");
    }

    #[test]
    fn hidden_spinner_is_inert() {
        let mut spinner = HiddenSpinner;
        spinner.finish_success("x");
        spinner.finish_error("y");
    }
}
