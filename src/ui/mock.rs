//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Answers to `read_line` are served
//! from a queue; once it runs dry every question gets an empty answer,
//! which is what pressing Enter produces.
//!
//! # Example
//!
//! ```
//! use gas_bootstrap::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Installed jq");
//! ui.warning("Installation cancelled");
//!
//! assert!(ui.has_success("jq"));
//! assert!(ui.has_warning("cancelled"));
//! ```

use std::collections::VecDeque;

use crate::error::Result;
use crate::shell::TerminalLease;

use super::{HiddenSpinner, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    steps: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    sections: Vec<String>,
    hints: Vec<String>,
    spinners: Vec<String>,
    prompts_shown: Vec<String>,
    answers: VecDeque<String>,
    leases: usize,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers returned by successive `read_line` calls.
    pub fn queue_answers(&mut self, answers: Vec<&str>) {
        self.answers.extend(answers.into_iter().map(String::from));
    }

    /// Get all captured in-progress lines.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured section titles.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all questions that were asked.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// How many times the terminal was handed to a child.
    pub fn leases(&self) -> usize {
        self.leases
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|h| h.contains(msg))
    }

    /// Check if a section with this title was shown.
    pub fn has_section(&self, title: &str) -> bool {
        self.sections.iter().any(|s| s == title)
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn step(&mut self, msg: &str) {
        self.steps.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_section(&mut self, title: &str) {
        self.sections.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn read_line(&mut self, question: &str) -> Result<String> {
        self.prompts_shown.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(HiddenSpinner)
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn lease_terminal(&mut self) -> TerminalLease<'_> {
        self.leases += 1;
        TerminalLease::acquire(self)
    }
}
