//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for tests
//! - The confirmation gate ([`confirm`]) and spinners
//!
//! # Example
//!
//! ```
//! use gas_bootstrap::ui::{confirm, MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_answers(vec!["no"]);
//!
//! assert!(!confirm(&mut ui, "Proceed with installation? [Y/n] ").unwrap());
//! assert_eq!(ui.prompts_shown().len(), 1);
//! ```

pub mod hints;
pub mod mock;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use prompts::{confirm, resolve_answer};
pub use spinner::{HiddenSpinner, ProgressSpinner};
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, GasTheme};

use crate::error::Result;
use crate::shell::TerminalLease;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display an in-progress line.
    fn step(&mut self, msg: &str);

    /// Display a success line.
    fn success(&mut self, msg: &str);

    /// Display a warning line.
    fn warning(&mut self, msg: &str);

    /// Display an error line.
    fn error(&mut self, msg: &str);

    /// Show the banner.
    fn show_header(&mut self, title: &str);

    /// Show a section title.
    fn show_section(&mut self, title: &str);

    /// Show a dimmed follow-up hint.
    fn show_hint(&mut self, hint: &str);

    /// Ask a question and read one line of input.
    ///
    /// End of input yields an empty string.
    fn read_line(&mut self, question: &str) -> Result<String>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if a person is at the terminal.
    fn is_interactive(&self) -> bool;

    /// Hand the terminal to a child process until the lease is dropped.
    fn lease_terminal(&mut self) -> TerminalLease<'_> {
        TerminalLease::acquire(self)
    }
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}
