//! Real terminal UI.

use console::Term;
use dialoguer::Input;
use std::io::{BufRead, IsTerminal, Write};

use crate::error::{BootstrapError, Result};

use super::{
    should_use_colors, GasTheme, HiddenSpinner, ProgressSpinner, SpinnerHandle, UserInterface,
};

/// Terminal UI writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: GasTheme,
}

impl TerminalUI {
    /// Create a terminal UI; colors follow `NO_COLOR` and TTY detection.
    pub fn new() -> Self {
        Self::with_colors(should_use_colors())
    }

    /// Create a terminal UI with colors forced on or off.
    pub fn with_colors(colors: bool) -> Self {
        let theme = if colors {
            GasTheme::new()
        } else {
            GasTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }

    fn read_piped_line(&mut self, question: &str) -> Result<String> {
        read_answer(&mut self.term, &mut std::io::stdin().lock(), question)
    }
}

/// Print `question` and read one line. End of input yields an empty answer.
fn read_answer(out: &mut impl Write, input: &mut impl BufRead, question: &str) -> Result<String> {
    write!(out, "{}", question).ok();
    out.flush().ok();

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| BootstrapError::PromptFailed {
            message: e.to_string(),
        })?;
    Ok(line)
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn step(&mut self, msg: &str) {
        writeln!(self.term, "  {}", self.theme.format_step(msg)).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "  {}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "  {}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "  {}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}", self.theme.format_header(title)).ok();
    }

    fn show_section(&mut self, title: &str) {
        writeln!(self.term, "\n{}\n", self.theme.format_section(title)).ok();
    }

    fn show_hint(&mut self, hint: &str) {
        writeln!(self.term, "  {}", self.theme.dim.apply_to(hint)).ok();
    }

    fn read_line(&mut self, question: &str) -> Result<String> {
        if !self.is_interactive() {
            return self.read_piped_line(question);
        }

        Input::<String>::new()
            .with_prompt(question.trim_end())
            .allow_empty(true)
            .interact_on(&self.term)
            .map_err(|e| BootstrapError::PromptFailed {
                message: e.to_string(),
            })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.is_interactive() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(HiddenSpinner)
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term() && std::io::stdin().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::resolve_answer;
    use std::io::Cursor;

    #[test]
    fn end_of_input_is_an_empty_answer() {
        let mut out = Vec::new();
        let answer = read_answer(&mut out, &mut Cursor::new(""), "Proceed? [Y/n] ").unwrap();

        assert_eq!(answer, "");
        assert!(resolve_answer(&answer));
        assert_eq!(String::from_utf8(out).unwrap(), "Proceed? [Y/n] ");
    }

    #[test]
    fn piped_no_declines() {
        let mut out = Vec::new();
        let answer = read_answer(&mut out, &mut Cursor::new("no\nyes\n"), "Proceed? ").unwrap();

        assert_eq!(answer, "no\n");
        assert!(!resolve_answer(&answer));
    }
}
