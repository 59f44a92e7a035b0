//! The confirmation gate.
//!
//! One yes/no question guards every batch of mutating actions. The
//! default is yes: only an explicit `n` or `no` declines.

use crate::error::Result;

use super::UserInterface;

/// Interpret a typed answer. Case and surrounding whitespace are ignored.
pub fn resolve_answer(input: &str) -> bool {
    let answer = input.trim().to_lowercase();
    !matches!(answer.as_str(), "n" | "no")
}

/// Ask `question` and wait for one line of input.
pub fn confirm(ui: &mut dyn UserInterface, question: &str) -> Result<bool> {
    let answer = ui.read_line(question)?;
    let confirmed = resolve_answer(&answer);
    tracing::debug!("Confirmation {:?} -> {}", answer, confirmed);
    Ok(confirmed)
}
