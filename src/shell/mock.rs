//! Scripted command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything.
//! Responses are keyed by the rendered command line (`"jq --version"`);
//! unscripted commands behave like a program that is not installed.
//!
//! # Example
//!
//! ```
//! use gas_bootstrap::shell::{CommandRunner, CommandSpec, MockOutcome, MockRunner};
//!
//! let mut runner = MockRunner::new();
//! runner.on("git --version", MockOutcome::success("git version 2.43.0\n"));
//!
//! let result = runner.capture(&CommandSpec::new("git").arg("--version")).unwrap();
//! assert!(result.success());
//! assert!(runner.capture(&CommandSpec::new("jq").arg("--version")).is_err());
//! ```

use std::collections::{HashMap, VecDeque};
use std::io;

use super::command::{CommandResult, CommandRunner, CommandSpec};
use super::terminal::TerminalLease;

/// What a scripted command does when run.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Exit with a code and stdout.
    Exit { code: i32, stdout: String },
    /// Terminated by a signal.
    Signal(i32),
    /// Fail to spawn with the given error kind.
    SpawnError(io::ErrorKind),
}

impl MockOutcome {
    /// Exit 0 with the given stdout.
    pub fn success(stdout: &str) -> Self {
        Self::Exit {
            code: 0,
            stdout: stdout.to_string(),
        }
    }

    /// Exit with `code` and no output.
    pub fn exit(code: i32) -> Self {
        Self::Exit {
            code,
            stdout: String::new(),
        }
    }

    /// Program not found.
    pub fn not_found() -> Self {
        Self::SpawnError(io::ErrorKind::NotFound)
    }

    fn into_result(self) -> io::Result<CommandResult> {
        match self {
            Self::Exit { code, stdout } => Ok(CommandResult::exited(code, stdout, "")),
            Self::Signal(sig) => Ok(CommandResult::signaled(sig)),
            Self::SpawnError(kind) => Err(io::Error::new(kind, "scripted spawn failure")),
        }
    }
}

/// A recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// The command that was run.
    pub command: CommandSpec,
    /// Whether it ran with the terminal handed over.
    pub interactive: bool,
}

/// Mock [`CommandRunner`] for testing.
#[derive(Debug, Default)]
pub struct MockRunner {
    outcomes: HashMap<String, MockOutcome>,
    queues: HashMap<String, VecDeque<MockOutcome>>,
    calls: Vec<RecordedCall>,
}

impl MockRunner {
    /// Create a runner where every command is "not installed".
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outcome for a command line.
    pub fn on(&mut self, command_line: &str, outcome: MockOutcome) -> &mut Self {
        self.outcomes.insert(command_line.to_string(), outcome);
        self
    }

    /// Queue outcomes returned in order for repeated runs of one command.
    ///
    /// After the queue is exhausted, falls back to [`MockRunner::on`].
    pub fn queue(&mut self, command_line: &str, outcomes: Vec<MockOutcome>) -> &mut Self {
        self.queues
            .insert(command_line.to_string(), outcomes.into_iter().collect());
        self
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    /// Rendered command lines of all interactive calls, in order.
    pub fn interactive_calls(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter(|c| c.interactive)
            .map(|c| c.command.to_string())
            .collect()
    }

    /// Whether a command line was run at all.
    pub fn was_called(&self, command_line: &str) -> bool {
        self.calls
            .iter()
            .any(|c| c.command.to_string() == command_line)
    }

    fn respond(&mut self, command: &CommandSpec, interactive: bool) -> io::Result<CommandResult> {
        self.calls.push(RecordedCall {
            command: command.clone(),
            interactive,
        });

        let key = command.to_string();
        let queued = self.queues.get_mut(&key).and_then(VecDeque::pop_front);
        queued
            .or_else(|| self.outcomes.get(&key).cloned())
            .unwrap_or_else(MockOutcome::not_found)
            .into_result()
    }
}

impl CommandRunner for MockRunner {
    fn capture(&mut self, command: &CommandSpec) -> io::Result<CommandResult> {
        self.respond(command, false)
    }

    fn run_interactive(
        &mut self,
        command: &CommandSpec,
        _lease: &TerminalLease<'_>,
    ) -> io::Result<CommandResult> {
        self.respond(command, true)
    }
}
