//! Subprocess execution.
//!
//! Every external program the bootstrapper touches (version probes,
//! package managers, the Homebrew installer, the delegate) goes through
//! the [`CommandRunner`] trait. Commands are spawned directly, never via a
//! shell, so arguments reach the child untouched.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

use super::terminal::TerminalLease;

/// A program and its argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name or path.
    pub program: OsString,
    /// Arguments, passed verbatim.
    pub args: Vec<OsString>,
}

impl CommandSpec {
    /// Create a command with no arguments.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Result of running a command to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Terminating signal, if any.
    pub signal: Option<i32>,

    /// Standard output (empty when stdio was inherited).
    pub stdout: String,

    /// Standard error (empty when stdio was inherited).
    pub stderr: String,
}

impl CommandResult {
    /// A normal exit with the given code.
    pub fn exited(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(code),
            signal: None,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Termination by signal.
    pub fn signaled(signal: i32) -> Self {
        Self {
            exit_code: None,
            signal: Some(signal),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    fn from_status(status: ExitStatus, stdout: String, stderr: String) -> Self {
        Self {
            exit_code: status.code(),
            signal: exit_signal(&status),
            stdout,
            stderr,
        }
    }

    /// Whether the command exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Stdout followed by stderr.
    pub fn combined_output(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else {
            format!("{}{}", self.stdout, self.stderr)
        }
    }
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Runs external commands.
///
/// Spawn failures come back as `io::Error` so callers can tell "not found"
/// from "permission denied"; a non-zero exit is a successful `Ok`.
pub trait CommandRunner {
    /// Run with captured output and no stdin.
    fn capture(&mut self, command: &CommandSpec) -> io::Result<CommandResult>;

    /// Run with the terminal's streams inherited.
    ///
    /// The lease proves the caller has stopped writing to the terminal.
    fn run_interactive(
        &mut self,
        command: &CommandSpec,
        lease: &TerminalLease<'_>,
    ) -> io::Result<CommandResult>;
}

/// [`CommandRunner`] backed by real subprocesses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn capture(&mut self, command: &CommandSpec) -> io::Result<CommandResult> {
        let output = command
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        Ok(CommandResult::from_status(
            output.status,
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        ))
    }

    fn run_interactive(
        &mut self,
        command: &CommandSpec,
        _lease: &TerminalLease<'_>,
    ) -> io::Result<CommandResult> {
        tracing::debug!("Handing terminal to: {}", command);
        let status = command
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(CommandResult::from_status(
            status,
            String::new(),
            String::new(),
        ))
    }
}

/// Lossy rendering of an argument list, for logs.
pub fn describe_args(args: &[OsString]) -> String {
    args.iter()
        .map(|a| a.as_os_str())
        .map(OsStr::to_string_lossy)
        .collect::<Vec<_>>()
        .join(" ")
}
