//! Subprocess execution and terminal ownership.

pub mod command;
pub mod lookup;
pub mod mock;
pub mod privilege;
pub mod terminal;

pub use command::{describe_args, CommandResult, CommandRunner, CommandSpec, SystemRunner};
pub use lookup::{command_on_path, is_executable, parse_system_path, resolve_tool_path};
pub use mock::{MockOutcome, MockRunner, RecordedCall};
pub use privilege::is_elevated;
pub use terminal::TerminalLease;
