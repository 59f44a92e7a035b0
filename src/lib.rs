//! gas-bootstrap - Dependency bootstrapper for `git-auto-switch`.
//!
//! `git-auto-switch` is a bash script that needs `bash`, `git` and `jq`.
//! This crate checks for them before every invocation, offers to install
//! whatever is missing with the host's package manager, and then hands
//! the terminal and the original arguments to the script.
//!
//! # Modules
//!
//! - [`config`] - Environment-variable configuration
//! - [`delegate`] - Locating and invoking the script
//! - [`detection`] - Operating system and package manager detection
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Dependency catalog, evaluation, planning and installation
//! - [`runner`] - Run state machine and report output
//! - [`shell`] - Subprocess execution and terminal hand-off
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use gas_bootstrap::detection::{OsFamily, PlatformInfo};
//! use gas_bootstrap::requirements::{plan, registry, DependencyStatus, Presence};
//!
//! let jq = DependencyStatus {
//!     spec: registry::find("jq").unwrap().clone(),
//!     presence: Presence::Absent,
//! };
//! let platform = PlatformInfo::new(OsFamily::MacOS, None);
//!
//! let install_plan = plan(&[jq], &platform);
//! assert!(install_plan.starts_with_bootstrap());
//! assert_eq!(install_plan.dependencies(), vec!["jq"]);
//! ```

pub mod config;
pub mod delegate;
pub mod detection;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{BootstrapError, Result};
