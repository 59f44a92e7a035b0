//! Dependency evaluation and installation.
//!
//! This module decides whether the tools `git-auto-switch` needs are
//! installed, and installs the missing ones.
//!
//! # Modules
//!
//! - [`registry`] - The fixed dependency catalog
//! - [`status`] - Per-dependency probe results
//! - [`checker`] - Probing the catalog
//! - [`planner`] - Turning gaps into install actions
//! - [`installer`] - Executing install actions

pub mod checker;
pub mod installer;
pub mod planner;
pub mod registry;
pub mod status;

pub use checker::{check_all, check_dependency, missing};
pub use installer::{InstallOutcome, InstallSummary, Installer};
pub use planner::{plan, InstallAction, InstallPlan};
pub use registry::{DependencySpec, CATALOG};
pub use status::{DependencyStatus, Presence};
