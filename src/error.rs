//! Error types for bootstrap operations.
//!
//! This module defines [`BootstrapError`], the error type shared by every
//! stage of a run, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing tool is not an error: the evaluator reports it as
//!   [`Presence::Absent`](crate::requirements::Presence::Absent)
//! - Every variant here is terminal for the run; nothing is retried
//! - Messages name the dependency or path involved so users can act on them

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bootstrap operations.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// No package manager can be resolved or bootstrapped on this host.
    #[error("No supported package manager found on {os}; install manually: {}", .missing.join(", "))]
    PlatformUnsupported { os: String, missing: Vec<String> },

    /// A package-manager subprocess failed or could not be spawned.
    #[error("Failed to install '{dependency}'")]
    InstallActionFailed { dependency: String },

    /// The install plan succeeded but the probes still report gaps.
    #[error("Dependencies still missing after installation: {}", .missing.join(", "))]
    PostInstallVerificationFailed { missing: Vec<String> },

    /// The delegate script is not where the package layout puts it.
    #[error("git-auto-switch script not found (expected at {path})")]
    DelegateNotFound { path: PathBuf },

    /// The delegate exists but is not executable.
    #[error("Permission denied executing {path}")]
    DelegatePermissionDenied { path: PathBuf },

    /// The delegate's interpreter could not be found.
    #[error("Failed to execute {path}: interpreter not found")]
    DelegateInterpreterMissing { path: PathBuf },

    /// Any other spawn failure on the hand-off boundary.
    #[error("Failed to execute {path}: {source}")]
    DelegateSpawnFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the confirmation answer from the terminal failed.
    #[error("Prompt failed: {message}")]
    PromptFailed { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Context-wrapped failure outside the categories above.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_unsupported_lists_missing() {
        let err = BootstrapError::PlatformUnsupported {
            os: "freebsd".into(),
            missing: vec!["git".into(), "jq".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("freebsd"));
        assert!(msg.contains("git, jq"));
    }

    #[test]
    fn install_action_failed_names_dependency() {
        let err = BootstrapError::InstallActionFailed {
            dependency: "jq".into(),
        };
        assert!(err.to_string().contains("'jq'"));
    }

    #[test]
    fn verification_failed_lists_missing() {
        let err = BootstrapError::PostInstallVerificationFailed {
            missing: vec!["jq".into()],
        };
        assert!(err.to_string().contains("still missing"));
        assert!(err.to_string().contains("jq"));
    }

    #[test]
    fn delegate_not_found_displays_path() {
        let err = BootstrapError::DelegateNotFound {
            path: PathBuf::from("/opt/gas/git-auto-switch"),
        };
        assert!(err.to_string().contains("/opt/gas/git-auto-switch"));
    }

    #[test]
    fn delegate_spawn_failed_keeps_source() {
        use std::error::Error as _;

        let err = BootstrapError::DelegateSpawnFailed {
            path: PathBuf::from("/x"),
            source: std::io::Error::other("boom"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BootstrapError = io_err.into();
        assert!(matches!(err, BootstrapError::Io(_)));
    }

    #[test]
    fn anyhow_context_is_kept() {
        use anyhow::Context as _;

        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("no such file"));
        let err: BootstrapError = result
            .context("cannot locate the bootstrapper executable")
            .unwrap_err()
            .into();

        assert!(matches!(err, BootstrapError::Other(_)));
        assert_eq!(err.to_string(), "cannot locate the bootstrapper executable");
    }
}
