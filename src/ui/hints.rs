//! Follow-up hint text.
//!
//! Suggests the next thing to try after a failure, and what to run once
//! everything is in place.

use crate::error::BootstrapError;

/// Commands shown once dependencies are satisfied, with their purpose.
pub const QUICK_START: &[(&str, &str)] = &[
    ("gas init", "First-time setup"),
    ("gas add", "Add a new GitHub account"),
    ("gas --help", "Show all commands"),
];

/// Quick start lines, aligned.
pub fn quick_start_lines() -> Vec<String> {
    QUICK_START
        .iter()
        .map(|(command, purpose)| format!("  {:<16}  # {}", command, purpose))
        .collect()
}

/// Hint for a package that is not installed correctly.
pub fn reinstall() -> &'static str {
    "The package may not be installed correctly. Try reinstalling: \
     npm uninstall -g git-auto-switch && npm install -g git-auto-switch"
}

/// Hint after tools were installed but still can't be found.
pub fn restart_shell() -> &'static str {
    "Open a new terminal so PATH picks up the new tools, then run the command again."
}

/// Suggested next action for an error, if there is one.
pub fn for_error(err: &BootstrapError) -> Option<String> {
    match err {
        BootstrapError::DelegateNotFound { .. } => Some(reinstall().to_string()),
        BootstrapError::DelegateInterpreterMissing { .. } => {
            Some("Make sure bash is installed and in your PATH".to_string())
        }
        BootstrapError::DelegatePermissionDenied { path } => {
            Some(format!("Try: chmod +x {}", path.display()))
        }
        BootstrapError::PostInstallVerificationFailed { .. } => Some(restart_shell().to_string()),
        BootstrapError::InstallActionFailed { .. } => {
            Some("Fix the error above, then run the command again.".to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn quick_start_lists_gas_commands() {
        let lines = quick_start_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("gas init"));
        assert!(lines[0].contains("# First-time setup"));
        assert!(lines[2].contains("gas --help"));
    }

    #[test]
    fn permission_hint_names_path() {
        let err = BootstrapError::DelegatePermissionDenied {
            path: PathBuf::from("/opt/gas/git-auto-switch"),
        };
        assert_eq!(
            for_error(&err).unwrap(),
            "Try: chmod +x /opt/gas/git-auto-switch"
        );
    }

    #[test]
    fn interpreter_hint_mentions_bash() {
        let err = BootstrapError::DelegateInterpreterMissing {
            path: PathBuf::from("/x"),
        };
        assert!(for_error(&err).unwrap().contains("bash"));
    }

    #[test]
    fn not_found_suggests_reinstall() {
        let err = BootstrapError::DelegateNotFound {
            path: PathBuf::from("/x"),
        };
        assert!(for_error(&err).unwrap().contains("reinstalling"));
    }

    #[test]
    fn verification_suggests_new_shell() {
        let err = BootstrapError::PostInstallVerificationFailed {
            missing: vec!["jq".into()],
        };
        assert!(for_error(&err).unwrap().contains("new terminal"));
    }

    #[test]
    fn platform_unsupported_has_no_hint() {
        let err = BootstrapError::PlatformUnsupported {
            os: "freebsd".into(),
            missing: vec!["jq".into()],
        };
        assert!(for_error(&err).is_none());
    }
}
