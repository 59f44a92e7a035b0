//! Dependency status types.
//!
//! Each probe produces a [`DependencyStatus`]. Statuses are computed fresh
//! for every evaluation and never stored.

use super::registry::DependencySpec;

/// Whether a tool answered its probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    /// Probe exited 0. `version` is `None` when the output didn't match the pattern.
    Present { version: Option<String> },
    /// Probe could not be spawned or exited non-zero.
    Absent,
}

/// The result of probing a single dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyStatus {
    pub spec: DependencySpec,
    pub presence: Presence,
}

impl DependencyStatus {
    /// Whether the tool is installed.
    pub fn installed(&self) -> bool {
        matches!(self.presence, Presence::Present { .. })
    }

    /// Dependency name.
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Version text for display: the version, `unknown`, or `not installed`.
    pub fn version_label(&self) -> &str {
        match &self.presence {
            Presence::Present {
                version: Some(version),
            } => version,
            Presence::Present { version: None } => "unknown",
            Presence::Absent => "not installed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::registry::find;

    fn status(presence: Presence) -> DependencyStatus {
        DependencyStatus {
            spec: find("git").unwrap().clone(),
            presence,
        }
    }

    #[test]
    fn present_with_version() {
        let s = status(Presence::Present {
            version: Some("2.43.0".to_string()),
        });
        assert!(s.installed());
        assert_eq!(s.version_label(), "2.43.0");
    }

    #[test]
    fn present_without_version_is_unknown() {
        let s = status(Presence::Present { version: None });
        assert!(s.installed());
        assert_eq!(s.version_label(), "unknown");
    }

    #[test]
    fn absent_is_not_installed() {
        let s = status(Presence::Absent);
        assert!(!s.installed());
        assert_eq!(s.version_label(), "not installed");
        assert_eq!(s.name(), "git");
    }
}
