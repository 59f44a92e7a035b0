//! Dependency evaluation.
//!
//! Probes each catalog entry with one captured subprocess. A tool that
//! can't be spawned or exits non-zero is simply absent; evaluation itself
//! never fails.

use super::registry::DependencySpec;
use super::status::{DependencyStatus, Presence};
use crate::shell::CommandRunner;

/// Probe a single dependency.
pub fn check_dependency(spec: &DependencySpec, runner: &mut dyn CommandRunner) -> DependencyStatus {
    let command = spec.probe_command();

    let presence = match runner.capture(&command) {
        Ok(result) if result.success() => Presence::Present {
            version: spec.extract_version(&result.combined_output()),
        },
        Ok(result) => {
            tracing::debug!("{} exited with {:?}", command, result.exit_code);
            Presence::Absent
        }
        Err(e) => {
            tracing::debug!("{} could not run: {}", command, e);
            Presence::Absent
        }
    };

    DependencyStatus {
        spec: spec.clone(),
        presence,
    }
}

/// Probe every dependency, in catalog order.
pub fn check_all(
    specs: &[DependencySpec],
    runner: &mut dyn CommandRunner,
) -> Vec<DependencyStatus> {
    specs
        .iter()
        .map(|spec| check_dependency(spec, runner))
        .collect()
}

/// The statuses of dependencies that are not installed.
pub fn missing(statuses: &[DependencyStatus]) -> Vec<DependencyStatus> {
    statuses.iter().filter(|s| !s.installed()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::registry::{find, CATALOG};
    use crate::shell::{MockOutcome, MockRunner, SystemRunner};

    #[test]
    fn present_tool_reports_version() {
        let mut runner = MockRunner::new();
        runner.on("git --version", MockOutcome::success("git version 2.43.0\n"));

        let status = check_dependency(find("git").unwrap(), &mut runner);
        assert_eq!(
            status.presence,
            Presence::Present {
                version: Some("2.43.0".to_string())
            }
        );
    }

    #[test]
    fn unparseable_version_is_still_installed() {
        let mut runner = MockRunner::new();
        runner.on("jq --version", MockOutcome::success("jq development build\n"));

        let status = check_dependency(find("jq").unwrap(), &mut runner);
        assert!(status.installed());
        assert_eq!(status.version_label(), "unknown");
    }

    #[test]
    fn nonzero_exit_is_absent() {
        let mut runner = MockRunner::new();
        runner.on("jq --version", MockOutcome::exit(127));

        let status = check_dependency(find("jq").unwrap(), &mut runner);
        assert_eq!(status.presence, Presence::Absent);
    }

    #[test]
    fn spawn_errors_are_absent() {
        let mut runner = MockRunner::new();
        runner.on(
            "bash --version",
            MockOutcome::SpawnError(std::io::ErrorKind::PermissionDenied),
        );

        let statuses = check_all(CATALOG, &mut runner);
        assert_eq!(statuses.len(), 3);
        assert!(statuses.iter().all(|s| !s.installed()));
    }

    #[test]
    fn check_all_keeps_catalog_order() {
        let mut runner = MockRunner::new();
        runner.on("jq --version", MockOutcome::success("jq-1.7\n"));

        let statuses = check_all(CATALOG, &mut runner);
        let names: Vec<_> = statuses.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["bash", "git", "jq"]);
        assert_eq!(runner.calls().len(), 3);
    }

    #[test]
    fn missing_filters_installed() {
        let mut runner = MockRunner::new();
        runner.on("bash --version", MockOutcome::success("GNU bash, version 5.2.15\n"));

        let statuses = check_all(CATALOG, &mut runner);
        let gaps: Vec<_> = missing(&statuses).iter().map(|s| s.name()).collect();
        assert_eq!(gaps, vec!["git", "jq"]);
    }

    #[test]
    fn real_probe_of_nonexistent_tool_is_absent() {
        let spec = DependencySpec {
            name: "ghost",
            probe_program: "this-command-does-not-exist-12345",
            probe_args: &["--version"],
            version_pattern: r"(\d+)",
            min_version: None,
            package: "ghost",
        };

        let statuses = check_all(&[spec], &mut SystemRunner);
        assert_eq!(statuses[0].presence, Presence::Absent);
    }
}
