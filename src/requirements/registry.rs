//! Dependency catalog.
//!
//! Defines which external tools the delegate needs, how to probe for each
//! one, and how to read a version out of the probe's output.

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use regex::Regex;

use crate::shell::CommandSpec;

/// Compiled version patterns, keyed by pattern text.
static VERSION_PATTERNS: LazyLock<Mutex<HashMap<&'static str, Regex>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn version_regex(pattern: &'static str) -> Result<Regex, regex::Error> {
    let mut cache = VERSION_PATTERNS.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(re) = cache.get(pattern) {
        return Ok(re.clone());
    }
    let re = Regex::new(pattern)?;
    cache.insert(pattern, re.clone());
    Ok(re)
}

/// A required external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    /// Tool name (e.g., "git").
    pub name: &'static str,
    /// Probe program.
    pub probe_program: &'static str,
    /// Probe arguments.
    pub probe_args: &'static [&'static str],
    /// Regex applied to the probe output; capture group 1 is the version.
    pub version_pattern: &'static str,
    /// Advisory minimum version. Shown to the user, never enforced.
    pub min_version: Option<&'static str>,
    /// Package name handed to the package manager.
    pub package: &'static str,
}

/// The tools `git-auto-switch` needs.
pub const CATALOG: &[DependencySpec] = &[
    DependencySpec {
        name: "bash",
        probe_program: "bash",
        probe_args: &["--version"],
        version_pattern: r"version (\d+\.\d+)",
        min_version: Some("3.2"),
        package: "bash",
    },
    DependencySpec {
        name: "git",
        probe_program: "git",
        probe_args: &["--version"],
        version_pattern: r"git version (\S+)",
        min_version: Some("2.13"),
        package: "git",
    },
    DependencySpec {
        name: "jq",
        probe_program: "jq",
        probe_args: &["--version"],
        version_pattern: r"jq-(\S+)",
        min_version: None,
        package: "jq",
    },
];

impl DependencySpec {
    /// Command that probes for this tool.
    pub fn probe_command(&self) -> CommandSpec {
        CommandSpec::new(self.probe_program).args(self.probe_args)
    }

    /// Extract the version from probe output, if the pattern matches.
    pub fn extract_version(&self, output: &str) -> Option<String> {
        let re = match version_regex(self.version_pattern) {
            Ok(re) => re,
            Err(e) => {
                tracing::warn!("Bad version pattern for {}: {}", self.name, e);
                return None;
            }
        };

        re.captures(output)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Advisory requirement text, e.g. `required: 2.13+`.
    pub fn requirement_hint(&self) -> Option<String> {
        self.min_version.map(|v| format!("required: {}+", v))
    }
}

/// Look up a catalog entry by name.
pub fn find(name: &str) -> Option<&'static DependencySpec> {
    CATALOG.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_bash_git_jq() {
        let names: Vec<_> = CATALOG.iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["bash", "git", "jq"]);
    }

    #[test]
    fn all_patterns_compile() {
        for spec in CATALOG {
            assert!(Regex::new(spec.version_pattern).is_ok(), "{}", spec.name);
        }
    }

    #[test]
    fn bash_version_from_banner() {
        let bash = find("bash").unwrap();
        let output = "GNU bash, version 5.2.21(1)-release (x86_64-pc-linux-gnu)\n";
        assert_eq!(bash.extract_version(output), Some("5.2".to_string()));
    }

    #[test]
    fn git_version() {
        let git = find("git").unwrap();
        assert_eq!(
            git.extract_version("git version 2.39.3 (Apple Git-145)\n"),
            Some("2.39.3".to_string())
        );
    }

    #[test]
    fn jq_version() {
        let jq = find("jq").unwrap();
        assert_eq!(jq.extract_version("jq-1.7.1\n"), Some("1.7.1".to_string()));
    }

    #[test]
    fn unmatched_output_has_no_version() {
        let jq = find("jq").unwrap();
        assert_eq!(jq.extract_version("something else"), None);
    }

    #[test]
    fn probe_command_renders() {
        assert_eq!(find("git").unwrap().probe_command().to_string(), "git --version");
    }

    #[test]
    fn requirement_hint_only_with_minimum() {
        assert_eq!(
            find("bash").unwrap().requirement_hint(),
            Some("required: 3.2+".to_string())
        );
        assert_eq!(find("jq").unwrap().requirement_hint(), None);
    }

    #[test]
    fn version_patterns_compile_once() {
        let git = find("git").unwrap();
        git.extract_version("git version 2.40.0");
        git.extract_version("git version 2.41.0");

        let first = version_regex(git.version_pattern).unwrap();
        let second = version_regex(git.version_pattern).unwrap();
        assert_eq!(first.as_str(), second.as_str());
        assert!(VERSION_PATTERNS
            .lock()
            .unwrap()
            .contains_key(git.version_pattern));
    }

    #[test]
    fn bad_pattern_yields_no_version() {
        let broken = DependencySpec {
            version_pattern: r"version (\d+",
            ..find("jq").unwrap().clone()
        };
        assert_eq!(broken.extract_version("version 1"), None);
    }

    #[test]
    fn find_unknown_is_none() {
        assert!(find("ruby").is_none());
    }
}
