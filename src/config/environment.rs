//! Environment-variable configuration.
//!
//! | Variable | Effect |
//! |---|---|
//! | `GAS_DELEGATE` | Path to the delegate script, overriding the install layout |
//! | `GAS_DEBUG` | Debug logging unless empty, `0` or `false` |
//! | `GAS_LOG` | Tracing filter directive (`RUST_LOG` is the fallback) |
//! | `NO_COLOR` | Plain output |

use std::env::VarError;
use std::path::PathBuf;

/// Filter used when nothing else is configured.
pub const DEFAULT_LOG_FILTER: &str = "gas_bootstrap=warn,git_auto_switch=warn";

const DEBUG_LOG_FILTER: &str = "gas_bootstrap=debug,git_auto_switch=debug";

/// Settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Explicit delegate location.
    pub delegate_override: Option<PathBuf>,
    /// Verbose logging.
    pub debug: bool,
    /// Filter directive from `GAS_LOG` or `RUST_LOG`.
    pub log_directive: Option<String>,
    /// Disable styling.
    pub no_color: bool,
}

impl BootstrapConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key))
    }

    /// Read configuration with a custom env var lookup (for testing).
    pub fn from_env_with<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let non_empty = |key: &str| env_fn(key).ok().filter(|v| !v.trim().is_empty());

        let debug = non_empty("GAS_DEBUG")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false"))
            .unwrap_or(false);

        Self {
            delegate_override: non_empty("GAS_DELEGATE").map(PathBuf::from),
            debug,
            log_directive: non_empty("GAS_LOG").or_else(|| non_empty("RUST_LOG")),
            // NO_COLOR is honored whenever set, even empty.
            no_color: env_fn("NO_COLOR").is_ok(),
        }
    }

    /// The tracing filter to install.
    ///
    /// Debug mode wins over any directive.
    pub fn log_filter(&self) -> &str {
        if self.debug {
            DEBUG_LOG_FILTER
        } else {
            self.log_directive.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
        }
    }
}
