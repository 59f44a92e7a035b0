//! Runtime configuration.
//!
//! The bootstrapper defines no flags of its own: argv belongs to the
//! delegate. Everything tunable comes from the environment and is read
//! once at startup in [`environment`].
//!
//! # Example
//!
//! ```
//! use gas_bootstrap::config::BootstrapConfig;
//!
//! let config = BootstrapConfig::from_env_with(|key| match key {
//!     "GAS_DEBUG" => Ok("1".to_string()),
//!     _ => Err(std::env::VarError::NotPresent),
//! });
//!
//! assert!(config.debug);
//! assert!(config.log_filter().contains("gas_bootstrap=debug"));
//! ```

pub mod environment;

pub use environment::{BootstrapConfig, DEFAULT_LOG_FILTER};
