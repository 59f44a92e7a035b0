//! Install planning.
//!
//! Turns the gaps from an evaluation plus the detected platform into an
//! ordered list of actions. Planning does no I/O.

use std::fmt;

use super::status::DependencyStatus;
use crate::detection::{PackageManager, PlatformInfo};

/// One step of an install plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallAction {
    /// Install the package manager itself.
    BootstrapManager(PackageManager),
    /// Install one dependency through a package manager.
    Install {
        dependency: String,
        package: String,
        manager: PackageManager,
    },
}

impl InstallAction {
    /// The dependency this action installs, if any.
    pub fn dependency(&self) -> Option<&str> {
        match self {
            Self::BootstrapManager(_) => None,
            Self::Install { dependency, .. } => Some(dependency),
        }
    }
}

impl fmt::Display for InstallAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BootstrapManager(manager) => write!(f, "Install {}", manager.display_name()),
            Self::Install {
                dependency,
                manager,
                ..
            } => write!(f, "Install {} using {}", dependency, manager),
        }
    }
}

/// Ordered actions for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallPlan {
    /// Actions, executed strictly in order.
    pub actions: Vec<InstallAction>,
    /// Dependencies no package manager can install here.
    pub manual: Vec<String>,
}

impl InstallPlan {
    /// Whether the plan has nothing to do.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.manual.is_empty()
    }

    /// Whether the plan can be executed at all.
    pub fn is_satisfiable(&self) -> bool {
        self.manual.is_empty()
    }

    /// Whether the first action installs the package manager.
    pub fn starts_with_bootstrap(&self) -> bool {
        matches!(self.actions.first(), Some(InstallAction::BootstrapManager(_)))
    }

    /// Names of the dependencies the actions install, in order.
    pub fn dependencies(&self) -> Vec<&str> {
        self.actions
            .iter()
            .filter_map(InstallAction::dependency)
            .collect()
    }
}

/// Plan installs for the `missing` dependencies on `platform`.
pub fn plan(missing: &[DependencyStatus], platform: &PlatformInfo) -> InstallPlan {
    if missing.is_empty() {
        return InstallPlan::default();
    }

    let (manager, bootstrap) = match (
        platform.package_manager,
        platform.os.bootstrappable_manager(),
    ) {
        (Some(manager), _) => (manager, None),
        (None, Some(manager)) => (manager, Some(InstallAction::BootstrapManager(manager))),
        (None, None) => {
            return InstallPlan {
                actions: Vec::new(),
                manual: missing.iter().map(|s| s.name().to_string()).collect(),
            };
        }
    };

    let installs = missing.iter().map(|status| InstallAction::Install {
        dependency: status.name().to_string(),
        package: status.spec.package.to_string(),
        manager,
    });

    InstallPlan {
        actions: bootstrap.into_iter().chain(installs).collect(),
        manual: Vec::new(),
    }
}
