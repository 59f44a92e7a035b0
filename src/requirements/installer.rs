//! Install plan execution.
//!
//! Runs each planned action in order with the terminal handed to the
//! child, so package managers can prompt for a password. The first
//! failing action stops the plan. Nothing is rolled back.

use std::io;

use super::planner::{InstallAction, InstallPlan};
use crate::detection::{PackageManager, PlatformInfo};
use crate::error::BootstrapError;
use crate::shell::{CommandResult, CommandRunner, CommandSpec};
use crate::ui::UserInterface;

/// Result of one dependency's install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub dependency: String,
    pub succeeded: bool,
}

/// Aggregated result of executing a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSummary {
    /// One entry per dependency in the plan, in plan order.
    pub outcomes: Vec<InstallOutcome>,
    /// Platform after execution; carries a freshly bootstrapped manager.
    pub platform: PlatformInfo,
    /// The action that stopped the plan.
    pub failed_action: Option<InstallAction>,
}

impl InstallSummary {
    /// Whether every action succeeded.
    pub fn is_success(&self) -> bool {
        self.failed_action.is_none()
    }

    /// Dependencies newly installed by this run.
    pub fn installed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.succeeded)
            .map(|o| o.dependency.as_str())
            .collect()
    }

    /// Dependencies that failed or were never attempted.
    pub fn not_installed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.succeeded)
            .map(|o| o.dependency.as_str())
            .collect()
    }

    /// The failure as an error, if the plan stopped early.
    pub fn error(&self) -> Option<BootstrapError> {
        self.failed_action
            .as_ref()
            .map(|action| BootstrapError::InstallActionFailed {
                dependency: match action {
                    InstallAction::BootstrapManager(manager) => manager.display_name().to_string(),
                    InstallAction::Install { dependency, .. } => dependency.clone(),
                },
            })
    }
}

/// Executes install plans.
pub struct Installer<'a> {
    runner: &'a mut dyn CommandRunner,
    ui: &'a mut dyn UserInterface,
    elevated: bool,
}

impl<'a> Installer<'a> {
    /// Create an installer. `elevated` drops the `sudo` prefix.
    pub fn new(
        runner: &'a mut dyn CommandRunner,
        ui: &'a mut dyn UserInterface,
        elevated: bool,
    ) -> Self {
        Self {
            runner,
            ui,
            elevated,
        }
    }

    /// Run every action of `plan`, stopping at the first failure.
    pub fn execute(&mut self, plan: &InstallPlan, platform: &PlatformInfo) -> InstallSummary {
        let mut platform = platform.clone();
        let mut outcomes = Vec::new();
        let mut failed_action = None;

        for (index, action) in plan.actions.iter().enumerate() {
            let succeeded = match action {
                InstallAction::BootstrapManager(manager) => {
                    let ok = self.bootstrap(*manager);
                    if ok {
                        platform = platform.with_package_manager(*manager);
                    }
                    ok
                }
                InstallAction::Install {
                    dependency,
                    package,
                    manager,
                } => self.install(dependency, package, *manager),
            };

            if !succeeded {
                outcomes.extend(
                    plan.actions[index..]
                        .iter()
                        .filter_map(InstallAction::dependency)
                        .map(|dependency| InstallOutcome {
                            dependency: dependency.to_string(),
                            succeeded: false,
                        }),
                );
                failed_action = Some(action.clone());
                break;
            }

            if let Some(dependency) = action.dependency() {
                outcomes.push(InstallOutcome {
                    dependency: dependency.to_string(),
                    succeeded: true,
                });
            }
        }

        let summary = InstallSummary {
            outcomes,
            platform,
            failed_action,
        };

        self.ui.message("");
        if summary.is_success() {
            self.ui.success(&format!(
                "All dependencies installed: {}",
                summary.installed().join(", ")
            ));
        } else {
            self.ui.error("Failed to install all dependencies");
        }

        summary
    }

    fn bootstrap(&mut self, manager: PackageManager) -> bool {
        let name = manager.display_name();
        let Some(command) = manager.bootstrap_command() else {
            self.ui.error(&format!("{} cannot be installed automatically", name));
            return false;
        };

        self.ui.step(&format!("Installing {}...", name));
        tracing::info!("Bootstrapping {}", name);

        if self.run_succeeds(&command) {
            self.ui.success(&format!("{} installed", name));
            true
        } else {
            self.ui.error(&format!("Failed to install {}", name));
            false
        }
    }

    fn install(&mut self, dependency: &str, package: &str, manager: PackageManager) -> bool {
        self.ui.step(&format!("Installing {}...", dependency));
        tracing::info!("Installing {} with {}", package, manager);

        let commands = manager.install_commands(package, self.elevated);
        if let Some(prepare) = &commands.prepare {
            match self.run(prepare) {
                Ok(result) if result.success() => {}
                Ok(result) => tracing::warn!(
                    "{} exited with {:?}; continuing",
                    prepare,
                    result.exit_code
                ),
                Err(e) => tracing::warn!("{} could not run: {}; continuing", prepare, e),
            }
        }

        if self.run_succeeds(&commands.install) {
            self.ui.success(&format!("Installed {}", dependency));
            true
        } else {
            self.ui.error(&format!("Failed to install {}", dependency));
            false
        }
    }

    fn run_succeeds(&mut self, command: &CommandSpec) -> bool {
        match self.run(command) {
            Ok(result) => {
                if !result.success() {
                    tracing::debug!("{} exited with {:?}", command, result.exit_code);
                }
                result.success()
            }
            Err(e) => {
                tracing::debug!("{} could not run: {}", command, e);
                false
            }
        }
    }

    fn run(&mut self, command: &CommandSpec) -> io::Result<CommandResult> {
        let lease = self.ui.lease_terminal();
        self.runner.run_interactive(command, &lease)
    }
}
