//! One bootstrapper run, from evaluation to hand-off.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use crate::delegate;
use crate::detection::{detect_platform, PlatformInfo};
use crate::error::{BootstrapError, Result};
use crate::requirements::{
    check_all, missing, planner, DependencySpec, DependencyStatus, InstallAction, InstallPlan,
    Installer, CATALOG,
};
use crate::shell::{is_elevated, CommandRunner};
use crate::ui::{confirm, UserInterface};

use super::report;

/// How a run ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The delegate ran and exited with this code.
    Delegated { exit_code: i32 },
    /// The user declined installation.
    Aborted,
}

impl RunOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Delegated { exit_code } => *exit_code,
            Self::Aborted => 0,
        }
    }

    /// Exit status for the process. Codes outside `0..=255` become 1.
    pub fn status_byte(&self) -> u8 {
        u8::try_from(self.exit_code()).unwrap_or(1)
    }
}

/// Run state. `Invoking`, `Aborted` and `Failed` are terminal.
#[derive(Debug)]
enum RunState {
    Idle,
    Evaluating,
    GapsFound {
        statuses: Vec<DependencyStatus>,
        gaps: Vec<DependencyStatus>,
    },
    Planning {
        gaps: Vec<DependencyStatus>,
        platform: PlatformInfo,
    },
    AwaitingConfirmation {
        plan: InstallPlan,
        platform: PlatformInfo,
    },
    Executing {
        plan: InstallPlan,
        platform: PlatformInfo,
    },
    ReEvaluating,
    Invoking,
    Aborted,
    Failed(BootstrapError),
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Evaluating => "evaluating",
            Self::GapsFound { .. } => "gaps-found",
            Self::Planning { .. } => "planning",
            Self::AwaitingConfirmation { .. } => "awaiting-confirmation",
            Self::Executing { .. } => "executing",
            Self::ReEvaluating => "re-evaluating",
            Self::Invoking => "invoking",
            Self::Aborted => "aborted",
            Self::Failed(_) => "failed",
        };
        f.write_str(name)
    }
}

/// Drives a run through its states.
///
/// # Example
///
/// ```
/// use gas_bootstrap::runner::{Bootstrapper, RunOutcome};
/// use gas_bootstrap::shell::MockRunner;
/// use gas_bootstrap::ui::MockUI;
///
/// let mut runner = MockRunner::new();
/// let mut ui = MockUI::new();
///
/// let result = Bootstrapper::new(&mut runner, &mut ui, "/nonexistent/git-auto-switch".into())
///     .run(&[]);
/// assert!(result.is_err());
/// ```
pub struct Bootstrapper<'a> {
    catalog: &'a [DependencySpec],
    runner: &'a mut dyn CommandRunner,
    ui: &'a mut dyn UserInterface,
    delegate: PathBuf,
    elevated: bool,
    platform_probe: Box<dyn Fn() -> PlatformInfo + 'a>,
}

impl<'a> Bootstrapper<'a> {
    /// Create a bootstrapper for the standard catalog and the real host.
    pub fn new(
        runner: &'a mut dyn CommandRunner,
        ui: &'a mut dyn UserInterface,
        delegate: PathBuf,
    ) -> Self {
        Self {
            catalog: CATALOG,
            runner,
            ui,
            delegate,
            elevated: is_elevated(),
            platform_probe: Box::new(detect_platform),
        }
    }

    /// Use a different dependency catalog.
    pub fn with_catalog(mut self, catalog: &'a [DependencySpec]) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace platform detection (for testing).
    pub fn with_platform_probe(mut self, probe: impl Fn() -> PlatformInfo + 'a) -> Self {
        self.platform_probe = Box::new(probe);
        self
    }

    /// Override whether installs need `sudo`.
    pub fn with_elevated(mut self, elevated: bool) -> Self {
        self.elevated = elevated;
        self
    }

    /// Run to completion, forwarding `args` to the delegate.
    pub fn run(&mut self, args: &[OsString]) -> Result<RunOutcome> {
        let mut state = RunState::Idle;
        loop {
            tracing::debug!("Run state: {}", state);
            state = match state {
                RunState::Invoking => {
                    let exit_code =
                        delegate::invoke(&self.delegate, args, &mut *self.runner, &mut *self.ui)?;
                    return Ok(RunOutcome::Delegated { exit_code });
                }
                RunState::Aborted => return Ok(RunOutcome::Aborted),
                RunState::Failed(err) => return Err(err),
                other => self.advance(other).unwrap_or_else(RunState::Failed),
            };
        }
    }

    fn advance(&mut self, state: RunState) -> Result<RunState> {
        let next = match state {
            RunState::Idle => {
                delegate::ensure_present(&self.delegate)?;
                RunState::Evaluating
            }
            RunState::Evaluating => {
                let statuses = check_all(self.catalog, &mut *self.runner);
                let gaps = missing(&statuses);
                if gaps.is_empty() {
                    RunState::Invoking
                } else {
                    RunState::GapsFound { statuses, gaps }
                }
            }
            RunState::GapsFound { statuses, gaps } => {
                let platform = (self.platform_probe)();
                report::show_system_status(&mut *self.ui, &platform, &statuses);
                RunState::Planning { gaps, platform }
            }
            RunState::Planning { gaps, platform } => {
                let plan = planner::plan(&gaps, &platform);
                if !plan.is_satisfiable() {
                    report::show_manual_instructions(&mut *self.ui, &platform, &plan.manual);
                    return Err(BootstrapError::PlatformUnsupported {
                        os: platform.os.to_string(),
                        missing: plan.manual,
                    });
                }
                report::show_plan(&mut *self.ui, &plan);
                RunState::AwaitingConfirmation { plan, platform }
            }
            RunState::AwaitingConfirmation { plan, platform } => {
                if confirm(&mut *self.ui, report::CONFIRM_PROMPT)? {
                    RunState::Executing { plan, platform }
                } else {
                    self.ui.message("");
                    self.ui.warning("Installation cancelled");
                    RunState::Aborted
                }
            }
            RunState::Executing { plan, platform } => {
                self.ui.show_section("Installing Dependencies");
                let summary = Installer::new(&mut *self.runner, &mut *self.ui, self.elevated)
                    .execute(&plan, &platform);
                tracing::debug!(
                    "Package manager after install: {}",
                    summary.platform.package_manager_label()
                );

                if let Some(InstallAction::BootstrapManager(_)) = &summary.failed_action {
                    report::show_homebrew_instructions(&mut *self.ui, &summary.not_installed());
                }
                match summary.error() {
                    Some(err) => return Err(err),
                    None => RunState::ReEvaluating,
                }
            }
            RunState::ReEvaluating => {
                let mut spinner = self.ui.start_spinner("Verifying installation");
                let statuses = check_all(self.catalog, &mut *self.runner);
                let still_missing: Vec<String> = missing(&statuses)
                    .iter()
                    .map(|s| s.name().to_string())
                    .collect();

                if still_missing.is_empty() {
                    spinner.finish_success("Installation verified");
                    report::show_ready(&mut *self.ui);
                    RunState::Invoking
                } else {
                    spinner.finish_error("Verification failed");
                    return Err(BootstrapError::PostInstallVerificationFailed {
                        missing: still_missing,
                    });
                }
            }
            terminal @ (RunState::Invoking | RunState::Aborted | RunState::Failed(_)) => terminal,
        };
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{OsFamily, PackageManager};
    use crate::shell::{MockOutcome, MockRunner};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn delegate(temp: &TempDir) -> PathBuf {
        let path = temp.path().join("git-auto-switch");
        fs::write(&path, "#!/bin/bash\n").unwrap();
        path
    }

    fn all_present(runner: &mut MockRunner) {
        runner.on(
            "bash --version",
            MockOutcome::success("GNU bash, version 5.2.15(1)-release\n"),
        );
        runner.on("git --version", MockOutcome::success("git version 2.43.0\n"));
        runner.on("jq --version", MockOutcome::success("jq-1.7.1\n"));
    }

    fn fedora() -> PlatformInfo {
        PlatformInfo::new(OsFamily::RedHat, Some(PackageManager::Dnf))
    }

    #[test]
    fn outcome_exit_codes() {
        assert_eq!(RunOutcome::Aborted.exit_code(), 0);
        assert_eq!(RunOutcome::Delegated { exit_code: 4 }.exit_code(), 4);
    }

    #[test]
    fn out_of_range_exit_codes_report_failure() {
        assert_eq!(RunOutcome::Delegated { exit_code: 130 }.status_byte(), 130);
        assert_eq!(RunOutcome::Aborted.status_byte(), 0);
        assert_eq!(RunOutcome::Delegated { exit_code: -1073741819 }.status_byte(), 1);
        assert_eq!(RunOutcome::Delegated { exit_code: 256 }.status_byte(), 1);
    }

    #[test]
    fn state_names() {
        let waiting = RunState::AwaitingConfirmation {
            plan: InstallPlan::default(),
            platform: fedora(),
        };
        assert_eq!(waiting.to_string(), "awaiting-confirmation");
        assert_eq!(RunState::ReEvaluating.to_string(), "re-evaluating");
    }

    #[test]
    fn missing_delegate_fails_before_probing() {
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();

        let err = Bootstrapper::new(&mut runner, &mut ui, "/nonexistent/gas".into())
            .run(&[])
            .unwrap_err();

        assert!(matches!(err, BootstrapError::DelegateNotFound { .. }));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn satisfied_run_skips_platform_detection() {
        let temp = TempDir::new().unwrap();
        let path = delegate(&temp);
        let mut runner = MockRunner::new();
        all_present(&mut runner);
        runner.on(&path.display().to_string(), MockOutcome::exit(0));
        let mut ui = MockUI::new();

        let outcome = Bootstrapper::new(&mut runner, &mut ui, path)
            .with_platform_probe(|| panic!("platform should not be probed"))
            .run(&[])
            .unwrap();

        assert_eq!(outcome, RunOutcome::Delegated { exit_code: 0 });
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn custom_catalog_limits_probes() {
        let temp = TempDir::new().unwrap();
        let path = delegate(&temp);
        let mut runner = MockRunner::new();
        runner.on("git --version", MockOutcome::success("git version 2.43.0\n"));
        runner.on(&path.display().to_string(), MockOutcome::exit(0));
        let mut ui = MockUI::new();
        let catalog = [crate::requirements::registry::find("git").unwrap().clone()];

        let outcome = Bootstrapper::new(&mut runner, &mut ui, path)
            .with_catalog(&catalog)
            .run(&[])
            .unwrap();

        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(runner.calls().len(), 2);
    }

    #[test]
    fn prompt_failure_is_an_error() {
        struct ClosedTerminal(MockUI);

        impl UserInterface for ClosedTerminal {
            fn message(&mut self, msg: &str) {
                self.0.message(msg)
            }
            fn step(&mut self, msg: &str) {
                self.0.step(msg)
            }
            fn success(&mut self, msg: &str) {
                self.0.success(msg)
            }
            fn warning(&mut self, msg: &str) {
                self.0.warning(msg)
            }
            fn error(&mut self, msg: &str) {
                self.0.error(msg)
            }
            fn show_header(&mut self, title: &str) {
                self.0.show_header(title)
            }
            fn show_section(&mut self, title: &str) {
                self.0.show_section(title)
            }
            fn show_hint(&mut self, hint: &str) {
                self.0.show_hint(hint)
            }
            fn read_line(&mut self, _question: &str) -> Result<String> {
                Err(BootstrapError::PromptFailed {
                    message: "closed".into(),
                })
            }
            fn start_spinner(&mut self, message: &str) -> Box<dyn crate::ui::SpinnerHandle> {
                self.0.start_spinner(message)
            }
            fn is_interactive(&self) -> bool {
                true
            }
        }

        let temp = TempDir::new().unwrap();
        let mut runner = MockRunner::new();
        let mut ui = ClosedTerminal(MockUI::new());

        let err = Bootstrapper::new(&mut runner, &mut ui, delegate(&temp))
            .with_platform_probe(fedora)
            .run(&[])
            .unwrap_err();

        assert!(matches!(err, BootstrapError::PromptFailed { .. }));
        assert!(runner.interactive_calls().is_empty());
    }
}
