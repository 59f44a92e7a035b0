//! Human-readable run output.
//!
//! Everything the bootstrapper prints between evaluation and hand-off.
//! Nothing here is shown when all dependencies are already present.

use crate::detection::{PackageManager, PlatformInfo, HOMEBREW_INSTALL_URL};
use crate::error::BootstrapError;
use crate::requirements::{DependencyStatus, InstallPlan};
use crate::ui::{hints, UserInterface};

/// Banner title.
pub const TITLE: &str = "git-auto-switch";

/// Question asked before any action runs.
pub const CONFIRM_PROMPT: &str = "  Proceed with installation? [Y/n] ";

const NAME_WIDTH: usize = 8;

/// Show the banner, the detected platform and every dependency's status.
pub fn show_system_status(
    ui: &mut dyn UserInterface,
    platform: &PlatformInfo,
    statuses: &[DependencyStatus],
) {
    ui.show_header(TITLE);
    ui.show_section("System Status");
    ui.message(&format!("  Operating System: {}", platform.os));
    ui.message(&format!(
        "  Package Manager:  {}",
        platform.package_manager_label()
    ));
    ui.message("");
    ui.message("  Required Dependencies:");
    ui.message("");

    for status in statuses {
        let line = dependency_line(status);
        if status.installed() {
            ui.success(&line);
        } else {
            ui.error(&line);
        }
    }
}

/// One dependency row, e.g. `bash     v5.2 (required: 3.2+)`.
pub fn dependency_line(status: &DependencyStatus) -> String {
    let version = if status.installed() {
        format!("v{}", status.version_label())
    } else {
        status.version_label().to_string()
    };

    match status.spec.requirement_hint() {
        Some(hint) => format!(
            "{:<width$} {} ({})",
            status.name(),
            version,
            hint,
            width = NAME_WIDTH
        ),
        None => format!("{:<width$} {}", status.name(), version, width = NAME_WIDTH),
    }
}

/// List the actions about to run.
pub fn show_plan(ui: &mut dyn UserInterface, plan: &InstallPlan) {
    ui.show_section("Installation Plan");
    ui.message("  Actions to perform:");
    ui.message("");
    for action in &plan.actions {
        ui.step(&action.to_string());
    }
    ui.message("");
}

/// Explain how to install `missing` by hand when nothing can do it for us.
pub fn show_manual_instructions(
    ui: &mut dyn UserInterface,
    platform: &PlatformInfo,
    missing: &[String],
) {
    ui.show_section("Installing Dependencies");
    ui.error(&format!(
        "No supported package manager found on {}",
        platform.os
    ));
    ui.message("");
    ui.message("  Please install the following manually:");
    for dependency in missing {
        ui.message(&format!("    - {}", dependency));
    }
}

/// Homebrew instructions after a failed bootstrap.
pub fn show_homebrew_instructions(ui: &mut dyn UserInterface, missing: &[&str]) {
    ui.message("");
    ui.message("  Please install manually:");
    ui.message(&format!(
        "    /bin/bash -c \"$(curl -fsSL {})\"",
        HOMEBREW_INSTALL_URL
    ));
    for dependency in missing {
        ui.message(&format!(
            "    {} install {}",
            PackageManager::Brew.name(),
            dependency
        ));
    }
}

/// Closing section after a successful install.
pub fn show_ready(ui: &mut dyn UserInterface) {
    ui.show_section("Ready to Use");
    ui.success("All dependencies satisfied");
    ui.message("");
    ui.message("  Quick start:");
    ui.message("");
    for line in hints::quick_start_lines() {
        ui.message(&format!("  {}", line));
    }
    ui.message("");
}

/// Report a terminal error with its follow-up hint.
pub fn show_error(ui: &mut dyn UserInterface, err: &BootstrapError) {
    ui.message("");
    ui.error(&err.to_string());
    if let Some(hint) = hints::for_error(err) {
        ui.show_hint(&hint);
    }
}
