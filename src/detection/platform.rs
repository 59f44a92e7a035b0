//! Operating system and package manager detection.
//!
//! Detection never fails: an unrecognized OS is reported by its raw name,
//! and a Linux host without any known release marker is plain `Linux`.
//! Both resolve to no package manager, which means manual installation.

use std::fmt;
use std::path::Path;

use super::package_manager::PackageManager;
use crate::shell::command_on_path;

/// Operating system family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    MacOS,
    Debian,
    RedHat,
    Arch,
    Alpine,
    /// Linux without a recognized release marker.
    Linux,
    /// Anything else, carrying the platform name unmodified.
    Other(String),
}

/// Release marker files, checked in priority order.
const LINUX_MARKERS: &[(&str, OsFamily)] = &[
    ("/etc/debian_version", OsFamily::Debian),
    ("/etc/redhat-release", OsFamily::RedHat),
    ("/etc/arch-release", OsFamily::Arch),
    ("/etc/alpine-release", OsFamily::Alpine),
];

impl OsFamily {
    /// Name shown in the system status section.
    pub fn display_name(&self) -> &str {
        match self {
            Self::MacOS => "macOS",
            Self::Debian => "Debian/Ubuntu",
            Self::RedHat => "RHEL/CentOS/Fedora",
            Self::Arch => "Arch Linux",
            Self::Alpine => "Alpine Linux",
            Self::Linux => "Linux",
            Self::Other(name) => name,
        }
    }

    /// Package manager that can be installed from scratch on this family.
    pub fn bootstrappable_manager(&self) -> Option<PackageManager> {
        match self {
            Self::MacOS => Some(PackageManager::Brew),
            _ => None,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Host classification for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    pub os: OsFamily,
    pub package_manager: Option<PackageManager>,
}

impl PlatformInfo {
    /// Create platform info.
    pub fn new(os: OsFamily, package_manager: Option<PackageManager>) -> Self {
        Self {
            os,
            package_manager,
        }
    }

    /// Copy with a different effective package manager.
    pub fn with_package_manager(&self, manager: PackageManager) -> Self {
        Self {
            os: self.os.clone(),
            package_manager: Some(manager),
        }
    }

    /// Package manager name, or `none`.
    pub fn package_manager_label(&self) -> &'static str {
        self.package_manager.map(|m| m.name()).unwrap_or("none")
    }
}

/// Detect the current platform from the real filesystem and PATH.
pub fn detect_platform() -> PlatformInfo {
    let info = detect_platform_with(
        std::env::consts::OS,
        |marker| marker.exists(),
        command_on_path,
    );
    tracing::debug!(
        "Detected platform: {:?}, package manager: {}",
        info.os,
        info.package_manager_label()
    );
    info
}

/// Detect the platform with injected probes.
///
/// `os` is a platform identifier as in [`std::env::consts::OS`].
pub fn detect_platform_with<M, C>(os: &str, marker_exists: M, command_exists: C) -> PlatformInfo
where
    M: Fn(&Path) -> bool,
    C: Fn(&str) -> bool,
{
    let family = detect_os_family(os, &marker_exists);
    let package_manager = detect_package_manager(&family, &command_exists);
    PlatformInfo::new(family, package_manager)
}

fn detect_os_family<M>(os: &str, marker_exists: &M) -> OsFamily
where
    M: Fn(&Path) -> bool,
{
    match os {
        "macos" => OsFamily::MacOS,
        "linux" => LINUX_MARKERS
            .iter()
            .find(|(marker, _)| marker_exists(Path::new(marker)))
            .map(|(_, family)| family.clone())
            .unwrap_or(OsFamily::Linux),
        other => OsFamily::Other(other.to_string()),
    }
}

fn detect_package_manager<C>(family: &OsFamily, command_exists: &C) -> Option<PackageManager>
where
    C: Fn(&str) -> bool,
{
    match family {
        OsFamily::MacOS => command_exists("brew").then_some(PackageManager::Brew),
        OsFamily::Debian => Some(PackageManager::Apt),
        OsFamily::RedHat => {
            if command_exists("dnf") {
                Some(PackageManager::Dnf)
            } else {
                Some(PackageManager::Yum)
            }
        }
        OsFamily::Arch => Some(PackageManager::Pacman),
        OsFamily::Alpine => Some(PackageManager::Apk),
        OsFamily::Linux | OsFamily::Other(_) => None,
    }
}
