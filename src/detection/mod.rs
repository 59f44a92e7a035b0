//! Host platform and package manager detection.

pub mod package_manager;
pub mod platform;

pub use package_manager::{InstallCommands, PackageManager, HOMEBREW_INSTALL_URL};
pub use platform::{detect_platform, detect_platform_with, OsFamily, PlatformInfo};
