//! System package managers and how to drive them.

use std::fmt;

use crate::shell::CommandSpec;

/// Official Homebrew installer script.
pub const HOMEBREW_INSTALL_URL: &str =
    "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";

/// A system package manager the bootstrapper can install through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Brew,
    Apt,
    Dnf,
    Yum,
    Pacman,
    Apk,
}

/// Commands that install one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommands {
    /// Preparatory step whose failure is tolerated (e.g. refreshing the apt index).
    pub prepare: Option<CommandSpec>,
    /// The install itself; its exit status decides success.
    pub install: CommandSpec,
}

impl PackageManager {
    /// Executable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Brew => "brew",
            Self::Apt => "apt",
            Self::Dnf => "dnf",
            Self::Yum => "yum",
            Self::Pacman => "pacman",
            Self::Apk => "apk",
        }
    }

    /// Build the commands that install `package`.
    ///
    /// Everything except Homebrew runs through `sudo` unless the process
    /// already has an effective uid of 0.
    pub fn install_commands(&self, package: &str, elevated: bool) -> InstallCommands {
        let root = |args: &[&str]| privileged(elevated, args);

        match self {
            Self::Brew => InstallCommands {
                prepare: None,
                install: CommandSpec::new("brew").args(["install", package]),
            },
            Self::Apt => InstallCommands {
                prepare: Some(root(&["apt-get", "update", "-qq"])),
                install: root(&["apt-get", "install", "-y", "-qq", package]),
            },
            Self::Dnf => InstallCommands {
                prepare: None,
                install: root(&["dnf", "install", "-y", "-q", package]),
            },
            Self::Yum => InstallCommands {
                prepare: None,
                install: root(&["yum", "install", "-y", "-q", package]),
            },
            Self::Pacman => InstallCommands {
                prepare: None,
                install: root(&["pacman", "-S", "--noconfirm", "--quiet", package]),
            },
            Self::Apk => InstallCommands {
                prepare: None,
                install: root(&["apk", "add", "--quiet", package]),
            },
        }
    }

    /// Command that installs this package manager itself, where one exists.
    pub fn bootstrap_command(&self) -> Option<CommandSpec> {
        match self {
            Self::Brew => Some(CommandSpec::new("/bin/bash").args([
                "-c".to_string(),
                format!("/bin/bash -c \"$(curl -fsSL {})\"", HOMEBREW_INSTALL_URL),
            ])),
            Self::Apt | Self::Dnf | Self::Yum | Self::Pacman | Self::Apk => None,
        }
    }

    /// Human-readable name used in plan and progress output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Brew => "Homebrew",
            _ => self.name(),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn privileged(elevated: bool, args: &[&str]) -> CommandSpec {
    if elevated {
        CommandSpec::new(args[0]).args(&args[1..])
    } else {
        CommandSpec::new("sudo").args(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brew_installs_without_sudo() {
        let cmds = PackageManager::Brew.install_commands("jq", false);
        assert_eq!(cmds.install.to_string(), "brew install jq");
        assert!(cmds.prepare.is_none());
    }

    #[test]
    fn apt_refreshes_index_first() {
        let cmds = PackageManager::Apt.install_commands("jq", false);
        assert_eq!(
            cmds.prepare.map(|c| c.to_string()),
            Some("sudo apt-get update -qq".to_string())
        );
        assert_eq!(cmds.install.to_string(), "sudo apt-get install -y -qq jq");
    }

    #[test]
    fn redhat_family_commands() {
        assert_eq!(
            PackageManager::Dnf.install_commands("git", false).install.to_string(),
            "sudo dnf install -y -q git"
        );
        assert_eq!(
            PackageManager::Yum.install_commands("git", false).install.to_string(),
            "sudo yum install -y -q git"
        );
    }

    #[test]
    fn pacman_and_apk_commands() {
        assert_eq!(
            PackageManager::Pacman
                .install_commands("bash", false)
                .install
                .to_string(),
            "sudo pacman -S --noconfirm --quiet bash"
        );
        assert_eq!(
            PackageManager::Apk.install_commands("bash", false).install.to_string(),
            "sudo apk add --quiet bash"
        );
    }

    #[test]
    fn elevated_drops_sudo() {
        let cmds = PackageManager::Apt.install_commands("jq", true);
        assert_eq!(cmds.install.to_string(), "apt-get install -y -qq jq");
        assert_eq!(
            cmds.prepare.map(|c| c.to_string()),
            Some("apt-get update -qq".to_string())
        );
    }

    #[test]
    fn only_brew_can_bootstrap() {
        let cmd = PackageManager::Brew.bootstrap_command().unwrap();
        assert_eq!(cmd.program, "/bin/bash");
        assert!(cmd.to_string().contains(HOMEBREW_INSTALL_URL));
        assert!(PackageManager::Apt.bootstrap_command().is_none());
        assert!(PackageManager::Apk.bootstrap_command().is_none());
    }

    #[test]
    fn display_uses_executable_name() {
        assert_eq!(PackageManager::Pacman.to_string(), "pacman");
        assert_eq!(PackageManager::Brew.display_name(), "Homebrew");
    }
}
