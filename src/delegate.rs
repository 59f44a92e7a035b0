//! Hand-off to the `git-auto-switch` script.
//!
//! The script ships next to the bootstrapper: `<bin dir>/../git-auto-switch`.
//! It gets the caller's argv untouched and the terminal for as long as it
//! runs, and its exit status becomes ours.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::{BootstrapError, Result};
use crate::shell::{describe_args, CommandRunner, CommandSpec};
use crate::ui::UserInterface;

/// File name of the delegate script.
pub const DELEGATE_NAME: &str = "git-auto-switch";

/// Exit code used when the delegate status can't be determined.
const UNKNOWN_EXIT: i32 = 1;

/// Where the delegate lives relative to the bootstrapper executable.
///
/// Symlinks are resolved first so a package manager's bin shim still
/// points into the real package directory.
pub fn locate_delegate(exe: &Path) -> PathBuf {
    let exe = exe.canonicalize().unwrap_or_else(|_| exe.to_path_buf());
    let bin_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    bin_dir.join("..").join(DELEGATE_NAME)
}

/// Delegate location for the running executable.
pub fn default_delegate_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the bootstrapper executable")?;
    Ok(locate_delegate(&exe))
}

/// Anchor a delegate path to the working directory.
///
/// A bare name would otherwise be looked up on PATH at spawn time.
pub fn resolve(path: &Path) -> Result<PathBuf> {
    let resolved = std::path::absolute(path)
        .with_context(|| format!("cannot resolve delegate path {}", path.display()))?;
    Ok(resolved)
}

/// Fail with [`BootstrapError::DelegateNotFound`] unless the delegate exists.
pub fn ensure_present(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(BootstrapError::DelegateNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Run the delegate with `args` and return the exit code to mirror.
///
/// A delegate killed by a signal reports `128 + signal`, as shells do.
pub fn invoke(
    path: &Path,
    args: &[OsString],
    runner: &mut dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> Result<i32> {
    let path = resolve(path)?;
    let path = path.as_path();
    ensure_present(path)?;

    let command = CommandSpec::new(path).args(args.iter().cloned());
    tracing::debug!("Invoking {} [{}]", path.display(), describe_args(args));

    let result = {
        let lease = ui.lease_terminal();
        runner.run_interactive(&command, &lease)
    };

    match result {
        Ok(result) => {
            let code = result
                .exit_code
                .or_else(|| result.signal.map(|sig| 128 + sig))
                .unwrap_or(UNKNOWN_EXIT);
            tracing::debug!("Delegate exited with {}", code);
            Ok(code)
        }
        Err(e) => Err(spawn_error(path, e)),
    }
}

fn spawn_error(path: &Path, err: io::Error) -> BootstrapError {
    let path = path.to_path_buf();
    match err.kind() {
        // The script exists, so NotFound means its interpreter is missing.
        io::ErrorKind::NotFound => BootstrapError::DelegateInterpreterMissing { path },
        io::ErrorKind::PermissionDenied => BootstrapError::DelegatePermissionDenied { path },
        _ => BootstrapError::DelegateSpawnFailed { path, source: err },
    }
}
