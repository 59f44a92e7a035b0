//! git-auto-switch entry point.
//!
//! Arguments are never parsed here; they all belong to the script.

use std::process::ExitCode;

use gas_bootstrap::config::BootstrapConfig;
use gas_bootstrap::delegate;
use gas_bootstrap::runner::{show_error, Bootstrapper};
use gas_bootstrap::shell::SystemRunner;
use gas_bootstrap::ui::{should_use_colors, TerminalUI};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so they never mix with the script's stdout.
/// Level is controlled by:
/// 1. `GAS_DEBUG` sets level to DEBUG
/// 2. `GAS_LOG`, then `RUST_LOG`
/// 3. Default is WARN
fn init_tracing(config: &BootstrapConfig) {
    let filter = EnvFilter::try_new(config.log_filter())
        .unwrap_or_else(|_| EnvFilter::new(gas_bootstrap::config::DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let config = BootstrapConfig::from_env();
    init_tracing(&config);

    let args: Vec<_> = std::env::args_os().skip(1).collect();
    tracing::debug!("Bootstrap starting with args: {:?}", args);

    let mut ui = TerminalUI::with_colors(!config.no_color && should_use_colors());

    let delegate_path = match &config.delegate_override {
        Some(path) => delegate::resolve(path),
        None => delegate::default_delegate_path(),
    };
    let delegate_path = match delegate_path {
        Ok(path) => path,
        Err(e) => {
            show_error(&mut ui, &e);
            return ExitCode::from(1);
        }
    };

    let mut runner = SystemRunner;
    let result = Bootstrapper::new(&mut runner, &mut ui, delegate_path).run(&args);

    match result {
        Ok(outcome) => ExitCode::from(outcome.status_byte()),
        Err(e) => {
            show_error(&mut ui, &e);
            ExitCode::from(1)
        }
    }
}
