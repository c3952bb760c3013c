//! Binary-side startup helpers: exit codes, logging setup, error hints.

use notify_out::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Exit codes reported by the binary.
pub mod exit_code {
    use std::process::ExitCode;

    /// The notification was dispatched (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Bad or incomplete configuration (exit code 1).
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Registry seeding or dispatch failed (exit code 2).
    ///
    /// A function because `ExitCode::from` is not const.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Points the user at a fix for the usual configuration mistakes.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::RECEIVER => {
            eprintln!(
                "\nPass a receiver (an endpoint name or a URL), or set request.receiver in the config file."
            );
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'notify-out init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Installs the tracing subscriber.
///
/// `--verbose` lowers the default level to DEBUG; `RUST_LOG` still wins
/// over both defaults.
pub fn setup_tracing(verbose: bool) {
    let default = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .init();
}
