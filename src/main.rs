//! Binary entry point for notify-out.

use std::process::ExitCode;

use notify_out::config::{Cli, Command, ConfigError, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Some(Command::Init { output }) = &cli.command {
        return write_template(output);
    }

    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => return config_failure(&e),
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    notify(config)
}

/// Writes the commented configuration template for the `init` subcommand.
fn write_template(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Reports a configuration problem and picks the matching exit code.
fn config_failure(error: &ConfigError) -> ExitCode {
    eprintln!("Configuration error: {error}");
    print_config_hint(error);
    exit_code::CONFIG_ERROR
}

/// Runs the one-shot dispatch on a current-thread runtime.
///
/// A single blocking round trip needs no worker threads.
fn notify(config: ValidatedConfig) -> ExitCode {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    match runtime.block_on(run::execute(config)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Notification error: {e}");
            exit_code::runtime_error()
        }
    }
}
