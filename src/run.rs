//! The one-shot execution path.
//!
//! Seeds an endpoint registry from configuration, builds the notifier,
//! sends the notification, and reports the response.

use std::sync::Arc;

use thiserror::Error;

use notify_out::config::ValidatedConfig;
use notify_out::notify::{Notifier, NotifyError, Params, RequestOptions};
use notify_out::registry::{EndpointRegistry, RegistryError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Endpoint seed data was rejected by the registry.
    #[error("Failed to seed endpoint registry: {0}")]
    Seed(#[source] RegistryError),

    /// The notification could not be dispatched.
    #[error("Failed to dispatch notification: {0}")]
    Dispatch(#[source] NotifyError),
}

/// Executes one notification.
///
/// This function:
/// 1. Seeds a fresh registry from the config file's endpoint data, then
///    merges CLI-provided endpoints on top
/// 2. Builds the notifier with the configured parameters and request type
/// 3. Dispatches to the configured receiver
/// 4. Logs the response status and prints the body to stdout
///
/// The response is reported, not interpreted: deciding whether a
/// non-success status matters is left to whoever reads the output.
///
/// # Errors
///
/// Returns an error if:
/// - The endpoint seed data is not a table of name-to-URL strings
/// - The composed target is not a parseable URL
/// - The transport fails
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let registry = seed_registry(&config)?;
    tracing::debug!("Registry seeded with {} endpoints", registry.len());

    let notifier = Notifier::new()
        .with_registry(registry)
        .with(build_options(&config));

    let target = notifier
        .target_url(&config.receiver)
        .map_err(RunError::Dispatch)?;
    tracing::info!("Notifying {target}");

    let response = notifier
        .send_to(&config.receiver)
        .await
        .map_err(RunError::Dispatch)?;

    tracing::info!("Response status: {}", response.status);
    if let Some(text) = response.body_text() {
        if !text.is_empty() {
            println!("{text}");
        }
    }

    Ok(())
}

/// Builds a registry from the configuration's endpoint data.
///
/// File endpoints replace, CLI endpoints merge on top.
fn seed_registry(config: &ValidatedConfig) -> Result<Arc<EndpointRegistry>, RunError> {
    let registry = Arc::new(EndpointRegistry::new());

    if let Some(endpoints) = &config.file_endpoints {
        registry.set_all(endpoints).map_err(RunError::Seed)?;
    }
    if let Some(endpoints) = &config.cli_endpoints {
        registry.merge(endpoints).map_err(RunError::Seed)?;
    }

    Ok(registry)
}

/// Maps validated configuration onto notifier request options.
///
/// Method selection stays with the notifier: parameters imply POST unless
/// the configuration forces an explicit type.
fn build_options(config: &ValidatedConfig) -> RequestOptions {
    let mut options = RequestOptions::new();

    if !config.params.is_empty() {
        options = options.params(Params::from(config.params.clone()));
    }
    if let Some(kind) = config.request_type {
        options = options.request_type(kind);
    }

    options
}
